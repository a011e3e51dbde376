use crate::consts::{MICROS_WIDTH, PIVOT_BASE_1900, PIVOT_BASE_2000, TWO_DIGIT_YEAR_PIVOT};
use crate::detect::{self, Detection, Fraction};
use crate::types::UtcOffset;
use crate::value::{BabelDate, ValueError};
use crate::ConvertError;

/// Microsecond multiplier per fraction digit count (index 0 is unused,
/// a fraction always has 1-6 digits)
const FRACTION_SCALE: [u32; 7] = [0, 100_000, 10_000, 1_000, 100, 10, 1];

/// Detects the literal's format and assembles a validated value.
pub(crate) fn parse(input: &str) -> Result<BabelDate, ConvertError> {
    let detection = detect::detect(input)?;
    Ok(assemble(&detection)?)
}

/// Turns raw captured fields into a validated `BabelDate`.
///
/// Two-digit years are resolved against the pivot first; fields are
/// then checked in a fixed order (year, month, day, hour, minute,
/// second, fraction, offset) so an input with several bad fields always
/// reports the same one.
pub(crate) fn assemble(detection: &Detection) -> Result<BabelDate, ValueError> {
    let year = if detection.pattern.short_year() {
        resolve_century(detection.year)
    } else {
        detection.year
    };
    let value = BabelDate::new(year, detection.month, detection.day)?
        .and_hms(detection.hour, detection.minute, detection.second)?
        .and_micros(micros_of(detection.fraction))?;
    match detection.offset {
        Some(zone) => Ok(value.and_offset(UtcOffset::from_hm(zone.hours, zone.minutes)?)),
        None => Ok(value),
    }
}

/// `99` -> 1999, `25` -> 2025. The pivot is documented on
/// [`TWO_DIGIT_YEAR_PIVOT`].
fn resolve_century(two_digit: u16) -> u16 {
    if two_digit >= u16::from(TWO_DIGIT_YEAR_PIVOT) {
        PIVOT_BASE_1900 + two_digit
    } else {
        PIVOT_BASE_2000 + two_digit
    }
}

/// Scales a captured fraction to microseconds: `.5` is half a second
/// (500000), not five microseconds.
fn micros_of(fraction: Option<Fraction>) -> u32 {
    match fraction {
        Some(f) => {
            debug_assert!(
                (1..=MICROS_WIDTH).contains(&usize::from(f.digits)),
                "fraction digit count out of range: {}",
                f.digits
            );
            f.value * FRACTION_SCALE[usize::from(f.digits)]
        }
        None => 0,
    }
}
