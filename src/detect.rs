use crate::consts::{
    CLOCK_SEPARATOR, COMPACT_DATETIME_LEN, COMPACT_DATE_LEN, DEFAULT_DAY_MONTH_ORDER,
    DOT_SEPARATOR, FULL_YEAR_WIDTH, HYPHEN_SEPARATOR, ISO_DATETIME_SEPARATOR, MAX_DAY, MAX_MONTH,
    MICROS_WIDTH, SHORT_YEAR_WIDTH, SLASH_SEPARATOR,
};
use crate::pattern::{self, Clock, DateOrder, Layout, Pattern, Shape};
use crate::ConvertError;

/// A literal resolved against the registry: the matching pattern plus
/// the raw captured fields, not yet range-checked. Two-digit years are
/// carried as written (0-99).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Detection {
    pub(crate) pattern: &'static Pattern,
    pub(crate) year: u16,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) fraction: Option<Fraction>,
    pub(crate) offset: Option<RawOffset>,
}

/// Fractional seconds as written: the digits' value and how many there
/// were (1-6), so `.5` and `.500000` stay distinguishable until scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fraction {
    pub(crate) value: u32,
    pub(crate) digits: u8,
}

/// A captured UTC offset, sign applied to both components so `-00:30`
/// survives as `(0, -30)`. `Z` captures as `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawOffset {
    pub(crate) hours: i8,
    pub(crate) minutes: i8,
}

/// Date fields in calendar positions, after the reading order has been
/// settled.
#[derive(Debug, Clone, Copy)]
struct RawDate {
    order: DateOrder,
    short_year: bool,
    year: u16,
    month: u8,
    day: u8,
}

/// Clock fields as written.
#[derive(Debug, Clone, Copy)]
struct RawClock {
    precision: Clock,
    hour: u8,
    minute: u8,
    second: u8,
    fraction: Option<Fraction>,
}

/// Classifies a literal against the pattern registry.
///
/// The input is first stripped of decoration, then split structurally;
/// the resulting facets are looked up in the registry. Anything that
/// does not land exactly on a registered pattern is an
/// `UnrecognizedFormat` error carrying the offending literal.
pub(crate) fn detect(input: &str) -> Result<Detection, ConvertError> {
    let cleaned = sanitize(input);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    match tokens.as_slice() {
        [token] if token.contains(ISO_DATETIME_SEPARATOR) => detect_iso(input, token),
        [token] if all_digits(token) => detect_compact(input, token),
        [token] => detect_date_only(input, token),
        [date_token, clock_token] => detect_spaced(input, date_token, clock_token),
        _ => Err(unrecognized(input)),
    }
}

/// Drops every character that cannot appear in a supported literal,
/// so decorated inputs like `"📅 23/07/2025!"` still classify.
fn sanitize(input: &str) -> String {
    input.chars().filter(|c| is_date_char(*c)).collect()
}

fn is_date_char(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(
            c,
            HYPHEN_SEPARATOR
                | SLASH_SEPARATOR
                | DOT_SEPARATOR
                | CLOCK_SEPARATOR
                | ISO_DATETIME_SEPARATOR
                | 'Z'
                | '+'
        )
}

fn unrecognized(input: &str) -> ConvertError {
    ConvertError::UnrecognizedFormat(input.trim().to_owned())
}

fn detect_iso(raw: &str, token: &str) -> Result<Detection, ConvertError> {
    let (date_token, rest) = token
        .split_once(ISO_DATETIME_SEPARATOR)
        .ok_or_else(|| unrecognized(raw))?;
    if rest.contains(ISO_DATETIME_SEPARATOR) {
        return Err(unrecognized(raw));
    }
    let (clock_token, zone) = split_zone(rest).ok_or_else(|| unrecognized(raw))?;
    let clock = parse_clock(clock_token).ok_or_else(|| unrecognized(raw))?;
    let (separator, groups) = split_date(date_token).ok_or_else(|| unrecognized(raw))?;
    let date = read_date(groups).ok_or_else(|| unrecognized(raw))?;
    build(raw, date, Some(separator), Some(clock), Layout::IsoT, zone)
}

fn detect_compact(raw: &str, token: &str) -> Result<Detection, ConvertError> {
    let (date, clock) = read_compact(token).ok_or_else(|| unrecognized(raw))?;
    build(raw, date, None, clock, Layout::Compact, None)
}

fn detect_date_only(raw: &str, token: &str) -> Result<Detection, ConvertError> {
    let (separator, groups) = split_date(token).ok_or_else(|| unrecognized(raw))?;
    let date = read_date(groups).ok_or_else(|| unrecognized(raw))?;
    build(raw, date, Some(separator), None, Layout::DateOnly, None)
}

fn detect_spaced(raw: &str, date_token: &str, clock_token: &str) -> Result<Detection, ConvertError> {
    let clock = parse_clock(clock_token).ok_or_else(|| unrecognized(raw))?;
    let (separator, groups) = split_date(date_token).ok_or_else(|| unrecognized(raw))?;
    let date = read_date(groups).ok_or_else(|| unrecognized(raw))?;
    build(raw, date, Some(separator), Some(clock), Layout::Spaced, None)
}

/// Looks the resolved facets up in the registry and assembles the
/// detection. A miss means the literal's shape is not a supported
/// grammar (a dotted date with a clock, a two-digit year with a clock).
fn build(
    raw: &str,
    date: RawDate,
    separator: Option<char>,
    clock: Option<RawClock>,
    layout: Layout,
    zone: Option<RawOffset>,
) -> Result<Detection, ConvertError> {
    let (precision, hour, minute, second, fraction) = match clock {
        Some(c) => (c.precision, c.hour, c.minute, c.second, c.fraction),
        None => (Clock::None, 0, 0, 0, None),
    };
    let shape = Shape {
        order: date.order,
        short_year: date.short_year,
        separator,
        clock: precision,
        layout,
        zoned: zone.is_some(),
    };
    let pattern = pattern::lookup(shape).ok_or_else(|| unrecognized(raw))?;
    Ok(Detection {
        pattern,
        year: date.year,
        month: date.month,
        day: date.day,
        hour,
        minute,
        second,
        fraction,
        offset: zone,
    })
}

/// Splits a date token on its single separator kind into three digit
/// groups. Mixed separators, stray characters, or a group count other
/// than three all fail.
fn split_date(token: &str) -> Option<(char, [&str; 3])> {
    let separator = date_separator(token)?;
    let parts: Vec<&str> = token.split(separator).collect();
    let &[first, second, third] = parts.as_slice() else {
        return None;
    };
    Some((separator, [first, second, third]))
}

/// The one date separator used by the token, rejecting mixed separators
/// and any character that is neither a digit nor a separator.
fn date_separator(token: &str) -> Option<char> {
    let mut found = None;
    for c in token.chars() {
        if matches!(c, HYPHEN_SEPARATOR | SLASH_SEPARATOR | DOT_SEPARATOR) {
            match found {
                None => found = Some(c),
                Some(prev) if prev != c => return None,
                Some(_) => {}
            }
        } else if !c.is_ascii_digit() {
            return None;
        }
    }
    found
}

/// Classifies three digit groups by width and settles the reading
/// order.
///
/// `[4, 1-2, 1-2]` reads year-first. `[1-2, 1-2, 4]` is the day/month
/// class: a first group that cannot be a month reads day-first, else a
/// second group that cannot be a month reads month-first, else the
/// default order applies. All-small groups are the two-digit-year
/// class: a first group that cannot be a day is the year, otherwise
/// the year trails and the day/month rule repeats.
fn read_date(groups: [&str; 3]) -> Option<RawDate> {
    let [first, second, third] = groups;
    if first.len() == FULL_YEAR_WIDTH && small(second) && small(third) {
        return Some(RawDate {
            order: DateOrder::Ymd,
            short_year: false,
            year: full_year(first)?,
            month: group(second)?,
            day: group(third)?,
        });
    }
    if small(first) && small(second) && third.len() == FULL_YEAR_WIDTH {
        let lead = group(first)?;
        let next = group(second)?;
        let order = resolve_day_month(lead, next);
        let (day, month) = day_month(order, lead, next);
        return Some(RawDate {
            order,
            short_year: false,
            year: full_year(third)?,
            month,
            day,
        });
    }
    if small(first) && small(second) && small(third) {
        let lead = group(first)?;
        if lead > MAX_DAY {
            return Some(RawDate {
                order: DateOrder::Ymd,
                short_year: true,
                year: u16::from(lead),
                month: group(second)?,
                day: group(third)?,
            });
        }
        let next = group(second)?;
        let order = resolve_day_month(lead, next);
        let (day, month) = day_month(order, lead, next);
        return Some(RawDate {
            order,
            short_year: true,
            year: u16::from(group(third)?),
            month,
            day,
        });
    }
    None
}

/// First group that cannot be a month reads day-first; else a second
/// group that cannot be a month reads month-first; else the documented
/// default applies.
fn resolve_day_month(first: u8, second: u8) -> DateOrder {
    if first > MAX_MONTH {
        DateOrder::Dmy
    } else if second > MAX_MONTH {
        DateOrder::Mdy
    } else {
        DEFAULT_DAY_MONTH_ORDER
    }
}

/// Assigns the two leading groups to calendar positions for the
/// resolved order.
fn day_month(order: DateOrder, first: u8, second: u8) -> (u8, u8) {
    if order == DateOrder::Mdy {
        (second, first)
    } else {
        (first, second)
    }
}

/// Reads `yyyymmdd` or `yyyymmddhhmmss`. Any other length of digit run
/// is unsupported.
fn read_compact(token: &str) -> Option<(RawDate, Option<RawClock>)> {
    let date = |s: &str| -> Option<RawDate> {
        Some(RawDate {
            order: DateOrder::Ymd,
            short_year: false,
            year: s.get(0..4)?.parse().ok()?,
            month: s.get(4..6)?.parse().ok()?,
            day: s.get(6..8)?.parse().ok()?,
        })
    };
    match token.len() {
        COMPACT_DATE_LEN => Some((date(token)?, None)),
        COMPACT_DATETIME_LEN => {
            let clock = RawClock {
                precision: Clock::Seconds,
                hour: token.get(8..10)?.parse().ok()?,
                minute: token.get(10..12)?.parse().ok()?,
                second: token.get(12..14)?.parse().ok()?,
                fraction: None,
            };
            Some((date(token)?, Some(clock)))
        }
        _ => None,
    }
}

/// Reads `hh:mm`, `hh:mm:ss`, or `hh:mm:ss.ffffff`. Values are captured
/// as written; range checks happen during assembly.
fn parse_clock(token: &str) -> Option<RawClock> {
    let parts: Vec<&str> = token.split(CLOCK_SEPARATOR).collect();
    match parts.as_slice() {
        &[hour, minute] => Some(RawClock {
            precision: Clock::Minutes,
            hour: group(hour)?,
            minute: group(minute)?,
            second: 0,
            fraction: None,
        }),
        &[hour, minute, second] => {
            let (second_digits, fraction) = match second.split_once(DOT_SEPARATOR) {
                Some((digits, frac)) => (digits, Some(parse_fraction(frac)?)),
                None => (second, None),
            };
            let precision = if fraction.is_some() {
                Clock::Micros
            } else {
                Clock::Seconds
            };
            Some(RawClock {
                precision,
                hour: group(hour)?,
                minute: group(minute)?,
                second: group(second_digits)?,
                fraction,
            })
        }
        _ => None,
    }
}

/// Splits a trailing zone marker off an ISO clock token. `Z` and
/// `±h:mm`/`±hh:mm` are the only supported spellings.
fn split_zone(token: &str) -> Option<(&str, Option<RawOffset>)> {
    if let Some(clock) = token.strip_suffix('Z') {
        if clock.contains(['Z', '+', HYPHEN_SEPARATOR]) {
            return None;
        }
        return Some((clock, Some(RawOffset { hours: 0, minutes: 0 })));
    }
    if let Some(index) = token.find(['+', HYPHEN_SEPARATOR]) {
        let (clock, zone) = token.split_at(index);
        return Some((clock, Some(parse_offset(zone)?)));
    }
    Some((token, None))
}

fn parse_offset(zone: &str) -> Option<RawOffset> {
    let mut chars = zone.chars();
    let negative = match chars.next()? {
        '+' => false,
        HYPHEN_SEPARATOR => true,
        _ => return None,
    };
    let (hours_digits, minutes_digits) = chars.as_str().split_once(CLOCK_SEPARATOR)?;
    // Offset minutes are always written with two digits
    if !small(hours_digits) || minutes_digits.len() != 2 {
        return None;
    }
    let hours: i8 = hours_digits.parse().ok()?;
    let minutes: i8 = parse_digits(minutes_digits)?;
    if negative {
        Some(RawOffset {
            hours: -hours,
            minutes: -minutes,
        })
    } else {
        Some(RawOffset { hours, minutes })
    }
}

fn parse_fraction(digits: &str) -> Option<Fraction> {
    if digits.is_empty() || digits.len() > MICROS_WIDTH || !all_digits(digits) {
        return None;
    }
    Some(Fraction {
        value: digits.parse().ok()?,
        digits: u8::try_from(digits.len()).ok()?,
    })
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True for a 1-2 digit group.
fn small(s: &str) -> bool {
    all_digits(s) && s.len() <= SHORT_YEAR_WIDTH
}

/// A 1-2 digit group's value.
fn group(s: &str) -> Option<u8> {
    if small(s) { s.parse().ok() } else { None }
}

/// A 4-digit year group's value.
fn full_year(s: &str) -> Option<u16> {
    if all_digits(s) && s.len() == FULL_YEAR_WIDTH {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_digits(s: &str) -> Option<i8> {
    if all_digits(s) { s.parse().ok() } else { None }
}
