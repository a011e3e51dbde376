//! Builders shared by the unit tests. Panics are fine here; every
//! caller hands in literals it knows are valid.

use crate::types::UtcOffset;
use crate::BabelDate;

pub(crate) fn date(year: u16, month: u8, day: u8) -> BabelDate {
    BabelDate::new(year, month, day).unwrap()
}

pub(crate) fn datetime(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> BabelDate {
    BabelDate::new(year, month, day)
        .unwrap()
        .and_hms(hour, minute, second)
        .unwrap()
}

pub(crate) fn zoned(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    offset_minutes: i16,
) -> BabelDate {
    datetime(year, month, day, hour, minute, second)
        .and_offset(UtcOffset::from_minutes(offset_minutes).unwrap())
}
