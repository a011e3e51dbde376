use crate::pattern::DateOrder;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Largest day number in any month
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Last hour of the day (24-hour clock)
pub const MAX_HOUR: u8 = 23;
/// Last minute of an hour
pub const MAX_MINUTE: u8 = 59;
/// Last second of a minute (leap seconds are not represented)
pub const MAX_SECOND: u8 = 59;
/// Largest fractional-second value at microsecond precision
pub const MAX_MICROS: u32 = 999_999;

/// Fractional seconds are carried at microsecond precision (six digits)
pub(crate) const MICROS_WIDTH: usize = 6;

/// Digits in a full year (`2025`)
pub(crate) const FULL_YEAR_WIDTH: usize = 4;
/// Digits in a two-digit year (`25`)
pub(crate) const SHORT_YEAR_WIDTH: usize = 2;

/// Length of an undelimited date (`yyyymmdd`)
pub(crate) const COMPACT_DATE_LEN: usize = 8;
/// Length of an undelimited datetime (`yyyymmddhhmmss`)
pub(crate) const COMPACT_DATETIME_LEN: usize = 14;

/// Two-digit years at or above the pivot resolve to the 1900s,
/// years below it to the 2000s (`99` -> 1999, `25` -> 2025)
pub const TWO_DIGIT_YEAR_PIVOT: u8 = 50;
/// Century added to two-digit years at or above the pivot
pub(crate) const PIVOT_BASE_1900: u16 = 1900;
/// Century added to two-digit years below the pivot
pub(crate) const PIVOT_BASE_2000: u16 = 2000;

/// Reading applied when both leading date groups could be a month:
/// `03/04/2025` is taken as the 3rd of April, never March 4th
pub const DEFAULT_DAY_MONTH_ORDER: DateOrder = DateOrder::Dmy;

/// Date component separator (ISO 8601 and hyphenated regional formats)
pub const HYPHEN_SEPARATOR: char = '-';
/// Date component separator (slashed regional formats)
pub const SLASH_SEPARATOR: char = '/';
/// Date component separator (dotted regional formats)
pub const DOT_SEPARATOR: char = '.';
/// Separator between clock components (`15:30:45`)
pub const CLOCK_SEPARATOR: char = ':';
/// Designator between date and time in ISO 8601 (`2025-07-23T15:30:45`)
pub const ISO_DATETIME_SEPARATOR: char = 'T';
