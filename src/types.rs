use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_YEAR,
};
use crate::ValueError;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ValueError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        let non_zero = NonZeroU16::new(value).ok_or(ValueError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ValueError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ValueError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValueError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ValueError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ValueError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ValueError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValueError::InvalidDay {
            month,
            day: value,
            year,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(ValueError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against year/month context, so check the
        // bounds that hold for every month
        let non_zero = NonZeroU8::new(value).ok_or(ValueError::DayOutOfRange(value))?;
        if value > MAX_DAY {
            return Err(ValueError::DayOutOfRange(value));
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Largest offset representable, in minutes (`+23:59` from UTC)
const MAX_OFFSET_MINUTES: i16 = (MAX_HOUR as i16) * 60 + (MAX_MINUTE as i16);

/// A UTC offset in signed minutes east of UTC (`+02:00` is 120).
/// Guaranteed to be within `±23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct UtcOffset(i16);

impl UtcOffset {
    /// The zero offset (`+00:00`)
    pub const UTC: Self = Self(0);

    /// Creates an offset from a total number of minutes east of UTC
    ///
    /// # Errors
    /// Returns `ValueError::OffsetOutOfRange` if the value is outside `±23:59`.
    pub fn from_minutes(minutes: i16) -> Result<Self, ValueError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(ValueError::OffsetOutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    /// Creates an offset from signed hour and minute components,
    /// so `-00:30` is `from_hm(0, -30)`.
    ///
    /// # Errors
    /// Returns `ValueError::OffsetOutOfRange` if a component is out of
    /// range or the components carry opposite signs.
    pub fn from_hm(hours: i8, minutes: i8) -> Result<Self, ValueError> {
        let total = i16::from(hours) * 60 + i16::from(minutes);
        if hours.unsigned_abs() > MAX_HOUR
            || minutes.unsigned_abs() > MAX_MINUTE
            || (hours > 0 && minutes < 0)
            || (hours < 0 && minutes > 0)
        {
            return Err(ValueError::OffsetOutOfRange(total));
        }
        Ok(Self(total))
    }

    /// Returns the offset as total minutes east of UTC
    #[inline]
    pub const fn minutes(self) -> i16 {
        self.0
    }

    /// Bridges into chrono's fixed-offset timezone.
    /// Always `Some` for a validated offset (`±23:59` is within chrono's
    /// `±24:00` bound).
    pub(crate) fn to_fixed(self) -> Option<FixedOffset> {
        FixedOffset::east_opt(i32::from(self.0) * 60)
    }
}

impl TryFrom<i16> for UtcOffset {
    type Error = ValueError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_minutes(value)
    }
}

impl From<UtcOffset> for i16 {
    fn from(offset: UtcOffset) -> Self {
        offset.0
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(ValueError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(ValueError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_get() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.get(), 2024);
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = 10000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_into_u16() {
        let year = Year::new(2024).unwrap();
        let value: u16 = year.into();
        assert_eq!(value, 2024);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(ValueError::InvalidMonth(0))));
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(13);
        assert!(matches!(result, Err(ValueError::InvalidMonth(13))));

        let result = Month::new(255);
        assert!(matches!(result, Err(ValueError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, 2024, 1);
        assert!(matches!(result, Err(ValueError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_invalid_too_large() {
        // 32 is invalid for January
        let result = Day::new(32, 2024, 1);
        assert!(matches!(
            result,
            Err(ValueError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        // Valid day (context-free validation)
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        // Zero is invalid
        let result: Result<Day, _> = 0.try_into();
        assert!(matches!(result, Err(ValueError::DayOutOfRange(0))));

        // Above the bound that holds for every month
        let result: Result<Day, _> = 32.try_into();
        assert!(matches!(result, Err(ValueError::DayOutOfRange(32))));
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, 2024, 8).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);

        let rejected = serde_json::from_str::<Day>("40").unwrap_err();
        assert!(rejected.to_string().contains("must be 1-31"));
    }

    #[test]
    fn test_offset_from_minutes_valid() {
        assert_eq!(UtcOffset::from_minutes(0).unwrap(), UtcOffset::UTC);
        assert_eq!(UtcOffset::from_minutes(120).unwrap().minutes(), 120);
        assert_eq!(UtcOffset::from_minutes(-180).unwrap().minutes(), -180);
        assert_eq!(UtcOffset::from_minutes(1439).unwrap().minutes(), 1439);
        assert_eq!(UtcOffset::from_minutes(-1439).unwrap().minutes(), -1439);
    }

    #[test]
    fn test_offset_from_minutes_out_of_range() {
        assert!(matches!(
            UtcOffset::from_minutes(1440),
            Err(ValueError::OffsetOutOfRange(1440))
        ));
        assert!(matches!(
            UtcOffset::from_minutes(-1440),
            Err(ValueError::OffsetOutOfRange(-1440))
        ));
    }

    #[test]
    fn test_offset_from_hm() {
        assert_eq!(UtcOffset::from_hm(2, 0).unwrap().minutes(), 120);
        assert_eq!(UtcOffset::from_hm(-3, 0).unwrap().minutes(), -180);
        assert_eq!(UtcOffset::from_hm(5, 30).unwrap().minutes(), 330);
        assert_eq!(UtcOffset::from_hm(0, -30).unwrap().minutes(), -30);
        assert_eq!(UtcOffset::from_hm(-23, -59).unwrap().minutes(), -1439);
    }

    #[test]
    fn test_offset_from_hm_invalid() {
        assert!(UtcOffset::from_hm(24, 0).is_err());
        assert!(UtcOffset::from_hm(-24, 0).is_err());
        assert!(UtcOffset::from_hm(0, 60).is_err());
        // Components with opposite signs don't name a single offset
        assert!(UtcOffset::from_hm(2, -30).is_err());
        assert!(UtcOffset::from_hm(-2, 30).is_err());
    }

    #[test]
    fn test_offset_display() {
        assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
        assert_eq!(UtcOffset::from_hm(2, 0).unwrap().to_string(), "+02:00");
        assert_eq!(UtcOffset::from_hm(-3, 0).unwrap().to_string(), "-03:00");
        assert_eq!(UtcOffset::from_hm(5, 30).unwrap().to_string(), "+05:30");
        assert_eq!(UtcOffset::from_hm(0, -30).unwrap().to_string(), "-00:30");
    }

    #[test]
    fn test_offset_serde() {
        let offset = UtcOffset::from_hm(-3, 0).unwrap();
        let json = serde_json::to_string(&offset).unwrap();
        assert_eq!(json, "-180");

        let parsed: UtcOffset = serde_json::from_str(&json).unwrap();
        assert_eq!(offset, parsed);

        let bad: Result<UtcOffset, _> = serde_json::from_str("2000");
        assert!(bad.is_err());
    }

    #[test]
    fn test_offset_to_fixed() {
        let east = UtcOffset::from_hm(2, 0).unwrap().to_fixed().unwrap();
        assert_eq!(east.local_minus_utc(), 7200);

        let west = UtcOffset::from_hm(-3, 0).unwrap().to_fixed().unwrap();
        assert_eq!(west.local_minus_utc(), -10800);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            // Divisible by 4
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            // Century years not divisible by 400
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            // Divisible by 400
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(
                days_in_month(2024, month),
                31,
                "Month {month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(
                days_in_month(2024, month),
                30,
                "Month {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(
            days_in_month(1900, 2),
            28,
            "Century year not divisible by 400"
        );
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }
}
