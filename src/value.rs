use crate::consts::{MAX_DAY, MAX_HOUR, MAX_MICROS, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, UtcOffset, Year};
use crate::ConvertError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// A calendar field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValueError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    DayOutOfRange(u8),
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u8),
    #[display(fmt = "Invalid fractional seconds: {} (must be 0-{})", "_0", MAX_MICROS)]
    InvalidMicros(u32),
    #[display(
        fmt = "Invalid UTC offset: {} minutes (must be within ±{}:{:02} of UTC)",
        "_0",
        MAX_HOUR,
        MAX_MINUTE
    )]
    OffsetOutOfRange(i16),
}

impl std::error::Error for ValueError {}

/// A fully resolved calendar value: date, 24-hour clock down to
/// microseconds, and an optional explicit UTC offset.
///
/// Values without an offset are civil ("wall clock") readings and never
/// name an instant; values with one do. Every constructor validates, so
/// an existing `BabelDate` always holds a real Gregorian date and a real
/// clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BabelDate {
    year: Year,
    month: Month,
    day: Day,
    hour: u8,
    minute: u8,
    second: u8,
    micros: u32,
    offset: Option<UtcOffset>,
}

impl BabelDate {
    /// Creates a date at midnight with no offset.
    ///
    /// # Errors
    /// Returns the first failing field's `ValueError`, checking year,
    /// then month, then day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValueError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
            hour: 0,
            minute: 0,
            second: 0,
            micros: 0,
            offset: None,
        })
    }

    /// Sets the clock time, checking hour, then minute, then second.
    ///
    /// # Errors
    /// Returns the first failing field's `ValueError`.
    pub fn and_hms(mut self, hour: u8, minute: u8, second: u8) -> Result<Self, ValueError> {
        if hour > MAX_HOUR {
            return Err(ValueError::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(ValueError::InvalidMinute(minute));
        }
        if second > MAX_SECOND {
            return Err(ValueError::InvalidSecond(second));
        }
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        Ok(self)
    }

    /// Sets the fractional seconds in microseconds.
    ///
    /// # Errors
    /// Returns `ValueError::InvalidMicros` if the value exceeds 999999.
    pub fn and_micros(mut self, micros: u32) -> Result<Self, ValueError> {
        if micros > MAX_MICROS {
            return Err(ValueError::InvalidMicros(micros));
        }
        self.micros = micros;
        Ok(self)
    }

    /// Attaches an explicit UTC offset, making the value name an instant.
    pub const fn and_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns the year (1-9999)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the hour (0-23)
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59)
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59)
    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns the fractional seconds in microseconds (0-999999)
    #[inline]
    pub const fn micros(&self) -> u32 {
        self.micros
    }

    /// Returns the explicit UTC offset, if the value carries one
    #[inline]
    pub const fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    /// Returns the Year type
    #[inline]
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    #[inline]
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    #[inline]
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// True when the value carries an explicit UTC offset
    #[inline]
    pub const fn is_aware(&self) -> bool {
        self.offset.is_some()
    }

    /// The value's fields as a chrono naive datetime.
    /// Always `Some` for a validated value; chrono's representable
    /// range covers all of `1..=9999`.
    pub(crate) fn to_naive(self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )?
        .and_hms_micro_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            self.micros,
        )
    }

    /// The instant this value names, in its own offset.
    /// `None` when the value is offset-naive.
    pub(crate) fn to_fixed(self) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset?.to_fixed()?;
        self.to_naive()?.and_local_timezone(offset).single()
    }

    /// The instant this value names, normalized to UTC.
    /// `None` when the value is offset-naive and so names no instant.
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        Some(self.to_fixed()?.with_timezone(&Utc))
    }
}

impl fmt::Display for BabelDate {
    /// Canonical ISO 8601 form: `yyyy-mm-ddThh:mm:ss`, fractional
    /// seconds only when nonzero, offset as `±hh:mm` only when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get(),
            self.hour,
            self.minute,
            self.second
        )?;
        if self.micros != 0 {
            write!(f, ".{:06}", self.micros)?;
        }
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

impl FromStr for BabelDate {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl serde::Serialize for BabelDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BabelDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
