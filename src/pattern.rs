use crate::consts::{DOT_SEPARATOR, HYPHEN_SEPARATOR, SLASH_SEPARATOR};
use crate::ConvertError;
use std::fmt;
use std::str::FromStr;

/// Reading order of the date fields within a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// Day, month, year (`23/07/2025`)
    Dmy,
    /// Month, day, year (`07/23/2025`)
    Mdy,
    /// Year, month, day (`2025-07-23`)
    Ymd,
}

/// Clock precision carried by a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clock {
    /// Date only, no clock
    None,
    /// `hh:mm`
    Minutes,
    /// `hh:mm:ss`
    Seconds,
    /// `hh:mm:ss.ffffff`
    Micros,
}

/// How the clock attaches to the date part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Separated date with no clock (`23/07/2025`)
    DateOnly,
    /// Date and clock joined by whitespace (`23/07/2025 15:30:45`)
    Spaced,
    /// ISO 8601 `T` designator (`2025-07-23T15:30:45`)
    IsoT,
    /// One undelimited digit run (`20250723153045`)
    Compact,
}

/// Whether a pattern's day/month reading is settled by structure alone.
///
/// Year-first patterns are structurally unambiguous. Day-first and
/// month-first patterns share a surface shape; which one a literal
/// belongs to is decided by field values, falling back to
/// [`DEFAULT_DAY_MONTH_ORDER`](crate::DEFAULT_DAY_MONTH_ORDER).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ambiguity {
    Unambiguous,
    DayMonthAmbiguous,
}

/// Identifier of a registered date pattern.
///
/// Variants are declared in registry priority order; [`patterns`]
/// iterates them in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePattern {
    IsoZonedMicros,
    IsoZonedSeconds,
    IsoMicros,
    IsoSeconds,
    YmdHyphenMicros,
    YmdHyphenSeconds,
    YmdHyphenMinutes,
    YmdSlashMicros,
    YmdSlashSeconds,
    YmdSlashMinutes,
    YmdHyphen,
    YmdSlash,
    YmdDot,
    CompactDateTime,
    CompactDate,
    ShortYmdHyphen,
    ShortYmdSlash,
    DmySlashMicros,
    DmySlashSeconds,
    DmySlashMinutes,
    DmyHyphenMicros,
    DmyHyphenSeconds,
    DmyHyphenMinutes,
    DmySlash,
    DmyHyphen,
    DmyDot,
    ShortDmySlash,
    ShortDmyHyphen,
    MdySlashMicros,
    MdySlashSeconds,
    MdySlashMinutes,
    MdyHyphenMicros,
    MdyHyphenSeconds,
    MdyHyphenMinutes,
    MdySlash,
    MdyHyphen,
    MdyDot,
    ShortMdySlash,
    ShortMdyHyphen,
}

impl DatePattern {
    /// Human-readable mask of the pattern (`dd/mm/yyyy hh:mm:ss`).
    ///
    /// Masks are unique across the registry and double as the serde
    /// string form. Zoned masks show `±hh:mm`; a literal `Z` is also
    /// accepted there and reads as `+00:00`.
    pub const fn mask(self) -> &'static str {
        match self {
            Self::IsoZonedMicros => "yyyy-mm-ddThh:mm:ss.ffffff±hh:mm",
            Self::IsoZonedSeconds => "yyyy-mm-ddThh:mm:ss±hh:mm",
            Self::IsoMicros => "yyyy-mm-ddThh:mm:ss.ffffff",
            Self::IsoSeconds => "yyyy-mm-ddThh:mm:ss",
            Self::YmdHyphenMicros => "yyyy-mm-dd hh:mm:ss.ffffff",
            Self::YmdHyphenSeconds => "yyyy-mm-dd hh:mm:ss",
            Self::YmdHyphenMinutes => "yyyy-mm-dd hh:mm",
            Self::YmdSlashMicros => "yyyy/mm/dd hh:mm:ss.ffffff",
            Self::YmdSlashSeconds => "yyyy/mm/dd hh:mm:ss",
            Self::YmdSlashMinutes => "yyyy/mm/dd hh:mm",
            Self::YmdHyphen => "yyyy-mm-dd",
            Self::YmdSlash => "yyyy/mm/dd",
            Self::YmdDot => "yyyy.mm.dd",
            Self::CompactDateTime => "yyyymmddhhmmss",
            Self::CompactDate => "yyyymmdd",
            Self::ShortYmdHyphen => "yy-mm-dd",
            Self::ShortYmdSlash => "yy/mm/dd",
            Self::DmySlashMicros => "dd/mm/yyyy hh:mm:ss.ffffff",
            Self::DmySlashSeconds => "dd/mm/yyyy hh:mm:ss",
            Self::DmySlashMinutes => "dd/mm/yyyy hh:mm",
            Self::DmyHyphenMicros => "dd-mm-yyyy hh:mm:ss.ffffff",
            Self::DmyHyphenSeconds => "dd-mm-yyyy hh:mm:ss",
            Self::DmyHyphenMinutes => "dd-mm-yyyy hh:mm",
            Self::DmySlash => "dd/mm/yyyy",
            Self::DmyHyphen => "dd-mm-yyyy",
            Self::DmyDot => "dd.mm.yyyy",
            Self::ShortDmySlash => "dd/mm/yy",
            Self::ShortDmyHyphen => "dd-mm-yy",
            Self::MdySlashMicros => "mm/dd/yyyy hh:mm:ss.ffffff",
            Self::MdySlashSeconds => "mm/dd/yyyy hh:mm:ss",
            Self::MdySlashMinutes => "mm/dd/yyyy hh:mm",
            Self::MdyHyphenMicros => "mm-dd-yyyy hh:mm:ss.ffffff",
            Self::MdyHyphenSeconds => "mm-dd-yyyy hh:mm:ss",
            Self::MdyHyphenMinutes => "mm-dd-yyyy hh:mm",
            Self::MdySlash => "mm/dd/yyyy",
            Self::MdyHyphen => "mm-dd-yyyy",
            Self::MdyDot => "mm.dd.yyyy",
            Self::ShortMdySlash => "mm/dd/yy",
            Self::ShortMdyHyphen => "mm-dd-yy",
        }
    }

    /// A literal that detects as exactly this pattern.
    pub const fn example(self) -> &'static str {
        match self {
            Self::IsoZonedMicros => "2025-07-23T15:30:45.123456+02:00",
            Self::IsoZonedSeconds => "2025-07-23T15:30:45Z",
            Self::IsoMicros => "2025-07-23T15:30:45.123456",
            Self::IsoSeconds => "2025-07-23T15:30:45",
            Self::YmdHyphenMicros => "2025-07-23 15:30:45.123456",
            Self::YmdHyphenSeconds => "2025-07-23 15:30:45",
            Self::YmdHyphenMinutes => "2025-07-23 15:30",
            Self::YmdSlashMicros => "2025/07/23 15:30:45.123456",
            Self::YmdSlashSeconds => "2025/07/23 15:30:45",
            Self::YmdSlashMinutes => "2025/07/23 15:30",
            Self::YmdHyphen => "2025-07-23",
            Self::YmdSlash => "2025/07/23",
            Self::YmdDot => "2025.07.23",
            Self::CompactDateTime => "20250723153045",
            Self::CompactDate => "20250723",
            Self::ShortYmdHyphen => "99-07-23",
            Self::ShortYmdSlash => "99/07/23",
            Self::DmySlashMicros => "23/07/2025 15:30:45.123456",
            Self::DmySlashSeconds => "23/07/2025 15:30:45",
            Self::DmySlashMinutes => "23/07/2025 15:30",
            Self::DmyHyphenMicros => "23-07-2025 15:30:45.123456",
            Self::DmyHyphenSeconds => "23-07-2025 15:30:45",
            Self::DmyHyphenMinutes => "23-07-2025 15:30",
            Self::DmySlash => "23/07/2025",
            Self::DmyHyphen => "23-07-2025",
            Self::DmyDot => "23.07.2025",
            Self::ShortDmySlash => "23/07/25",
            Self::ShortDmyHyphen => "23-07-25",
            Self::MdySlashMicros => "07/23/2025 15:30:45.123456",
            Self::MdySlashSeconds => "07/23/2025 15:30:45",
            Self::MdySlashMinutes => "07/23/2025 15:30",
            Self::MdyHyphenMicros => "07-23-2025 15:30:45.123456",
            Self::MdyHyphenSeconds => "07-23-2025 15:30:45",
            Self::MdyHyphenMinutes => "07-23-2025 15:30",
            Self::MdySlash => "07/23/2025",
            Self::MdyHyphen => "07-23-2025",
            Self::MdyDot => "07.23.2025",
            Self::ShortMdySlash => "07/23/25",
            Self::ShortMdyHyphen => "07-23-25",
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mask())
    }
}

impl FromStr for DatePattern {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        patterns()
            .iter()
            .map(Pattern::id)
            .find(|p| p.mask() == s)
            .ok_or_else(|| ConvertError::UnrecognizedFormat(s.to_owned()))
    }
}

impl serde::Serialize for DatePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.mask())
    }
}

impl<'de> serde::Deserialize<'de> for DatePattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Structural facets a literal resolves to during detection.
/// Equality against the registry decides the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shape {
    pub(crate) order: DateOrder,
    pub(crate) short_year: bool,
    pub(crate) separator: Option<char>,
    pub(crate) clock: Clock,
    pub(crate) layout: Layout,
    pub(crate) zoned: bool,
}

/// A registered date grammar: an identifier plus the structural facets
/// that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    id: DatePattern,
    shape: Shape,
}

impl Pattern {
    /// Separated date without a clock.
    const fn date(id: DatePattern, order: DateOrder, separator: char) -> Self {
        Self {
            id,
            shape: Shape {
                order,
                short_year: false,
                separator: Some(separator),
                clock: Clock::None,
                layout: Layout::DateOnly,
                zoned: false,
            },
        }
    }

    /// Separated date with a two-digit year and no clock.
    const fn short(id: DatePattern, order: DateOrder, separator: char) -> Self {
        Self {
            id,
            shape: Shape {
                order,
                short_year: true,
                separator: Some(separator),
                clock: Clock::None,
                layout: Layout::DateOnly,
                zoned: false,
            },
        }
    }

    /// Full-year date with a whitespace-joined clock.
    const fn spaced(id: DatePattern, order: DateOrder, separator: char, clock: Clock) -> Self {
        Self {
            id,
            shape: Shape {
                order,
                short_year: false,
                separator: Some(separator),
                clock,
                layout: Layout::Spaced,
                zoned: false,
            },
        }
    }

    /// ISO 8601 `T` datetime, optionally carrying a UTC offset.
    const fn iso(id: DatePattern, clock: Clock, zoned: bool) -> Self {
        Self {
            id,
            shape: Shape {
                order: DateOrder::Ymd,
                short_year: false,
                separator: Some(HYPHEN_SEPARATOR),
                clock,
                layout: Layout::IsoT,
                zoned,
            },
        }
    }

    /// Undelimited digit run.
    const fn compact(id: DatePattern, clock: Clock) -> Self {
        Self {
            id,
            shape: Shape {
                order: DateOrder::Ymd,
                short_year: false,
                separator: None,
                clock,
                layout: Layout::Compact,
                zoned: false,
            },
        }
    }

    /// The pattern's identifier.
    #[inline]
    pub const fn id(&self) -> DatePattern {
        self.id
    }

    /// Reading order of the date fields.
    #[inline]
    pub const fn order(&self) -> DateOrder {
        self.shape.order
    }

    /// True when the year is written with two digits.
    #[inline]
    pub const fn short_year(&self) -> bool {
        self.shape.short_year
    }

    /// Date separator, `None` for undelimited digit runs.
    #[inline]
    pub const fn separator(&self) -> Option<char> {
        self.shape.separator
    }

    /// Clock precision.
    #[inline]
    pub const fn clock(&self) -> Clock {
        self.shape.clock
    }

    /// How the clock attaches to the date.
    #[inline]
    pub const fn layout(&self) -> Layout {
        self.shape.layout
    }

    /// True when the pattern carries an explicit UTC offset.
    #[inline]
    pub const fn zoned(&self) -> bool {
        self.shape.zoned
    }

    /// Ambiguity class of the pattern's surface shape.
    pub const fn ambiguity(&self) -> Ambiguity {
        match self.shape.order {
            DateOrder::Ymd => Ambiguity::Unambiguous,
            DateOrder::Dmy | DateOrder::Mdy => Ambiguity::DayMonthAmbiguous,
        }
    }

    /// Human-readable mask (`dd/mm/yyyy hh:mm:ss`).
    #[inline]
    pub const fn mask(&self) -> &'static str {
        self.id.mask()
    }

    /// A literal that detects as this pattern.
    #[inline]
    pub const fn example(&self) -> &'static str {
        self.id.example()
    }
}

/// The registry, in priority order: ISO zoned, ISO, year-first with a
/// clock, year-first date-only, compact digit runs, two-digit year-first,
/// then the day-first and month-first families.
static PATTERNS: [Pattern; 39] = [
    Pattern::iso(DatePattern::IsoZonedMicros, Clock::Micros, true),
    Pattern::iso(DatePattern::IsoZonedSeconds, Clock::Seconds, true),
    Pattern::iso(DatePattern::IsoMicros, Clock::Micros, false),
    Pattern::iso(DatePattern::IsoSeconds, Clock::Seconds, false),
    Pattern::spaced(
        DatePattern::YmdHyphenMicros,
        DateOrder::Ymd,
        HYPHEN_SEPARATOR,
        Clock::Micros,
    ),
    Pattern::spaced(
        DatePattern::YmdHyphenSeconds,
        DateOrder::Ymd,
        HYPHEN_SEPARATOR,
        Clock::Seconds,
    ),
    Pattern::spaced(
        DatePattern::YmdHyphenMinutes,
        DateOrder::Ymd,
        HYPHEN_SEPARATOR,
        Clock::Minutes,
    ),
    Pattern::spaced(
        DatePattern::YmdSlashMicros,
        DateOrder::Ymd,
        SLASH_SEPARATOR,
        Clock::Micros,
    ),
    Pattern::spaced(
        DatePattern::YmdSlashSeconds,
        DateOrder::Ymd,
        SLASH_SEPARATOR,
        Clock::Seconds,
    ),
    Pattern::spaced(
        DatePattern::YmdSlashMinutes,
        DateOrder::Ymd,
        SLASH_SEPARATOR,
        Clock::Minutes,
    ),
    Pattern::date(DatePattern::YmdHyphen, DateOrder::Ymd, HYPHEN_SEPARATOR),
    Pattern::date(DatePattern::YmdSlash, DateOrder::Ymd, SLASH_SEPARATOR),
    Pattern::date(DatePattern::YmdDot, DateOrder::Ymd, DOT_SEPARATOR),
    Pattern::compact(DatePattern::CompactDateTime, Clock::Seconds),
    Pattern::compact(DatePattern::CompactDate, Clock::None),
    Pattern::short(DatePattern::ShortYmdHyphen, DateOrder::Ymd, HYPHEN_SEPARATOR),
    Pattern::short(DatePattern::ShortYmdSlash, DateOrder::Ymd, SLASH_SEPARATOR),
    Pattern::spaced(
        DatePattern::DmySlashMicros,
        DateOrder::Dmy,
        SLASH_SEPARATOR,
        Clock::Micros,
    ),
    Pattern::spaced(
        DatePattern::DmySlashSeconds,
        DateOrder::Dmy,
        SLASH_SEPARATOR,
        Clock::Seconds,
    ),
    Pattern::spaced(
        DatePattern::DmySlashMinutes,
        DateOrder::Dmy,
        SLASH_SEPARATOR,
        Clock::Minutes,
    ),
    Pattern::spaced(
        DatePattern::DmyHyphenMicros,
        DateOrder::Dmy,
        HYPHEN_SEPARATOR,
        Clock::Micros,
    ),
    Pattern::spaced(
        DatePattern::DmyHyphenSeconds,
        DateOrder::Dmy,
        HYPHEN_SEPARATOR,
        Clock::Seconds,
    ),
    Pattern::spaced(
        DatePattern::DmyHyphenMinutes,
        DateOrder::Dmy,
        HYPHEN_SEPARATOR,
        Clock::Minutes,
    ),
    Pattern::date(DatePattern::DmySlash, DateOrder::Dmy, SLASH_SEPARATOR),
    Pattern::date(DatePattern::DmyHyphen, DateOrder::Dmy, HYPHEN_SEPARATOR),
    Pattern::date(DatePattern::DmyDot, DateOrder::Dmy, DOT_SEPARATOR),
    Pattern::short(DatePattern::ShortDmySlash, DateOrder::Dmy, SLASH_SEPARATOR),
    Pattern::short(DatePattern::ShortDmyHyphen, DateOrder::Dmy, HYPHEN_SEPARATOR),
    Pattern::spaced(
        DatePattern::MdySlashMicros,
        DateOrder::Mdy,
        SLASH_SEPARATOR,
        Clock::Micros,
    ),
    Pattern::spaced(
        DatePattern::MdySlashSeconds,
        DateOrder::Mdy,
        SLASH_SEPARATOR,
        Clock::Seconds,
    ),
    Pattern::spaced(
        DatePattern::MdySlashMinutes,
        DateOrder::Mdy,
        SLASH_SEPARATOR,
        Clock::Minutes,
    ),
    Pattern::spaced(
        DatePattern::MdyHyphenMicros,
        DateOrder::Mdy,
        HYPHEN_SEPARATOR,
        Clock::Micros,
    ),
    Pattern::spaced(
        DatePattern::MdyHyphenSeconds,
        DateOrder::Mdy,
        HYPHEN_SEPARATOR,
        Clock::Seconds,
    ),
    Pattern::spaced(
        DatePattern::MdyHyphenMinutes,
        DateOrder::Mdy,
        HYPHEN_SEPARATOR,
        Clock::Minutes,
    ),
    Pattern::date(DatePattern::MdySlash, DateOrder::Mdy, SLASH_SEPARATOR),
    Pattern::date(DatePattern::MdyHyphen, DateOrder::Mdy, HYPHEN_SEPARATOR),
    Pattern::date(DatePattern::MdyDot, DateOrder::Mdy, DOT_SEPARATOR),
    Pattern::short(DatePattern::ShortMdySlash, DateOrder::Mdy, SLASH_SEPARATOR),
    Pattern::short(DatePattern::ShortMdyHyphen, DateOrder::Mdy, HYPHEN_SEPARATOR),
];

/// All registered patterns in priority order.
pub fn patterns() -> &'static [Pattern] {
    &PATTERNS
}

/// Finds the registered pattern with exactly the given facets.
pub(crate) fn lookup(shape: Shape) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.shape == shape)
}
