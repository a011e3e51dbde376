use crate::consts::{DOT_SEPARATOR, HYPHEN_SEPARATOR, ISO_DATETIME_SEPARATOR, SLASH_SEPARATOR};
use crate::pattern::DateOrder;
use crate::value::BabelDate;
use crate::ConvertError;
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// An output convention: how the date groups are ordered and joined,
/// and which civil timezone offset-carrying values are normalized into
/// before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Brazil, `dd/mm/yyyy`, America/Sao_Paulo
    Br,
    /// United States, `mm/dd/yyyy`, America/New_York
    Eua,
    /// United Kingdom, `dd/mm/yyyy`, Europe/London
    Uk,
    /// Germany, `dd.mm.yyyy`, Europe/Berlin
    De,
    /// France, `dd/mm/yyyy`, Europe/Paris
    Fr,
    /// ISO 8601, `yyyy-mm-dd`, UTC
    Iso,
}

/// How a locale writes a datetime: group order, date separator, and the
/// joiner placed before the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    pub order: DateOrder,
    pub separator: char,
    pub joiner: char,
}

impl Locale {
    /// Every supported locale, in registration order.
    pub const ALL: [Self; 6] = [Self::Br, Self::Eua, Self::Uk, Self::De, Self::Fr, Self::Iso];

    /// The locale's registry code, as accepted by [`FromStr`].
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Br => "BR",
            Self::Eua => "EUA",
            Self::Uk => "UK",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::Iso => "ISO",
        }
    }

    /// The civil timezone that offset-carrying values are converted
    /// into before rendering.
    pub const fn timezone(&self) -> Tz {
        match self {
            Self::Br => chrono_tz::America::Sao_Paulo,
            Self::Eua => chrono_tz::America::New_York,
            Self::Uk => chrono_tz::Europe::London,
            Self::De => chrono_tz::Europe::Berlin,
            Self::Fr => chrono_tz::Europe::Paris,
            Self::Iso => chrono_tz::UTC,
        }
    }

    /// The locale's rendering convention.
    pub const fn profile(&self) -> LocaleProfile {
        match self {
            Self::Br | Self::Uk | Self::Fr => LocaleProfile {
                order: DateOrder::Dmy,
                separator: SLASH_SEPARATOR,
                joiner: ' ',
            },
            Self::Eua => LocaleProfile {
                order: DateOrder::Mdy,
                separator: SLASH_SEPARATOR,
                joiner: ' ',
            },
            Self::De => LocaleProfile {
                order: DateOrder::Dmy,
                separator: DOT_SEPARATOR,
                joiner: ' ',
            },
            Self::Iso => LocaleProfile {
                order: DateOrder::Ymd,
                separator: HYPHEN_SEPARATOR,
                joiner: ISO_DATETIME_SEPARATOR,
            },
        }
    }

    /// Renders a value in this locale's convention.
    ///
    /// With `include_time` the clock is appended as `hh:mm:ss`
    /// regardless of the value's own precision; without it only the
    /// date is written. Values carrying an offset are first converted
    /// to this locale's civil timezone; naive values render verbatim.
    pub fn format(&self, value: &BabelDate, include_time: bool) -> String {
        crate::render::render(value, *self, include_time)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConvertError;

    /// Codes are matched case-insensitively; `USA` is accepted as an
    /// alias for `EUA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BR" => Ok(Self::Br),
            "EUA" | "USA" => Ok(Self::Eua),
            "UK" => Ok(Self::Uk),
            "DE" => Ok(Self::De),
            "FR" => Ok(Self::Fr),
            "ISO" => Ok(Self::Iso),
            _ => Err(ConvertError::UnknownLocale(s.to_owned())),
        }
    }
}

impl serde::Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            let parsed: Locale = locale.code().parse().unwrap();
            assert_eq!(parsed, locale);
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("br".parse::<Locale>().unwrap(), Locale::Br);
        assert_eq!("Br".parse::<Locale>().unwrap(), Locale::Br);
        assert_eq!("iso".parse::<Locale>().unwrap(), Locale::Iso);
        assert_eq!("eUa".parse::<Locale>().unwrap(), Locale::Eua);
    }

    #[test]
    fn test_usa_alias() {
        assert_eq!("USA".parse::<Locale>().unwrap(), Locale::Eua);
        assert_eq!("usa".parse::<Locale>().unwrap(), Locale::Eua);
    }

    #[test]
    fn test_unknown_locale() {
        assert_eq!(
            "XX".parse::<Locale>(),
            Err(ConvertError::UnknownLocale("XX".to_owned()))
        );
        // The error carries the code as given, not uppercased
        assert_eq!(
            "jp".parse::<Locale>(),
            Err(ConvertError::UnknownLocale("jp".to_owned()))
        );
    }

    #[test]
    fn test_timezones() {
        assert_eq!(Locale::Br.timezone(), chrono_tz::America::Sao_Paulo);
        assert_eq!(Locale::Eua.timezone(), chrono_tz::America::New_York);
        assert_eq!(Locale::Uk.timezone(), chrono_tz::Europe::London);
        assert_eq!(Locale::De.timezone(), chrono_tz::Europe::Berlin);
        assert_eq!(Locale::Fr.timezone(), chrono_tz::Europe::Paris);
        assert_eq!(Locale::Iso.timezone(), chrono_tz::UTC);
        assert_eq!(Locale::Br.timezone().name(), "America/Sao_Paulo");
    }

    #[test]
    fn test_profiles() {
        let br = Locale::Br.profile();
        assert_eq!(br.order, DateOrder::Dmy);
        assert_eq!(br.separator, '/');
        assert_eq!(br.joiner, ' ');

        let eua = Locale::Eua.profile();
        assert_eq!(eua.order, DateOrder::Mdy);
        assert_eq!(eua.separator, '/');

        let de = Locale::De.profile();
        assert_eq!(de.order, DateOrder::Dmy);
        assert_eq!(de.separator, '.');

        let iso = Locale::Iso.profile();
        assert_eq!(iso.order, DateOrder::Ymd);
        assert_eq!(iso.separator, '-');
        assert_eq!(iso.joiner, 'T');

        assert_eq!(Locale::Uk.profile(), Locale::Fr.profile());
    }

    #[test]
    fn test_all_is_exhaustive_and_distinct() {
        let codes: std::collections::HashSet<&str> =
            Locale::ALL.iter().map(Locale::code).collect();
        assert_eq!(codes.len(), Locale::ALL.len());
    }

    #[test]
    fn test_serde_round_trip() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.code()));
            let back: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(back, locale);
        }
    }

    #[test]
    fn test_serde_rejects_unknown() {
        let result: Result<Locale, _> = serde_json::from_str(r#""XX""#);
        assert!(result.is_err());
    }
}
