mod consts;
mod detect;
mod locale;
mod parse;
mod pattern;
mod prelude;
mod render;
#[cfg(test)]
mod test_utils;
mod types;
mod value;

pub use consts::*;
pub use locale::{Locale, LocaleProfile};
pub use pattern::{Ambiguity, Clock, DateOrder, DatePattern, Layout, Pattern, patterns};
pub use types::{Day, Month, UtcOffset, Year};
pub use value::{BabelDate, ValueError};

use thiserror::Error;

/// Any failure the crate can report: a literal whose structure matches
/// no supported grammar, a recognized literal with an out-of-range
/// field, or a locale code the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The literal matches none of the supported grammars. Carries the
    /// offending literal.
    #[error("Unrecognized date format: {0}")]
    UnrecognizedFormat(String),
    /// The literal's structure was recognized but a field is not a real
    /// calendar or clock value.
    #[error(transparent)]
    InvalidCalendarValue(#[from] ValueError),
    /// The target locale code names no supported locale.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Identifies which grammar a literal is written in, without validating
/// field ranges.
///
/// `2025-13-45` detects fine; it only fails later, at [`parse`] time.
///
/// # Errors
/// [`ConvertError::UnrecognizedFormat`] when the literal matches no
/// supported grammar.
pub fn detect_format(input: &str) -> Result<DatePattern, ConvertError> {
    Ok(detect::detect(input)?.pattern.id())
}

/// Parses a literal of any supported grammar into a validated value.
///
/// # Errors
/// [`ConvertError::UnrecognizedFormat`] when the literal matches no
/// supported grammar, [`ConvertError::InvalidCalendarValue`] when a
/// recognized literal carries an impossible field.
pub fn parse(input: &str) -> Result<BabelDate, ConvertError> {
    parse::parse(input)
}

/// Parses a literal and rewrites it in the target locale's convention.
///
/// The locale code is matched case-insensitively (`USA` aliases `EUA`).
/// With `include_time` the output carries an `hh:mm:ss` clock; without
/// it only the date. Literals with an explicit UTC offset are converted
/// to the locale's civil timezone first; naive literals never shift.
///
/// # Errors
/// Parse failures are reported before an unknown locale code.
pub fn convert(input: &str, locale: &str, include_time: bool) -> Result<String, ConvertError> {
    let value = parse(input)?;
    let target: Locale = locale.parse()?;
    Ok(convert_to(&value, target, include_time))
}

/// Rewrites an already parsed value in the target locale's convention.
pub fn convert_to(value: &BabelDate, locale: Locale, include_time: bool) -> String {
    locale.format(value, include_time)
}
