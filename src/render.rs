use crate::locale::{Locale, LocaleProfile};
use crate::pattern::DateOrder;
use crate::value::BabelDate;
use chrono::{Datelike, Timelike};

/// Calendar fields ready for formatting, after any timezone
/// conversion. Wider than the value's own fields because they come
/// back from chrono once a conversion has run.
struct CivilFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

/// Renders a value in a locale's convention.
///
/// Offset-carrying values name an instant, so their fields are read in
/// the locale's civil timezone. Naive values name no instant and render
/// exactly as parsed, whatever the locale's timezone.
pub(crate) fn render(value: &BabelDate, locale: Locale, include_time: bool) -> String {
    let profile = locale.profile();
    let fields = civil_fields(value, locale);
    let date = render_date(&fields, profile);
    if include_time {
        format!(
            "{date}{}{:02}:{:02}:{:02}",
            profile.joiner, fields.hour, fields.minute, fields.second
        )
    } else {
        date
    }
}

fn civil_fields(value: &BabelDate, locale: Locale) -> CivilFields {
    // to_fixed is Some exactly when the value carries an offset
    match value.to_fixed() {
        Some(instant) => {
            let local = instant.with_timezone(&locale.timezone());
            CivilFields {
                year: local.year(),
                month: local.month(),
                day: local.day(),
                hour: local.hour(),
                minute: local.minute(),
                second: local.second(),
            }
        }
        None => CivilFields {
            year: i32::from(value.year()),
            month: u32::from(value.month()),
            day: u32::from(value.day()),
            hour: u32::from(value.hour()),
            minute: u32::from(value.minute()),
            second: u32::from(value.second()),
        },
    }
}

fn render_date(fields: &CivilFields, profile: LocaleProfile) -> String {
    let sep = profile.separator;
    match profile.order {
        DateOrder::Ymd => format!(
            "{:04}{sep}{:02}{sep}{:02}",
            fields.year, fields.month, fields.day
        ),
        DateOrder::Dmy => format!(
            "{:02}{sep}{:02}{sep}{:04}",
            fields.day, fields.month, fields.year
        ),
        DateOrder::Mdy => format!(
            "{:02}{sep}{:02}{sep}{:04}",
            fields.month, fields.day, fields.year
        ),
    }
}
