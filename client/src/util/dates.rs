//! Human-readable dates for the registration tables.
//!
//! Backend dates arrive either as form-entered `YYYY-MM-DD` strings or as
//! RFC 3339 timestamps. Both render as `M/D/YYYY` using the calendar date as
//! written; no timezone conversion is applied, so SSR and the browser agree.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LOCAL_DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
const DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

fn parse_calendar_date(raw: &str) -> Option<Date> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, LOCAL_DATE_TIME) {
        return Some(dt.date());
    }
    Date::parse(raw, DATE_ONLY).ok()
}

/// Format a backend date string for display.
///
/// Empty input stays empty; input that is not a recognizable date is
/// returned unchanged rather than hidden.
pub fn format_display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    parse_calendar_date(trimmed)
        .and_then(|date| date.format(DISPLAY).ok())
        .unwrap_or_else(|| trimmed.to_owned())
}
