//! Display Formatting
//!
//! Italian-locale date formatting and HTML text escaping shared by every
//! renderer.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown for missing values
pub const MISSING: &str = "-";

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse the date/datetime shapes the backend emits.
///
/// Offsets are kept as written rather than converted.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format a date as `dd/mm/yyyy`.
///
/// Missing or empty input yields `-`; unparseable input is returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => MISSING.to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Format a timestamp as `dd/mm/yyyy, HH:MM`
pub fn format_date_time(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => MISSING.to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y, %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Spinner shown while an element waits for its content
pub fn loading_markup() -> &'static str {
    r#"<div class="text-center"><div class="loading"></div> Caricamento...</div>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("   ")), "-");
    }

    #[test]
    fn test_format_date_iso_date() {
        assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
        assert_eq!(format_date(Some("2023-12-31")), "31/12/2023");
    }

    #[test]
    fn test_format_date_from_datetime() {
        assert_eq!(format_date(Some("2024-03-05T18:45:00")), "05/03/2024");
        assert_eq!(format_date(Some("2024-03-05T18:45:00.123456")), "05/03/2024");
        assert_eq!(format_date(Some("2024-03-05T23:10:00+01:00")), "05/03/2024");
    }

    #[test]
    fn test_format_date_unparseable_passthrough() {
        assert_eq!(format_date(Some("domani")), "domani");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(None), "-");
        assert_eq!(format_date_time(Some("2024-03-05T14:30:00")), "05/03/2024, 14:30");
        assert_eq!(format_date_time(Some("2024-03-05 09:05")), "05/03/2024, 09:05");
        assert_eq!(format_date_time(Some("2024-03-05")), "05/03/2024, 00:00");
    }

    #[test]
    fn test_escape_html() {
        assert!(matches!(escape_html("Rossi Mario"), Cow::Borrowed(_)));
        assert_eq!(
            escape_html(r#"<b>"O'Brien" & co</b>"#),
            "&lt;b&gt;&quot;O&#39;Brien&quot; &amp; co&lt;/b&gt;"
        );
    }
}
