/// Utilities for the date inputs of the dashboard pages
///
/// `<input type="date">` always yields "yyyy-mm-dd" (or "" when cleared).
use chrono::{Local, NaiveDate};

pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the value of a date input. Whitespace-only counts as empty.
pub fn parse_input_date(value: &str) -> Option<Result<NaiveDate, chrono::ParseError>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT))
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "2024-01-01 to 2024-03-31"; missing ends stay blank
pub fn format_period(start: &str, end: &str) -> String {
    format!("{} to {}", start.trim(), end.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-15").map(|r| r.ok()),
            Some(NaiveDate::from_ymd_opt(2024, 3, 15))
        );
        assert!(parse_input_date("").is_none());
        assert!(parse_input_date("   ").is_none());
        assert!(matches!(parse_input_date("15.03.2024"), Some(Err(_))));
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2024-01-01", "2024-03-31"), "2024-01-01 to 2024-03-31");
        assert_eq!(format_period("", ""), " to ");
    }
}
