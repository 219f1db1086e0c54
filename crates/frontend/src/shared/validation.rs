use crate::shared::date_utils::parse_input_date;
use chrono::NaiveDate;
use thiserror::Error;

/// Input problems caught before any request is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Carries the page-specific message
    #[error("{0}")]
    MissingDates(&'static str),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Both ends of a window must be filled in; no ordering is enforced.
pub fn require_date_range(
    start: &str,
    end: &str,
    missing_message: &'static str,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let (Some(start_parsed), Some(end_parsed)) = (parse_input_date(start), parse_input_date(end))
    else {
        return Err(ValidationError::MissingDates(missing_message));
    };
    let start_date = start_parsed.map_err(|_| ValidationError::InvalidDate(start.trim().to_string()))?;
    let end_date = end_parsed.map_err(|_| ValidationError::InvalidDate(end.trim().to_string()))?;
    Ok((start_date, end_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "Please select both dates.";

    #[test]
    fn test_missing_either_end() {
        assert_eq!(
            require_date_range("", "2024-01-31", MSG),
            Err(ValidationError::MissingDates(MSG))
        );
        assert_eq!(
            require_date_range("2024-01-01", " ", MSG),
            Err(ValidationError::MissingDates(MSG))
        );
        assert_eq!(ValidationError::MissingDates(MSG).to_string(), MSG);
    }

    #[test]
    fn test_reversed_range_is_accepted() {
        let (start, end) = require_date_range("2024-05-01", "2024-01-01", MSG).unwrap();
        assert!(start > end);
    }

    #[test]
    fn test_garbage_date() {
        assert_eq!(
            require_date_range("2024-13-01", "2024-01-01", MSG),
            Err(ValidationError::InvalidDate("2024-13-01".into()))
        );
    }
}
