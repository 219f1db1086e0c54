use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse preset window used by the overview page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeKeyword {
    #[default]
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "all")]
    AllTime,
}

impl RangeKeyword {
    /// Stable identifier used in the UI and logs
    pub fn id(&self) -> &'static str {
        match self {
            RangeKeyword::Today => "today",
            RangeKeyword::Last7Days => "last-7-days",
            RangeKeyword::AllTime => "all-time",
        }
    }

    /// Value of the `date_range` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            RangeKeyword::Today => "today",
            RangeKeyword::Last7Days => "7days",
            RangeKeyword::AllTime => "all",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RangeKeyword::Today => "Today",
            RangeKeyword::Last7Days => "Last 7 Days",
            RangeKeyword::AllTime => "All Time",
        }
    }

    pub fn all() -> Vec<RangeKeyword> {
        vec![
            RangeKeyword::Today,
            RangeKeyword::Last7Days,
            RangeKeyword::AllTime,
        ]
    }

    /// Accepts both the wire code and the UI id
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|k| k.code() == code || k.id() == code)
    }
}

impl fmt::Display for RangeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for keyword in RangeKeyword::all() {
            assert_eq!(RangeKeyword::from_code(keyword.code()), Some(keyword));
            assert_eq!(RangeKeyword::from_code(keyword.id()), Some(keyword));
        }
        assert_eq!(RangeKeyword::from_code("yesterday"), None);
    }

    #[test]
    fn test_serializes_as_query_value() {
        assert_eq!(
            serde_json::to_string(&RangeKeyword::Last7Days).unwrap(),
            "\"7days\""
        );
    }
}
