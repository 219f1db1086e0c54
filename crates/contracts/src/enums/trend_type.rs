use serde::{Deserialize, Serialize};
use std::fmt;

/// Moving-average overlay drawn next to actual revenue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendType {
    #[default]
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "EMA")]
    Ema,
}

impl TrendType {
    /// Wire value of the `metric` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            TrendType::Sma => "SMA",
            TrendType::Ema => "EMA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrendType::Sma => "Simple Moving Average",
            TrendType::Ema => "Exponential Moving Average",
        }
    }

    pub fn all() -> Vec<TrendType> {
        vec![TrendType::Sma, TrendType::Ema]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SMA" => Some(TrendType::Sma),
            "EMA" => Some(TrendType::Ema),
            _ => None,
        }
    }
}

impl fmt::Display for TrendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
