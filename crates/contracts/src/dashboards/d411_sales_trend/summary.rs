use super::series::MonthRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a statistic cannot be derived
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "UP",
            TrendDirection::Down => "DOWN",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived statistics over the aligned series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub peak_month: Option<String>,
    pub trough_month: Option<String>,
    pub direction: Option<TrendDirection>,
}

impl TrendSummary {
    /// Peak and trough keep the earliest month on ties. Direction is `Up`
    /// only when the last month strictly exceeds the first.
    pub fn from_records(records: &[MonthRecord]) -> Self {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Self::default();
        };

        let peak = records.iter().fold(first, |best, r| {
            if r.total_revenue > best.total_revenue {
                r
            } else {
                best
            }
        });
        let trough = records.iter().fold(first, |best, r| {
            if r.total_revenue < best.total_revenue {
                r
            } else {
                best
            }
        });
        let direction = if last.total_revenue > first.total_revenue {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };

        Self {
            peak_month: Some(peak.month.clone()),
            trough_month: Some(trough.month.clone()),
            direction: Some(direction),
        }
    }

    pub fn peak_label(&self) -> &str {
        self.peak_month.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn trough_label(&self) -> &str {
        self.trough_month.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn direction_label(&self) -> &'static str {
        self.direction.map(|d| d.label()).unwrap_or(NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[f64]) -> Vec<MonthRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| MonthRecord {
                month: format!("2024-{:02}", i + 1),
                total_revenue: *v,
                total_quantity: None,
                sma_revenue: None,
                ema_revenue: None,
            })
            .collect()
    }

    #[test]
    fn test_peak_keeps_first_of_ties() {
        let summary = TrendSummary::from_records(&records(&[100.0, 200.0, 200.0]));
        assert_eq!(summary.peak_label(), "2024-02");
        assert_eq!(summary.trough_label(), "2024-01");
        assert_eq!(summary.direction, Some(TrendDirection::Up));
    }

    #[test]
    fn test_trough_keeps_first_of_ties() {
        let summary = TrendSummary::from_records(&records(&[300.0, 50.0, 80.0, 50.0]));
        assert_eq!(summary.trough_label(), "2024-02");
        assert_eq!(summary.peak_label(), "2024-01");
        assert_eq!(summary.direction_label(), "DOWN");
    }

    #[test]
    fn test_flat_series_is_down() {
        let summary = TrendSummary::from_records(&records(&[100.0, 100.0]));
        assert_eq!(summary.direction, Some(TrendDirection::Down));
    }

    #[test]
    fn test_single_month() {
        let summary = TrendSummary::from_records(&records(&[42.0]));
        assert_eq!(summary.peak_label(), "2024-01");
        assert_eq!(summary.trough_label(), "2024-01");
        assert_eq!(summary.direction_label(), "DOWN");
    }

    #[test]
    fn test_empty_input_is_not_available() {
        let summary = TrendSummary::from_records(&[]);
        assert_eq!(summary, TrendSummary::default());
        assert_eq!(summary.peak_label(), NOT_AVAILABLE);
        assert_eq!(summary.trough_label(), NOT_AVAILABLE);
        assert_eq!(summary.direction_label(), NOT_AVAILABLE);
    }
}
