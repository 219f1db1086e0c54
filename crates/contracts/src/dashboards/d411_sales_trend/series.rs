//! Alignment of the provider's parallel arrays into per-month records.

use super::dto::SalesTrendResponse;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One chart row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Normalized "YYYY-MM"
    pub month: String,
    pub total_revenue: f64,
    pub total_quantity: Option<f64>,
    pub sma_revenue: Option<f64>,
    pub ema_revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataShapeError {
    #[error("series `{series}` has {actual} values, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("unrecognized month label `{0}`")]
    InvalidMonth(String),
}

/// Zip the response arrays by index.
///
/// `months` and `total_revenue` must have the same length. Secondary series
/// may be empty (not requested) or must match as well.
pub fn align(raw: &SalesTrendResponse) -> Result<Vec<MonthRecord>, DataShapeError> {
    let expected = raw.months.len();
    check_len("total_revenue", &raw.total_revenue, expected)?;
    let quantity = optional_series("total_quantity", &raw.total_quantity, expected)?;
    let sma = optional_series("sma_revenue", &raw.sma_revenue, expected)?;
    let ema = optional_series("ema_revenue", &raw.ema_revenue, expected)?;

    raw.months
        .iter()
        .enumerate()
        .map(|(i, month)| {
            Ok(MonthRecord {
                month: normalize_month(month)?,
                total_revenue: raw.total_revenue[i],
                total_quantity: quantity.map(|s| s[i]),
                sma_revenue: sma.map(|s| s[i]),
                ema_revenue: ema.map(|s| s[i]),
            })
        })
        .collect()
}

fn check_len(series: &'static str, values: &[f64], expected: usize) -> Result<(), DataShapeError> {
    if values.len() != expected {
        return Err(DataShapeError::LengthMismatch {
            series,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn optional_series<'a>(
    series: &'static str,
    values: &'a [f64],
    expected: usize,
) -> Result<Option<&'a [f64]>, DataShapeError> {
    if values.is_empty() {
        return Ok(None);
    }
    check_len(series, values, expected)?;
    Ok(Some(values))
}

/// Normalize a provider month label to "YYYY-MM".
///
/// Accepts "2024-03", "2024-03-31" and ISO datetimes
/// ("2024-03-31T00:00:00", "2024-03-31T00:00:00Z").
pub fn normalize_month(label: &str) -> Result<String, DataShapeError> {
    let trimmed = label.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .map(|date| date.format("%Y-%m").to_string())
        .map_err(|_| DataShapeError::InvalidMonth(label.to_string()))
}
