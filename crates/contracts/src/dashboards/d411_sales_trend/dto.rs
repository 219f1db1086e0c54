use crate::enums::TrendType;
use crate::shared::decimal::vec_f64_lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query of `GET sales/sales_trend_data/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrendQuery {
    /// Serialized as "YYYY-MM-DD"
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub metric: TrendType,
}

/// Monthly revenue series as returned by the provider.
///
/// Parallel arrays keyed by index. The provider only fills the moving
/// average that was requested; the other one comes back empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTrendResponse {
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "vec_f64_lenient")]
    pub total_revenue: Vec<f64>,
    #[serde(default, deserialize_with = "vec_f64_lenient")]
    pub total_quantity: Vec<f64>,
    #[serde(default, deserialize_with = "vec_f64_lenient")]
    pub sma_revenue: Vec<f64>,
    #[serde(default, deserialize_with = "vec_f64_lenient")]
    pub ema_revenue: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_provider_payload() {
        let json = r#"{
            "months": ["2024-01", "2024-02"],
            "total_revenue": ["100.00", 200],
            "total_quantity": [3, 4],
            "sma_revenue": [0, 150.5],
            "ema_revenue": []
        }"#;
        let resp: SalesTrendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.months.len(), 2);
        assert_eq!(resp.total_revenue, vec![100.0, 200.0]);
        assert_eq!(resp.sma_revenue, vec![0.0, 150.5]);
        assert!(resp.ema_revenue.is_empty());
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let resp: SalesTrendResponse = serde_json::from_str(r#"{"months": []}"#).unwrap();
        assert!(resp.months.is_empty());
        assert!(resp.total_quantity.is_empty());
    }

    #[test]
    fn test_query_uses_iso_dates() {
        let query = SalesTrendQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            metric: TrendType::Ema,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["start_date"], "2024-01-05");
        assert_eq!(value["metric"], "EMA");
    }
}
