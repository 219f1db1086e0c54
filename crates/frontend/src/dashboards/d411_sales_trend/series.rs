use crate::shared::charts::LineSeries;
use contracts::dashboards::d411_sales_trend::MonthRecord;
use contracts::enums::TrendType;

/// A line the trend chart can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSeries {
    TotalRevenue,
    Sma,
    Ema,
}

impl TrendSeries {
    pub fn key(&self) -> &'static str {
        match self {
            TrendSeries::TotalRevenue => "total_revenue",
            TrendSeries::Sma => "sma_revenue",
            TrendSeries::Ema => "ema_revenue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendSeries::TotalRevenue => "Total Revenue",
            TrendSeries::Sma => "SMA Revenue",
            TrendSeries::Ema => "EMA Revenue",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TrendSeries::TotalRevenue => "#8884d8",
            TrendSeries::Sma => "#82ca9d",
            TrendSeries::Ema => "#ffc658",
        }
    }

    pub fn value(&self, record: &MonthRecord) -> Option<f64> {
        match self {
            TrendSeries::TotalRevenue => Some(record.total_revenue),
            TrendSeries::Sma => record.sma_revenue,
            TrendSeries::Ema => record.ema_revenue,
        }
    }

    pub fn line(&self, records: &[MonthRecord]) -> LineSeries {
        LineSeries {
            key: self.key(),
            label: self.label(),
            color: self.color(),
            values: records.iter().map(|r| self.value(r)).collect(),
        }
    }
}

/// Actual revenue plus exactly one moving average
pub fn visible_series(trend_type: TrendType) -> [TrendSeries; 2] {
    match trend_type {
        TrendType::Sma => [TrendSeries::TotalRevenue, TrendSeries::Sma],
        TrendType::Ema => [TrendSeries::TotalRevenue, TrendSeries::Ema],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, total: f64, sma: Option<f64>, ema: Option<f64>) -> MonthRecord {
        MonthRecord {
            month: month.to_string(),
            total_revenue: total,
            total_quantity: None,
            sma_revenue: sma,
            ema_revenue: ema,
        }
    }

    #[test]
    fn test_sma_shows_total_and_sma_only() {
        let series = visible_series(TrendType::Sma);
        assert_eq!(series, [TrendSeries::TotalRevenue, TrendSeries::Sma]);
        assert!(!series.contains(&TrendSeries::Ema));
    }

    #[test]
    fn test_ema_shows_total_and_ema_only() {
        let series = visible_series(TrendType::Ema);
        assert_eq!(series, [TrendSeries::TotalRevenue, TrendSeries::Ema]);
        assert!(!series.contains(&TrendSeries::Sma));
    }

    #[test]
    fn test_line_values() {
        let records = vec![
            record("2024-01", 100.0, Some(90.0), None),
            record("2024-02", 200.0, None, None),
        ];
        let line = TrendSeries::Sma.line(&records);
        assert_eq!(line.values, vec![Some(90.0), None]);
        assert_eq!(line.color, "#82ca9d");

        let total = TrendSeries::TotalRevenue.line(&records);
        assert_eq!(total.values, vec![Some(100.0), Some(200.0)]);
    }
}
