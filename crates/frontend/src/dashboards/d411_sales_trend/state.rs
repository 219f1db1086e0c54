use super::series::visible_series;
use crate::shared::charts::LineChartModel;
use crate::shared::date_utils::format_period;
use crate::shared::http::ApiError;
use crate::shared::request_sequencer::{RequestSequencer, RequestToken};
use crate::shared::validation::{require_date_range, ValidationError};
use contracts::dashboards::d411_sales_trend::{
    align, MonthRecord, SalesTrendQuery, SalesTrendResponse, TrendSummary,
};
use contracts::enums::TrendType;

pub const MISSING_DATES: &str = "Please select both start and end dates.";
pub const FETCH_FAILED: &str = "Failed to load trend data.";

/// Page state of the sales analysis dashboard
#[derive(Clone, Debug, Default)]
pub struct SalesTrendState {
    /// Raw `<input type="date">` values, "" when empty
    pub start_date: String,
    pub end_date: String,
    pub trend_type: TrendType,
    pub records: Vec<MonthRecord>,
    pub summary: TrendSummary,
    pub error: Option<String>,
    pub loading: bool,
    sequencer: RequestSequencer,
}

impl SalesTrendState {
    pub fn validate(&self) -> Result<SalesTrendQuery, ValidationError> {
        let (start_date, end_date) =
            require_date_range(&self.start_date, &self.end_date, MISSING_DATES)?;
        Ok(SalesTrendQuery {
            start_date,
            end_date,
            metric: self.trend_type,
        })
    }

    /// Both dates are filled in
    pub fn is_ready(&self) -> bool {
        !self.start_date.trim().is_empty() && !self.end_date.trim().is_empty()
    }

    pub fn set_range(&mut self, start: String, end: String) {
        self.start_date = start;
        self.end_date = end;
    }

    /// Issue a request token for the current inputs. On a validation
    /// failure the message is shown and nothing should be sent.
    pub fn begin_fetch(&mut self) -> Result<(RequestToken, SalesTrendQuery), ValidationError> {
        let query = match self.validate() {
            Ok(query) => query,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        self.error = None;
        self.loading = true;
        Ok((self.sequencer.issue(), query))
    }

    /// Apply a finished request. Returns false when the response is stale.
    pub fn apply_response(
        &mut self,
        token: RequestToken,
        result: Result<SalesTrendResponse, ApiError>,
    ) -> bool {
        if !self.sequencer.is_current(token) {
            log::debug!("Dropping stale sales trend response");
            return false;
        }
        self.loading = false;

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Error loading trend data: {}", e);
                self.error = Some(FETCH_FAILED.to_string());
                return true;
            }
        };

        match align(&raw) {
            Ok(records) => {
                log::debug!("Loaded {} months of trend data", records.len());
                self.summary = TrendSummary::from_records(&records);
                self.records = records;
                self.error = None;
            }
            Err(e) => {
                log::error!("Malformed trend data: {}", e);
                self.error = Some(format!("Trend data is malformed: {}", e));
            }
        }
        true
    }

    /// Reset inputs and results; requests still in flight are ignored
    pub fn clear(&mut self) {
        let mut sequencer = std::mem::take(&mut self.sequencer);
        sequencer.invalidate();
        *self = Self {
            sequencer,
            ..Self::default()
        };
    }

    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }

    /// `None` shows the placeholder instead of a plot
    pub fn chart_model(&self) -> Option<LineChartModel> {
        if !self.has_data() {
            return None;
        }
        let months: Vec<String> = self.records.iter().map(|r| r.month.clone()).collect();
        let lines = visible_series(self.trend_type)
            .iter()
            .map(|s| s.line(&self.records))
            .collect();
        LineChartModel::build(&months, lines)
    }

    pub fn time_period_label(&self) -> String {
        format_period(&self.start_date, &self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_months() -> SalesTrendResponse {
        SalesTrendResponse {
            months: vec!["2024-01-01".into(), "2024-02-01".into()],
            total_revenue: vec![100.0, 200.0],
            total_quantity: vec![],
            sma_revenue: vec![100.0, 150.0],
            ema_revenue: vec![],
        }
    }

    fn ready_state() -> SalesTrendState {
        let mut state = SalesTrendState::default();
        state.set_range("2024-01-01".into(), "2024-02-29".into());
        state
    }

    #[test]
    fn test_not_ready_without_both_dates() {
        let mut state = SalesTrendState::default();
        assert!(!state.is_ready());

        state.set_range("2024-01-01".into(), "".into());
        assert!(!state.is_ready());
        assert_eq!(
            state.begin_fetch(),
            Err(ValidationError::MissingDates(MISSING_DATES))
        );
        assert_eq!(state.error.as_deref(), Some(MISSING_DATES));
        assert!(!state.loading);

        state.set_range("".into(), "2024-02-01".into());
        assert!(!state.is_ready());

        state.set_range("2024-01-01".into(), "2024-02-01".into());
        assert!(state.is_ready());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_begin_fetch_builds_query() {
        let mut state = ready_state();
        state.trend_type = TrendType::Ema;
        let (_, query) = state.begin_fetch().unwrap();
        assert_eq!(query.metric, TrendType::Ema);
        assert_eq!(query.start_date.to_string(), "2024-01-01");
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_successful_response() {
        let mut state = ready_state();
        let (token, _) = state.begin_fetch().unwrap();
        assert!(state.apply_response(token, Ok(two_months())));

        assert!(!state.loading);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records[0].month, "2024-01");
        assert_eq!(state.records[1].sma_revenue, Some(150.0));
        assert_eq!(state.records[1].ema_revenue, None);
        assert_eq!(state.summary.peak_label(), "2024-02");
        assert_eq!(state.summary.trough_label(), "2024-01");
        assert_eq!(state.summary.direction_label(), "UP");
    }

    #[test]
    fn test_failure_keeps_previous_series() {
        let mut state = ready_state();
        let (token, _) = state.begin_fetch().unwrap();
        state.apply_response(token, Ok(two_months()));

        let (token, _) = state.begin_fetch().unwrap();
        state.apply_response(token, Err(ApiError::Status(500)));

        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));
        assert_eq!(state.records.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_malformed_payload_is_reported() {
        let mut state = ready_state();
        let (token, _) = state.begin_fetch().unwrap();
        let mut raw = two_months();
        raw.total_revenue.pop();
        state.apply_response(token, Ok(raw));

        let error = state.error.clone().unwrap();
        assert!(error.starts_with("Trend data is malformed: "));
        assert!(error.contains("total_revenue"));
        assert!(state.records.is_empty());
        assert!(state.chart_model().is_none());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ready_state();
        let (token_a, _) = state.begin_fetch().unwrap();
        let (token_b, _) = state.begin_fetch().unwrap();

        let mut response_b = two_months();
        response_b.total_revenue = vec![300.0, 100.0];
        assert!(state.apply_response(token_b, Ok(response_b)));
        assert!(!state.apply_response(token_a, Ok(two_months())));

        assert_eq!(state.records[0].total_revenue, 300.0);
        assert_eq!(state.summary.direction_label(), "DOWN");
        assert!(!state.loading);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = ready_state();
        state.trend_type = TrendType::Ema;
        let (token, _) = state.begin_fetch().unwrap();
        state.apply_response(token, Ok(two_months()));
        state.error = Some("x".into());

        let (in_flight, _) = state.begin_fetch().unwrap();
        state.clear();

        assert_eq!(state.start_date, "");
        assert_eq!(state.end_date, "");
        assert_eq!(state.trend_type, TrendType::Sma);
        assert!(state.records.is_empty());
        assert_eq!(state.summary, TrendSummary::default());
        assert!(state.error.is_none());
        assert!(!state.loading);

        assert!(!state.apply_response(in_flight, Ok(two_months())));
        assert!(state.records.is_empty());
    }

    #[test]
    fn test_empty_records_give_na_and_placeholder() {
        let state = SalesTrendState::default();
        assert_eq!(state.summary.peak_label(), "N/A");
        assert_eq!(state.summary.trough_label(), "N/A");
        assert_eq!(state.summary.direction_label(), "N/A");
        assert!(state.chart_model().is_none());
    }

    #[test]
    fn test_chart_follows_trend_type() {
        let mut state = ready_state();
        let (token, _) = state.begin_fetch().unwrap();
        state.apply_response(token, Ok(two_months()));

        let keys: Vec<_> = state.chart_model().unwrap().lines.iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["total_revenue", "sma_revenue"]);

        state.trend_type = TrendType::Ema;
        let keys: Vec<_> = state.chart_model().unwrap().lines.iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["total_revenue", "ema_revenue"]);
    }

    #[test]
    fn test_provider_payload_with_text_decimals() {
        let raw: SalesTrendResponse = serde_json::from_str(
            r#"{
                "months": ["2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z", "2024-03-01T00:00:00Z"],
                "total_revenue": ["100.00", "250.50", "180.25"],
                "sma_revenue": [],
                "ema_revenue": ["100.00", "175.25", "177.75"]
            }"#,
        )
        .unwrap();

        let mut state = ready_state();
        state.trend_type = TrendType::Ema;
        let (token, _) = state.begin_fetch().unwrap();
        state.apply_response(token, Ok(raw));

        assert!(state.error.is_none());
        assert_eq!(state.records[1].month, "2024-02");
        assert_eq!(state.records[1].total_revenue, 250.5);
        assert_eq!(state.records[2].ema_revenue, Some(177.75));
        assert_eq!(state.records[2].sma_revenue, None);
        assert_eq!(state.summary.peak_label(), "2024-02");
        assert_eq!(state.summary.direction_label(), "UP");
    }

    #[test]
    fn test_time_period_label() {
        assert_eq!(ready_state().time_period_label(), "2024-01-01 to 2024-02-29");
    }
}
