use super::model::ReportError;
use crate::shared::http::ApiError;
use crate::shared::validation::{require_date_range, ValidationError};
use chrono::NaiveDate;
use contracts::domain::a025_sales_report::{GenerateReportQuery, NewSalesReport, SalesReport};
use contracts::enums::ReportTemplate;

pub const MISSING_DATES: &str = "Please select both From and To dates.";
pub const GENERATE_FAILED: &str = "Failed to generate report.";
pub const FETCH_REPORTS_FAILED: &str = "Failed to fetch reports data";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user data";
pub const DELETE_FAILED: &str = "Failed to delete report.";

#[derive(Clone, Debug, Default)]
pub struct ReportGeneratorState {
    pub template: ReportTemplate,
    /// Raw date input values, "" when empty
    pub from_date: String,
    pub to_date: String,
    pub reports: Vec<SalesReport>,
    pub username: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl ReportGeneratorState {
    pub fn set_range(&mut self, from: String, to: String) {
        self.from_date = from;
        self.to_date = to;
    }

    pub fn validate(&self) -> Result<GenerateReportQuery, ValidationError> {
        let (from_date, to_date) = require_date_range(&self.from_date, &self.to_date, MISSING_DATES)?;
        Ok(GenerateReportQuery {
            from_date,
            to_date,
            report_type: self.template,
        })
    }

    /// Start a generation. A validation failure is shown and nothing is sent.
    pub fn begin_generate(&mut self) -> Result<GenerateReportQuery, ValidationError> {
        match self.validate() {
            Ok(query) => {
                self.error = None;
                self.loading = true;
                Ok(query)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Registry record for the report being generated
    pub fn new_report(&self, today: NaiveDate) -> NewSalesReport {
        NewSalesReport::for_template(self.template, today, self.username.as_deref())
    }

    pub fn finish_generate(&mut self, result: Result<SalesReport, ReportError>) {
        self.loading = false;
        match result {
            Ok(report) => {
                log::info!("Report {} generated", report.report_id);
                self.reports.push(report);
            }
            Err(e) => {
                log::error!("Error generating report: {}", e);
                self.error = Some(GENERATE_FAILED.to_string());
            }
        }
    }

    pub fn apply_reports(&mut self, result: Result<Vec<SalesReport>, ApiError>) {
        match result {
            Ok(reports) => self.reports = reports,
            Err(e) => {
                log::error!("Error fetching reports data: {}", e);
                self.error = Some(FETCH_REPORTS_FAILED.to_string());
            }
        }
    }

    pub fn apply_username(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(username) => self.username = Some(username),
            Err(e) => {
                log::error!("Error fetching user data: {}", e);
                self.error = Some(FETCH_USER_FAILED.to_string());
            }
        }
    }

    pub fn remove_report(&mut self, report_id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.reports.retain(|r| r.report_id != report_id),
            Err(e) => {
                log::error!("Error deleting report {}: {}", report_id, e);
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Reset the form; the report list and user stay
    pub fn clear(&mut self) {
        self.template = ReportTemplate::default();
        self.from_date.clear();
        self.to_date.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64) -> SalesReport {
        SalesReport {
            report_id: id,
            report_name: "Sales Summary".into(),
            description: "Description".into(),
            created_date: "2024-05-01".into(),
            created_by: "alice".into(),
        }
    }

    fn filled() -> ReportGeneratorState {
        let mut state = ReportGeneratorState::default();
        state.set_range("2024-01-01".into(), "2024-03-31".into());
        state
    }

    #[test]
    fn test_generate_requires_both_dates() {
        let mut state = ReportGeneratorState::default();
        state.set_range("2024-01-01".into(), "".into());
        assert!(state.begin_generate().is_err());
        assert_eq!(state.error.as_deref(), Some(MISSING_DATES));
        assert!(!state.loading);
    }

    #[test]
    fn test_begin_generate_builds_query() {
        let mut state = filled();
        state.template = ReportTemplate::SalesSummary;
        let query = state.begin_generate().unwrap();
        assert_eq!(query.report_type, ReportTemplate::SalesSummary);
        assert_eq!(query.to_date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert!(state.loading);
    }

    #[test]
    fn test_new_report_uses_username() {
        let mut state = filled();
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(state.new_report(today).created_by, "Unknown");

        state.apply_username(Ok("alice".into()));
        let new = state.new_report(today);
        assert_eq!(new.created_by, "alice");
        assert_eq!(new.report_name, "Product Analysis");
        assert_eq!(new.created_date, "2024-05-01");
    }

    #[test]
    fn test_finish_generate_appends_server_record() {
        let mut state = filled();
        state.begin_generate().unwrap();
        state.finish_generate(Ok(report(42)));
        assert!(!state.loading);
        assert_eq!(state.reports.len(), 1);
        assert_eq!(state.reports[0].report_id, 42);
    }

    #[test]
    fn test_finish_generate_failure() {
        let mut state = filled();
        state.begin_generate().unwrap();
        state.finish_generate(Err(ReportError::Api(ApiError::Status(500))));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(GENERATE_FAILED));

        state.begin_generate().unwrap();
        state.finish_generate(Err(ReportError::Download("blocked".into())));
        assert!(!state.loading);
        assert!(state.reports.is_empty());
    }

    #[test]
    fn test_load_failures() {
        let mut state = ReportGeneratorState::default();
        state.apply_reports(Err(ApiError::Network("offline".into())));
        assert_eq!(state.error.as_deref(), Some(FETCH_REPORTS_FAILED));

        state.apply_username(Err(ApiError::Status(404)));
        assert_eq!(state.error.as_deref(), Some(FETCH_USER_FAILED));
        assert!(state.username.is_none());
    }

    #[test]
    fn test_remove_report() {
        let mut state = ReportGeneratorState::default();
        state.apply_reports(Ok(vec![report(1), report(2)]));

        state.remove_report(1, Err(ApiError::Status(500)));
        assert_eq!(state.reports.len(), 2);
        assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));

        state.remove_report(1, Ok(()));
        assert_eq!(state.reports.len(), 1);
        assert_eq!(state.reports[0].report_id, 2);
    }

    #[test]
    fn test_clear_resets_form_only() {
        let mut state = filled();
        state.template = ReportTemplate::SalesSummary;
        state.error = Some("x".into());
        state.apply_reports(Ok(vec![report(7)]));
        state.clear();

        assert_eq!(state.template, ReportTemplate::ProductAnalysis);
        assert_eq!(state.from_date, "");
        assert_eq!(state.to_date, "");
        assert!(state.error.is_none());
        assert_eq!(state.reports.len(), 1);
    }
}
