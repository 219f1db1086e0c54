use super::model::{self, ReportError};
use super::state::ReportGeneratorState;
use crate::shared::date_utils::today;
use crate::shared::export::download_csv;
use crate::system::session::{api as session_api, storage};
use contracts::domain::a025_sales_report::{GenerateReportQuery, NewSalesReport, SalesReport};
use contracts::enums::ReportTemplate;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the report generation page
#[derive(Clone, Copy)]
pub struct ReportGeneratorViewModel {
    pub state: RwSignal<ReportGeneratorState>,
}

impl ReportGeneratorViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ReportGeneratorState::default()),
        }
    }

    /// Load the report list and the current user name
    pub fn load_command(&self) {
        let state = self.state;
        spawn_local(async move {
            let result = model::list_reports().await;
            state.update(|s| s.apply_reports(result));
        });

        let Some(email) = storage::get_email() else {
            log::warn!("No e-mail in local storage, reports will be created by Unknown");
            return;
        };
        spawn_local(async move {
            let result = session_api::fetch_username(&email).await;
            state.update(|s| s.apply_username(result));
        });
    }

    pub fn set_template(&self, code: &str) {
        match ReportTemplate::from_code(code) {
            Some(template) => self.state.update(|s| s.template = template),
            None => log::warn!("Unknown report template: {}", code),
        }
    }

    pub fn set_range(&self, from: String, to: String) {
        self.state.update(|s| s.set_range(from, to));
    }

    /// Generate, download and register a report
    pub fn generate_command(&self) {
        let state = self.state;
        if state.with_untracked(|s| s.loading) {
            return;
        }
        let Some(Ok(query)) = state.try_update(|s| s.begin_generate()) else {
            return;
        };
        let new_report = state.with_untracked(|s| s.new_report(today()));

        spawn_local(async move {
            let result = generate_and_record(query, new_report).await;
            state.update(|s| s.finish_generate(result));
        });
    }

    pub fn delete_command(&self, report_id: i64) {
        let state = self.state;
        spawn_local(async move {
            let result = model::delete_report(report_id).await;
            state.update(|s| s.remove_report(report_id, result));
        });
    }

    pub fn clear_command(&self) {
        self.state.update(|s| s.clear());
    }
}

impl Default for ReportGeneratorViewModel {
    fn default() -> Self {
        Self::new()
    }
}

async fn generate_and_record(
    query: GenerateReportQuery,
    new_report: NewSalesReport,
) -> Result<SalesReport, ReportError> {
    let csv = model::generate_report(&query).await?;
    download_csv(&csv, &query.report_type.file_name()).map_err(ReportError::Download)?;
    let created = model::create_report(&new_report).await?;
    Ok(created)
}
