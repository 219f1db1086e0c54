//! API layer for report generation and the report registry

use crate::shared::api_utils::api_url;
use crate::shared::http::{delete, get_json, get_text, post_json, url_with_query, ApiError};
use contracts::domain::a025_sales_report::{GenerateReportQuery, NewSalesReport, SalesReport};
use thiserror::Error;

const GENERATE_PATH: &str = "sales/generate_sales_performance_report/";
const REPORTS_PATH: &str = "sales/reports/";
const CREATE_PATH: &str = "sales/create-report/";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Download failed: {0}")]
    Download(String),
}

/// Rendered CSV for the window and template
pub async fn generate_report(query: &GenerateReportQuery) -> Result<String, ApiError> {
    let url = url_with_query(GENERATE_PATH, query)?;
    get_text(&url).await
}

pub async fn list_reports() -> Result<Vec<SalesReport>, ApiError> {
    get_json(&api_url(REPORTS_PATH)).await
}

/// Register a generated report; the server assigns `reportID`
pub async fn create_report(report: &NewSalesReport) -> Result<SalesReport, ApiError> {
    post_json(&api_url(CREATE_PATH), report).await
}

pub async fn delete_report(report_id: i64) -> Result<(), ApiError> {
    delete(&api_url(&format!("{}{}/", REPORTS_PATH, report_id))).await
}
