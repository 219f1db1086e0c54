use crate::enums::ReportTemplate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Record of a generated report, as stored by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(rename = "reportID")]
    pub report_id: i64,
    #[serde(rename = "reportName")]
    pub report_name: String,
    #[serde(default)]
    pub description: String,
    /// "YYYY-MM-DD"
    #[serde(rename = "createdDate")]
    pub created_date: String,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
}

/// Payload of `POST sales/create-report/`; the identifier is assigned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSalesReport {
    #[serde(rename = "reportName")]
    pub report_name: String,
    pub description: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
}

pub const DEFAULT_DESCRIPTION: &str = "Description";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

impl NewSalesReport {
    pub fn for_template(
        template: ReportTemplate,
        created_date: NaiveDate,
        created_by: Option<&str>,
    ) -> Self {
        Self {
            report_name: template.display_name().to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            created_date: created_date.format("%Y-%m-%d").to_string(),
            created_by: created_by
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
        }
    }
}

/// Query of `GET sales/generate_sales_performance_report/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportQuery {
    #[serde(rename = "fromDate")]
    pub from_date: NaiveDate,
    #[serde(rename = "toDate")]
    pub to_date: NaiveDate,
    #[serde(rename = "reportType")]
    pub report_type: ReportTemplate,
}
