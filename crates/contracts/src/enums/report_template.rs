use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the CSV produced by the report generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportTemplate {
    #[default]
    #[serde(rename = "product-analysis")]
    ProductAnalysis,
    #[serde(rename = "sales-summary")]
    SalesSummary,
}

impl ReportTemplate {
    pub fn code(&self) -> &'static str {
        match self {
            ReportTemplate::ProductAnalysis => "product-analysis",
            ReportTemplate::SalesSummary => "sales-summary",
        }
    }

    /// Name stored on the report record
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportTemplate::ProductAnalysis => "Product Analysis",
            ReportTemplate::SalesSummary => "Sales Summary",
        }
    }

    /// Download name, e.g. `sales-summary_report.csv`
    pub fn file_name(&self) -> String {
        format!("{}_report.csv", self.code())
    }

    pub fn all() -> Vec<ReportTemplate> {
        vec![ReportTemplate::ProductAnalysis, ReportTemplate::SalesSummary]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "product-analysis" => Some(ReportTemplate::ProductAnalysis),
            "sales-summary" => Some(ReportTemplate::SalesSummary),
            _ => None,
        }
    }
}

impl fmt::Display for ReportTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
