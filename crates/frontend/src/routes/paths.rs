//! Route paths of the sales pages

pub const OVERVIEW: &str = "/sales";
pub const SALES_ANALYSIS: &str = "/sales/salesanalysis";
pub const GENERATE_REPORT: &str = "/sales/generate-report";
