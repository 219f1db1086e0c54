use crate::shared::http::{get_json, url_with_query, ApiError};
use contracts::dashboards::d410_sales_overview::{SalesOverviewQuery, SalesOverviewResponse};

const OVERVIEW_PATH: &str = "sales/overview/";

/// Totals and per-product revenue for a range keyword
pub async fn fetch_sales_overview(
    query: &SalesOverviewQuery,
) -> Result<SalesOverviewResponse, ApiError> {
    let url = url_with_query(OVERVIEW_PATH, query)?;
    get_json(&url).await
}
