use crate::shared::http::{get_json, url_with_query, ApiError};
use contracts::dashboards::d411_sales_trend::{SalesTrendQuery, SalesTrendResponse};

const TREND_PATH: &str = "sales/sales_trend_data/";

/// Monthly revenue with the requested moving average
pub async fn fetch_sales_trend(query: &SalesTrendQuery) -> Result<SalesTrendResponse, ApiError> {
    let url = url_with_query(TREND_PATH, query)?;
    log::debug!("Fetching sales trend: {}", url);
    get_json(&url).await
}
