use crate::shared::charts::BarChartModel;
use crate::shared::http::ApiError;
use crate::shared::number_format::{format_money, format_number_int, format_or_na};
use crate::shared::request_sequencer::{RequestSequencer, RequestToken};
use contracts::dashboards::d410_sales_overview::{SalesOverviewQuery, SalesOverviewResponse};
use contracts::enums::RangeKeyword;

pub const REVENUE_LABEL: &str = "Revenue";
pub const REVENUE_COLOR: &str = "#8884d8";

#[derive(Clone, Debug, Default)]
pub struct SalesOverviewState {
    pub range: RangeKeyword,
    /// `None` until the first response arrives
    pub data: Option<SalesOverviewResponse>,
    pub error: Option<String>,
    pub loading: bool,
    sequencer: RequestSequencer,
}

impl SalesOverviewState {
    pub fn set_range(&mut self, range: RangeKeyword) {
        self.range = range;
    }

    pub fn begin_fetch(&mut self) -> (RequestToken, SalesOverviewQuery) {
        self.loading = true;
        (
            self.sequencer.issue(),
            SalesOverviewQuery {
                date_range: self.range,
            },
        )
    }

    /// Returns false when a newer request has been issued since `token`
    pub fn apply_response(
        &mut self,
        token: RequestToken,
        result: Result<SalesOverviewResponse, ApiError>,
    ) -> bool {
        if !self.sequencer.is_current(token) {
            log::debug!("Dropping stale sales overview response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                log::debug!(
                    "Sales overview ({}): {} products",
                    self.range.code(),
                    data.sales_by_product.len()
                );
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                log::error!("Error fetching sales data: {}", e);
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn total_money_label(&self) -> String {
        let revenue = self.data.as_ref().map(|d| d.total_revenue).unwrap_or(0.0);
        format_or_na(revenue, |v| format!("${}", format_money(v)))
    }

    pub fn total_sales_label(&self) -> String {
        let sales = self.data.as_ref().map(|d| d.total_sales).unwrap_or(0);
        format_or_na(sales as f64, format_number_int)
    }

    /// Growth percentages are only shown once data is loaded
    pub fn money_growth(&self) -> Option<f64> {
        self.data.as_ref().map(|d| d.money_growth)
    }

    pub fn sales_growth(&self) -> Option<f64> {
        self.data.as_ref().map(|d| d.sales_growth)
    }

    /// `None` while there are no products to draw
    pub fn bar_chart(&self) -> Option<BarChartModel> {
        let bars: Vec<(String, f64)> = self
            .data
            .as_ref()?
            .product_bars()
            .into_iter()
            .map(|b| (b.product, b.revenue))
            .collect();
        BarChartModel::build(REVENUE_LABEL, REVENUE_COLOR, &bars)
    }
}
