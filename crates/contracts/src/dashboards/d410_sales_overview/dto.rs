use crate::enums::RangeKeyword;
use crate::shared::decimal::{f64_lenient, u64_lenient};
use serde::{Deserialize, Serialize};

/// Bar label for a product the provider sent without a name
pub const UNNAMED_PRODUCT: &str = "(unnamed)";

/// Query of `GET sales/overview/`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewQuery {
    pub date_range: RangeKeyword,
}

/// Aggregate totals for a range keyword.
///
/// Every field defaults, so a partial payload renders as zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// Sent as decimal text by the provider
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_sales: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub money_growth: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub sales_growth: f64,
    #[serde(default)]
    pub sales_by_product: Vec<ProductSales>,
}

/// Per-product aggregate, field names as the provider's ORM emits them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    /// `null` when the product row lost its name
    #[serde(rename = "productID__prodName", default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_quantity: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_revenue: f64,
}

/// Bar chart row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBar {
    pub product: String,
    pub revenue: f64,
    pub quantity: f64,
}

impl SalesOverviewResponse {
    /// Direct projection in provider order (no sorting or grouping)
    pub fn product_bars(&self) -> Vec<ProductBar> {
        self.sales_by_product
            .iter()
            .map(|p| ProductBar {
                product: p
                    .product_name
                    .clone()
                    .unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
                revenue: p.total_revenue,
                quantity: p.total_quantity,
            })
            .collect()
    }
}
