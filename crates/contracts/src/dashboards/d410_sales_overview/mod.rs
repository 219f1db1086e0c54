pub mod dto;

pub use dto::{ProductBar, ProductSales, SalesOverviewQuery, SalesOverviewResponse};
