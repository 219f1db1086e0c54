pub mod d410_sales_overview;
pub mod d411_sales_trend;

pub use d410_sales_overview::SalesOverviewDashboard;
pub use d411_sales_trend::SalesTrendDashboard;
