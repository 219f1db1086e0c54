mod dashboard;

pub use dashboard::SalesTrendDashboard;
