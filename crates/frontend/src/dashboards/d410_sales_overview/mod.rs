//! Sales overview: totals per range keyword and revenue by product
pub mod api;
pub mod state;
pub mod ui;
pub mod view_model;

pub use ui::SalesOverviewDashboard;
