//! Sales analysis: monthly revenue trend with SMA/EMA overlay
pub mod api;
pub mod series;
pub mod state;
pub mod ui;
pub mod view_model;

pub use ui::SalesTrendDashboard;
