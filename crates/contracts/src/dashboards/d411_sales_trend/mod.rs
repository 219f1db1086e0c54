pub mod dto;
pub mod series;
pub mod summary;

pub use dto::{SalesTrendQuery, SalesTrendResponse};
pub use series::{align, normalize_month, DataShapeError, MonthRecord};
pub use summary::{TrendDirection, TrendSummary, NOT_AVAILABLE};
