pub mod date_input;
pub mod date_range_picker;
pub mod page_header;
pub mod stat_card;

pub use date_input::DateInput;
pub use date_range_picker::DateRangePicker;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
