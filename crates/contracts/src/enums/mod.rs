pub mod range_keyword;
pub mod report_template;
pub mod trend_type;

pub use range_keyword::RangeKeyword;
pub use report_template::ReportTemplate;
pub use trend_type::TrendType;
