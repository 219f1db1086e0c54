pub mod aggregate;

pub use aggregate::{GenerateReportQuery, NewSalesReport, SalesReport};
