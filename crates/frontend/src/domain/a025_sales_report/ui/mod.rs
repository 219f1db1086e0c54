pub mod generate;

pub use generate::GenerateReportPage;
