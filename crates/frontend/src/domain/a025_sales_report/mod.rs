//! Sales report generation and the registry of generated reports
pub mod ui;
