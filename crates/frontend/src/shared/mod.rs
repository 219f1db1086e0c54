pub mod api_utils;
pub mod charts;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod request_sequencer;
pub mod validation;
