//! Current user of the external session
pub mod api;
pub mod storage;
