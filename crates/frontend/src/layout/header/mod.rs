pub mod header;
pub mod sales_nav;

pub use header::Header;
pub use sales_nav::SalesNav;
