//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{module}--{category}` (e.g. `"d411_sales_trend--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the module name searchable: copy the id from the
//! DOM inspector and it points at the `dashboards/d411_sales_trend/` directory.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page with a form (report generation).
pub const PAGE_CAT_USECASE: &str = "usecase";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_DASHBOARD, PAGE_CAT_USECASE];

/// Validate that a page id matches the `{module}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((module, category)) => !module.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
