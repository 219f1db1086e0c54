//! PageFrame: root wrapper of every routed page.
//!
//! Puts `id` and `data-page-category` on the root element and picks the
//! BEM modifier class from the category.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="d410_sales_overview--dashboard" category=PAGE_CAT_DASHBOARD>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn frame_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log::warn!("PageFrame: non-standard page metadata {} / {}", page_id, category);
    }

    view! {
        <div
            id=page_id
            class=frame_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(frame_class(PAGE_CAT_USECASE), "page page--usecase");
        assert_eq!(frame_class("other"), "page");
    }
}
