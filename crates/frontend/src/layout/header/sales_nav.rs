use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top-level sales pages in navigation order
const NAV_ITEMS: &[(&str, &str)] = &[
    ("Overview", paths::OVERVIEW),
    ("Generate Report", paths::GENERATE_REPORT),
    ("Sales Analysis", paths::SALES_ANALYSIS),
];

/// Links to the sales pages; the router marks the active one with `aria-current`
#[component]
pub fn SalesNav() -> impl IntoView {
    view! {
        <nav class="sales-nav">
            {NAV_ITEMS
                .iter()
                .map(|(label, href)| {
                    view! {
                        <A href=*href attr:class="sales-nav__link">
                            {*label}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
