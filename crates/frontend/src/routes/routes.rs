use crate::dashboards::{SalesOverviewDashboard, SalesTrendDashboard};
use crate::domain::a025_sales_report::ui::GenerateReportPage;
use crate::layout::Shell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=paths::OVERVIEW /> } />
                    <Route path=path!("/sales") view=SalesOverviewDashboard />
                    <Route path=path!("/sales/salesanalysis") view=SalesTrendDashboard />
                    <Route path=path!("/sales/generate-report") view=GenerateReportPage />
                </Routes>
            </Shell>
        </Router>
    }
}
