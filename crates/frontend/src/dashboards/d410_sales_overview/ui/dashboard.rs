use crate::dashboards::d410_sales_overview::view_model::SalesOverviewViewModel;
use crate::shared::charts::BarChart;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::enums::RangeKeyword;
use leptos::prelude::*;
use thaw::*;

/// Sales overview: totals for a range keyword and revenue per product
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let vm = SalesOverviewViewModel::new();
    let state = vm.state;

    // Select works with strings; the keyword id is the option value
    let range_id = RwSignal::new(RangeKeyword::default().id().to_string());

    vm.load_command();
    Effect::new(move |_| {
        let id = range_id.get();
        vm.select_range(&id);
    });

    let range_options = RangeKeyword::all()
        .into_iter()
        .map(|r| view! { <option value=r.id()>{r.display_name()}</option> })
        .collect_view();

    let total_money = Signal::derive(move || state.with(|s| s.total_money_label()));
    let total_sales = Signal::derive(move || state.with(|s| s.total_sales_label()));
    let money_growth = Signal::derive(move || state.with(|s| s.money_growth()));
    let sales_growth = Signal::derive(move || state.with(|s| s.sales_growth()));

    let error = move || {
        state
            .with(|s| s.error.clone())
            .map(|err| view! { <div class="error">{format!("Error: {}", err)}</div> })
    };

    let content = move || {
        if state.with(|s| s.data.is_none()) {
            if state.with(|s| s.error.is_some()) {
                return view! { <></> }.into_any();
            }
            return view! {
                <div class="page__loading">
                    <Spinner />
                    <span>"Loading..."</span>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="stat-card-row">
                <StatCard label="Total Money" icon_name="money" value=total_money change_percent=money_growth />
                <StatCard label="Total Sales" icon_name="cart" value=total_sales change_percent=sales_growth />
            </div>
            <div class="card card--chart">
                <h2 class="card__title">"Sales by Product"</h2>
                {move || match state.with(|s| s.bar_chart()) {
                    Some(model) => view! { <BarChart model=model /> }.into_any(),
                    None => view! { <p class="chart-placeholder">"No data available"</p> }.into_any(),
                }}
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="d410_sales_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Sales Overview" icon_name="money">
                <Select value=range_id>{range_options}</Select>
            </PageHeader>

            <div class="page__content">
                {error}
                {content}
            </div>
        </PageFrame>
    }
}
