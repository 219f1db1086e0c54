use crate::dashboards::d411_sales_trend::view_model::SalesTrendViewModel;
use crate::shared::charts::LineChart;
use crate::shared::components::{DateRangePicker, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::enums::TrendType;
use leptos::prelude::*;
use thaw::*;

/// Sales analysis: revenue trend with a moving average overlay
#[component]
pub fn SalesTrendDashboard() -> impl IntoView {
    let vm = SalesTrendViewModel::new();
    let state = vm.state;

    let trend_code = RwSignal::new(TrendType::default().code().to_string());
    Effect::new(move |_| {
        let code = trend_code.get();
        vm.set_trend_type(&code);
    });

    let on_range_change = Callback::new(move |(start, end): (String, String)| {
        vm.set_range(start, end);
    });

    let start_date = Signal::derive(move || state.with(|s| s.start_date.clone()));
    let end_date = Signal::derive(move || state.with(|s| s.end_date.clone()));
    let not_ready = Signal::derive(move || !state.with(|s| s.is_ready()));
    let loading = Signal::derive(move || state.with(|s| s.loading));

    let trend_options = TrendType::all()
        .into_iter()
        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
        .collect_view();

    let chart = move || match state.with(|s| s.chart_model()) {
        Some(model) => view! { <LineChart model=model /> }.into_any(),
        None => view! { <h2 class="chart-placeholder">"Chart Placeholder"</h2> }.into_any(),
    };

    view! {
        <PageFrame page_id="d411_sales_trend--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Sales Analysis" icon_name="trend" />

            <div class="page__content">
                <div class="dashboard-grid dashboard-grid--wide-right">
                    <div class="card">
                        <h2 class="card__title">"Trend line option"</h2>
                        <Select value=trend_code>{trend_options}</Select>

                        <h2 class="card__title">"Table Parameters"</h2>
                        <DateRangePicker
                            date_from=start_date
                            date_to=end_date
                            on_change=on_range_change
                            labels=("Start Date", "End Date")
                            ids=("trend-start", "trend-end")
                        />

                        {move || state.with(|s| s.error.clone()).map(|e| view! {
                            <div class="error">{e}</div>
                        })}

                        <Space>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    vm.clear_command();
                                    trend_code.set(TrendType::default().code().to_string());
                                }
                            >
                                "Clear"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=not_ready
                                loading=loading
                                on_click=move |_| vm.display_command()
                            >
                                "Display"
                            </Button>
                        </Space>
                    </div>

                    <div class="card card--chart">
                        <h2 class="card__title">"Trend Prediction"</h2>
                        {chart}
                    </div>
                </div>

                <div class="dashboard-grid">
                    <div class="card">
                        <h2 class="card__title">"Metric Explanation"</h2>
                        <p>
                            <strong>"Simple Moving Average (SMA)"</strong>
                            ": the unweighted mean of the previous n months. It smooths out \
                             fluctuations to show the trend over a period, but since every \
                             month counts equally it reacts slowly to recent changes."
                        </p>
                        <p>
                            <strong>"Exponential Moving Average (EMA)"</strong>
                            ": gives more weight to the most recent months, so it responds \
                             to new information faster than the SMA and captures turns in \
                             the data sooner."
                        </p>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Trend Prediction Summary:"</h2>
                        <p>"Trend Line: " {move || state.with(|s| s.trend_type.code())}</p>
                        <p>"Time Period: " {move || state.with(|s| s.time_period_label())}</p>
                        <p>"Trend direction: " {move || state.with(|s| s.summary.direction_label())}</p>
                        <p>"Peak of Actual Sales: " {move || state.with(|s| s.summary.peak_label().to_string())}</p>
                        <p>"Lowest Point of Actual Sales: " {move || state.with(|s| s.summary.trough_label().to_string())}</p>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
