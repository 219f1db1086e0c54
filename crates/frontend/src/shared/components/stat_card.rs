use crate::shared::icons::icon;
use leptos::prelude::*;

/// Arrow and modifier class for a growth percentage
fn change_badge(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to the previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = change_badge(pct);
            view! { <span class=cls>{format!("{}{:.1}%", arrow, pct.abs())}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
            </div>
        </div>
    }
}
