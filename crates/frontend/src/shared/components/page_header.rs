use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a dashboard page; children go to the right-hand action slot
#[component]
pub fn PageHeader(
    title: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    <span class="page-header__icon">{icon(icon_name)}</span>
                    {title}
                </h1>
                {subtitle.map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
