use super::sales_nav::SalesNav;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Sales"</span>
                <SalesNav />
            </div>
        </header>
    }
}
