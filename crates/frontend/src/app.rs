use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    // The sales pages are designed for the dark palette
    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme=theme>
            <AppRoutes />
        </ConfigProvider>
    }
}
