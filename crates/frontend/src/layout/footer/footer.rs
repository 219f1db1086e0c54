use leptos::prelude::*;

const FOOTER_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookies Settings"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            {FOOTER_LINKS
                .iter()
                .map(|label| view! { <span class="footer__item">{*label}</span> })
                .collect_view()}
        </footer>
    }
}
