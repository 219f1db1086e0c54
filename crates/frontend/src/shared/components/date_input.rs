use leptos::prelude::*;

/// Labelled native date picker
/// The value is always yyyy-mm-dd, or "" when cleared
#[component]
pub fn DateInput(
    /// DOM id, also used by the label
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new yyyy-mm-dd value
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="date"
                id=id
                class="date-input"
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </div>
    }
}
