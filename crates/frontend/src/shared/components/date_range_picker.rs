use super::date_input::DateInput;
use leptos::prelude::*;

/// Two date inputs for the ends of a period
#[component]
pub fn DateRangePicker(
    /// Value of the first date in yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// Value of the second date in yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Called with (from, to) whenever either end changes
    on_change: Callback<(String, String)>,

    /// Labels of the two inputs, e.g. ("Start Date", "End Date")
    labels: (&'static str, &'static str),

    /// DOM ids of the two inputs
    ids: (&'static str, &'static str),
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };
    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    view! {
        <div class="date-range-picker">
            <DateInput id=ids.0 label=labels.0 value=date_from on_change=on_from_change />
            <DateInput id=ids.1 label=labels.1 value=date_to on_change=on_to_change />
        </div>
    }
}
