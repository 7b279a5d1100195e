use greenhouse_domain::alert::AlertFilter;
use leptos::prelude::*;

use crate::components::AlertList;

/// Every alert, filterable by acknowledgment state.
#[component]
pub fn Alerts() -> impl IntoView {
    let (filter, set_filter) = signal(AlertFilter::All);

    view! {
        <section class="card">
            <h2>"Alerts"</h2>
            <label>
                "Show "
                <select on:change=move |ev| {
                    if let Ok(selected) = event_target_value(&ev).parse() {
                        set_filter.set(selected);
                    }
                }>
                    {AlertFilter::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_str() selected=move || filter.get() == option>
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <AlertList filter/>
        </section>
    }
}
