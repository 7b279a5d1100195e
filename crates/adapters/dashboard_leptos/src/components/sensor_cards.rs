//! Stat cards for the latest sensor reading.

use leptos::prelude::*;

use crate::store::use_store;

/// One card per monitored quantity, or a placeholder before the first reading.
#[component]
pub fn SensorCards() -> impl IntoView {
    let store = use_store();
    let reading = Memo::new(move |_| store.with(|s| s.sensors().cloned()));

    move || match reading.get() {
        Some(reading) => {
            let updated = reading.timestamp.clone();
            view! {
                <section class="card">
                    <div class="stat-cards">
                        {reading
                            .cards()
                            .into_iter()
                            .map(|(label, value)| view! { <StatCard label value/> })
                            .collect_view()}
                    </div>
                    {updated.map(|at| view! { <p class="stat-updated">"Updated " {at}</p> })}
                </section>
            }
            .into_any()
        }
        None => view! {
            <section class="card">
                <p>"Waiting for the first sensor reading…"</p>
            </section>
        }
        .into_any(),
    }
}

/// A card displaying a label and a formatted value.
#[component]
fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The formatted value to display.
    value: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}
