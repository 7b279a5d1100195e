use greenhouse_domain::endpoint::Endpoint;
use greenhouse_domain::history::HistoryWindow;
use greenhouse_domain::sensor::SensorReading;
use leptos::prelude::*;

use crate::store::use_store;
use crate::use_api;

/// Readings over the window the server rendered, with an export link.
///
/// Picking another span submits `?hours=` so the server embeds that window.
#[component]
pub fn History() -> impl IntoView {
    let store = use_store();
    let api = use_api();
    let window = store.with_untracked(|s| s.history_window());
    let readings = Memo::new(move |_| store.with(|s| s.history().to_vec()));
    let export_href = api.url(&Endpoint::ExportData(window));

    view! {
        <section class="card history">
            <h2>"History (" {window.to_string()} ")"</h2>
            <form method="get" action="/history" class="history-window">
                <label>
                    "Span "
                    <select name="hours">
                        {HistoryWindow::CHOICES
                            .into_iter()
                            .map(|hours| {
                                view! {
                                    <option value=hours.to_string() selected={hours == window.hours()}>
                                        {format!("{hours} h")}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit">"Show"</button>
                <a class="export-btn" href=export_href rel="external">
                    "Export " {format!("{} h", window.export_hours())}
                </a>
            </form>
            <Show
                when=move || readings.with(|r| !r.is_empty())
                fallback=move || {
                    view! { <p>{format!("No readings in the last {} hours.", window.hours())}</p> }
                }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"Temperature (°C)"</th>
                            <th>"Humidity (%)"</th>
                            <th>"Light (lux)"</th>
                            <th>"CO2 (ppm)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || readings.get().into_iter().map(|reading| view! { <HistoryRow reading/> }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn HistoryRow(reading: SensorReading) -> impl IntoView {
    view! {
        <tr>
            <td>{reading.timestamp.unwrap_or_default()}</td>
            <td>{format!("{:.1}", reading.temperature)}</td>
            <td>{format!("{:.1}", reading.humidity)}</td>
            <td>{format!("{:.1}", reading.light_intensity)}</td>
            <td>{format!("{:.1}", reading.co2_level)}</td>
        </tr>
    }
}
