use greenhouse_domain::threshold::ThresholdParam;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_store;
use crate::use_controller;

/// Current alert thresholds with an edit button per parameter.
#[component]
pub fn ThresholdTable() -> impl IntoView {
    view! {
        <section class="card thresholds">
            <h2>"Thresholds"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Parameter"</th>
                        <th>"Value"</th>
                        <th>"Default"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {ThresholdParam::ALL
                        .into_iter()
                        .map(|param| view! { <ThresholdRow param/> })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn ThresholdRow(param: ThresholdParam) -> impl IntoView {
    let store = use_store();
    let controller = use_controller();
    let value = move || store.with(|s| format!("{} {}", s.threshold(param), param.unit()));

    let on_edit = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            if let Err(err) = controller.update_threshold(param).await {
                tracing::debug!(%param, error = %err, "threshold not updated");
            }
        });
    };

    view! {
        <tr>
            <td>{param.as_str()}</td>
            <td class="threshold-value">{value}</td>
            <td>{format!("{} {}", param.default_value(), param.unit())}</td>
            <td>
                <button class="threshold-btn" data-param=param.as_str() on:click=on_edit>
                    "Edit"
                </button>
            </td>
        </tr>
    }
}
