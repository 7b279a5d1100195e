use greenhouse_domain::mode::ControlMode;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_store;
use crate::use_controller;

/// Current control mode and the switch button.
#[component]
pub fn ModePanel() -> impl IntoView {
    let store = use_store();
    let controller = use_controller();
    let label = move || {
        store.with(|s| {
            s.mode()
                .map_or_else(|| "Current mode: unknown".to_string(), ControlMode::label)
        })
    };

    let on_toggle = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            match controller.toggle_control_mode().await {
                Ok(mode) => tracing::info!(%mode, "control mode switched"),
                Err(err) => tracing::debug!(error = %err, "control mode unchanged"),
            }
        });
    };

    view! {
        <section class="card mode">
            <h2>"Control mode"</h2>
            <p id="current-mode">{label}</p>
            <button class="mode-btn" on:click=on_toggle>"Switch mode"</button>
        </section>
    }
}
