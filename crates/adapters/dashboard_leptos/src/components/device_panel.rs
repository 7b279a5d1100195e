//! Device table with on/off buttons.

use greenhouse_app::ports::StateStore;
use greenhouse_domain::dashboard::DashboardState;
use greenhouse_domain::id::DeviceName;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_store;
use crate::use_controller;

/// Every known device with its status and an action button.
///
/// Buttons are disabled while the server is in automatic mode and the
/// operator is not an admin.
#[component]
pub fn DevicePanel() -> impl IntoView {
    let store = use_store();
    let names = Memo::new(move |_| {
        store.with(|s| {
            s.devices()
                .into_iter()
                .map(|device| device.name)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="card devices">
            <h2>"Devices"</h2>
            <Show
                when=move || names.with(|names| !names.is_empty())
                fallback=|| view! { <p>"No devices reported yet."</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Device"</th>
                            <th>"Status"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || names.get()
                            key=|name| name.clone()
                            children=|name| view! { <DeviceRow name/> }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn DeviceRow(name: DeviceName) -> impl IntoView {
    let store = use_store();
    let controller = use_controller();
    let device = {
        let name = name.clone();
        Memo::new(move |_| store.with(|s| s.device(&name)))
    };
    let enabled = Memo::new(move |_| store.with(DashboardState::device_controls_enabled));

    let status_text = move || device.with(|d| d.as_ref().map(|d| d.status.to_string()));
    let status_class = move || {
        device.with(|d| {
            d.as_ref()
                .map_or_else(|| "device-status".to_string(), |d| d.status_class())
        })
    };
    let button_label = move || device.with(|d| d.as_ref().map(|d| d.button_label()));

    let on_click = {
        let name = name.clone();
        move |_| {
            let Some(next) = store.read(|s| s.device(&name)).map(|d| d.next_action()) else {
                return;
            };
            let controller = controller.clone();
            let name = name.clone();
            spawn_local(async move {
                if let Err(err) = controller.set_device_status(name, next).await {
                    tracing::debug!(error = %err, "device command not applied");
                }
            });
        }
    };

    let label = name.label();
    let data_device = name.to_string();

    view! {
        <tr>
            <td>{label}</td>
            <td>
                <span class=status_class data-device=data_device.clone()>{status_text}</span>
            </td>
            <td>
                <button
                    class="device-btn"
                    data-device=data_device
                    disabled=move || !enabled.get()
                    on:click=on_click
                >
                    {button_label}
                </button>
            </td>
        </tr>
    }
}
