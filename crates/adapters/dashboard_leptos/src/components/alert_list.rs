//! Alert cards with a "mark handled" action.

use greenhouse_app::ports::StateStore;
use greenhouse_domain::alert::{Alert, AlertFilter};
use greenhouse_domain::id::AlertId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_store;
use crate::use_controller;

/// Alerts matching `filter`, newest first.
#[component]
pub fn AlertList(
    #[prop(into)] filter: Signal<AlertFilter>,
    /// Show at most this many alerts.
    #[prop(optional)]
    limit: Option<usize>,
) -> impl IntoView {
    let store = use_store();
    let ids = Memo::new(move |_| {
        let filter = filter.get();
        store.with(|s| {
            s.alerts()
                .iter()
                .filter(|alert| filter.matches(alert))
                .take(limit.unwrap_or(usize::MAX))
                .map(|alert| alert.id)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Show
            when=move || ids.with(|ids| !ids.is_empty())
            fallback=|| view! { <p class="no-alerts">"No alerts."</p> }
        >
            <div class="alerts">
                <For
                    each=move || ids.get()
                    key=|id| *id
                    children=|id| view! { <AlertCard id/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn AlertCard(id: AlertId) -> impl IntoView {
    let store = use_store();
    let controller = use_controller();
    let alert = Memo::new(move |_| store.with(|s| s.alert(id).cloned()));
    let handled = move || alert.with(|a| a.as_ref().is_some_and(Alert::is_handled));
    let class = move || alert.with(|a| a.as_ref().map_or("alert", Alert::css_class));

    let (param, reading, message, created_at) = store.read(|s| {
        s.alert(id)
            .map(|a| {
                (
                    a.param.clone(),
                    a.value.map(|v| format!(" ({v})")),
                    a.message.clone(),
                    a.created_at.clone(),
                )
            })
            .unwrap_or_default()
    });

    let on_handle = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            if let Err(err) = controller.handle_alert(id).await {
                tracing::debug!(alert = %id, error = %err, "alert not handled");
            }
        });
    };

    view! {
        <div id=id.element_id() class=class>
            <p>
                <strong>{param}</strong>
                {reading}
                ": "
                {message}
            </p>
            {created_at.map(|at| view! { <p class="alert-meta">{at}</p> })}
            <Show
                when=move || !handled()
                fallback=|| {
                    view! {
                        <p class="alert-status">
                            <strong>"Status: "</strong>
                            "Handled"
                        </p>
                    }
                }
            >
                <button class="handle-btn" on:click=on_handle.clone()>"Mark handled"</button>
            </Show>
        </div>
    }
}
