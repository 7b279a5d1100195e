use leptos::prelude::*;

use crate::store::use_store;

/// Signed-in user and role.
#[component]
pub fn SessionBadge() -> impl IntoView {
    let store = use_store();
    let username = move || store.with(|s| s.username().unwrap_or("guest").to_string());
    let role = move || store.with(|s| s.role().to_string());

    view! {
        <span class="session">
            {username}
            " ("
            <span id="user-role">{role}</span>
            ")"
        </span>
    }
}
