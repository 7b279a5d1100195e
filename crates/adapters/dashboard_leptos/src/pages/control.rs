use leptos::prelude::*;

use crate::components::{DevicePanel, ModePanel};

#[component]
pub fn Control() -> impl IntoView {
    view! {
        <ModePanel/>
        <DevicePanel/>
    }
}
