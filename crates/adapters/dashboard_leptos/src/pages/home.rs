use greenhouse_domain::alert::AlertFilter;
use leptos::prelude::*;

use crate::components::{AlertList, DevicePanel, SensorCards};

/// Most recent unhandled alerts shown on the overview.
const RECENT_ALERTS: usize = 5;

/// Overview: latest reading, devices and recent unhandled alerts.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <SensorCards/>
        <DevicePanel/>
        <section class="card">
            <h2>"Recent alerts"</h2>
            <AlertList filter=AlertFilter::Unhandled limit=RECENT_ALERTS/>
        </section>
    }
}
