use leptos::prelude::*;

use crate::components::{SensorCards, ThresholdTable};

/// Latest reading next to the thresholds it is checked against.
#[component]
pub fn Status() -> impl IntoView {
    view! {
        <SensorCards/>
        <ThresholdTable/>
    }
}
