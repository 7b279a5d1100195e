//! Header clock.

use std::time::Duration;

use chrono::Local;
use greenhouse_app::services::display_clock::DisplayClock;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ticker::TimeoutTicker;

/// Local wall-clock time, refreshed every second.
#[component]
pub fn Clock(
    /// `strftime` pattern.
    #[prop(into)]
    format: String,
) -> impl IntoView {
    let clock = DisplayClock::new(format, || Local::now().naive_local());
    let (text, set_text) = signal(clock.render());

    spawn_local(async move {
        clock
            .run(TimeoutTicker::every(Duration::from_secs(1)), move |now| {
                set_text.set(now);
            })
            .await;
    });

    view! { <span id="currentTime" class="clock">{text}</span> }
}
