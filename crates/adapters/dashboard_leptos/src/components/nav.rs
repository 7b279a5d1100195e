use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">"Overview"</A></li>
                <li><A href="/control">"Control"</A></li>
                <li><A href="/alerts">"Alerts"</A></li>
                <li><A href="/status">"Status"</A></li>
                // the server embeds history readings on a full page load only
                <li><a href="/history" rel="external">"History"</a></li>
            </ul>
        </nav>
    }
}
