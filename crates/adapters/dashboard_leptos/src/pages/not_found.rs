use leptos::prelude::*;
use leptos_router::components::A;

/// Displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>
                <A href="/">"Back to the overview"</A>
            </p>
        </div>
    }
}
