use std::sync::Arc;
use std::time::Duration;

use greenhouse_app::config::DashboardConfig;
use greenhouse_app::ports::Ticker;
use greenhouse_app::services::dashboard_controller::DashboardController;
use greenhouse_domain::dashboard::DashboardState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod bootstrap;
mod components;
pub mod operator;
mod pages;
pub mod store;
mod ticker;

use api::HttpControlApi;
use components::{Clock, Nav, SessionBadge, ToastContainer, use_toasts};
use operator::BrowserOperator;
use pages::{Alerts, Control, History, Home, NotFound, Status};
use store::SignalStore;
use ticker::TimeoutTicker;

/// Controller wired to the browser adapters.
pub type Controller = DashboardController<HttpControlApi, BrowserOperator, SignalStore>;

/// Access the controller from Leptos context.
///
/// Must be called below the root [`App`].
pub fn use_controller() -> Arc<Controller> {
    use_context::<Arc<Controller>>().expect("Controller not found in context")
}

/// Retrieves the API client, for links the browser follows directly.
pub fn use_api() -> HttpControlApi {
    use_context::<HttpControlApi>().expect("HttpControlApi not found in context")
}

/// Root application component.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = SignalStore::new(DashboardState::from_bootstrap(bootstrap::read_bootstrap()));
    provide_context(store);
    let timeout_ms = config.notifications.timeout_ms;

    view! {
        <ToastContainer timeout_ms>
            <Shell config/>
        </ToastContainer>
    }
}

/// Everything below the toast context: controller, polling and pages.
#[component]
fn Shell(config: DashboardConfig) -> impl IntoView {
    let store = store::use_store();
    let api = HttpControlApi::new(config.api.base_url.clone());
    provide_context(api.clone());
    let controller = Arc::new(
        DashboardController::new(
            api,
            BrowserOperator::new(use_toasts()),
            store,
        )
        .with_threshold_refresh(config.thresholds.refresh),
    );
    provide_context(Arc::clone(&controller));

    match config.refresh_interval() {
        Some(period) => spawn_poller(controller, period),
        None => tracing::info!("periodic refresh disabled"),
    }

    let clock_format = config.clock.format;

    view! {
        <Router>
            <header>
                <h1>"Greenhouse"</h1>
                <SessionBadge/>
                <Clock format=clock_format/>
            </header>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("control") view=Control/>
                    <Route path=path!("alerts") view=Alerts/>
                    <Route path=path!("status") view=Status/>
                    <Route path=path!("history") view=History/>
                </Routes>
            </main>
        </Router>
    }
}

fn spawn_poller(controller: Arc<Controller>, period: Duration) {
    tracing::info!(period_secs = period.as_secs(), "starting periodic refresh");
    spawn_local(async move {
        let mut ticker = TimeoutTicker::every(period);
        loop {
            ticker.tick().await;
            controller.refresh().await;
        }
    });
}
