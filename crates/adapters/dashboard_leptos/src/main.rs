use greenhouse_app::config::DashboardConfig;
use greenhouse_dashboard_leptos::App;
use leptos::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Defaults baked into the binary; `localStorage` keys override them.
const CONFIG_DOCUMENT: &str = include_str!("../greenhouse-dashboard.toml");

fn stored_override(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let console = WASMLayer::new(WASMLayerConfigBuilder::new().build());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init();
}

fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::load(CONFIG_DOCUMENT, stored_override);
    let filter = config
        .as_ref()
        .map_or_else(|_| DashboardConfig::default().logging.filter, |c| c.logging.filter.clone());
    init_tracing(&filter);

    let config = config.unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid dashboard configuration, using defaults");
        DashboardConfig::default()
    });
    tracing::info!(
        base_url = %config.api.base_url,
        refresh_secs = config.refresh.interval_secs,
        "starting greenhouse dashboard"
    );

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
