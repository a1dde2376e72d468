//! Google News Explorer — Binary Entrypoint
//! Boots the Axum HTTP server exposing the search pipeline and metrics.
//!
//! See `README.md` for quickstart.

use std::sync::Arc;

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gnews_explorer::api::{self, AppState};
use gnews_explorer::config::load_config_default;
use gnews_explorer::metrics::Metrics;
use gnews_explorer::provider::google_rss::GoogleNewsRssProvider;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - GNEWS_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("GNEWS_DEV_LOG").ok().is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gnews=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // This enables GNEWS_CONFIG_PATH / GNEWS_DEV_LOG from .env.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let defaults = load_config_default().expect("Failed to load app config");

    let metrics = Metrics::init(defaults.max_results);

    let provider =
        Arc::new(GoogleNewsRssProvider::new().expect("Failed to build news provider client"));

    let state = AppState { provider, defaults };
    let router = api::create_router(state).merge(metrics.router());

    Ok(router.into())
}
