pub mod app;
pub mod config;
mod error;
pub mod inspect;
pub mod store;
pub mod web;

// re-exports
pub use app::{App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Sets up a compact, human readable tracing subscriber.
/// Falls back to the `debug` level if `RUST_LOG` is not set.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

/// Sets up a JSON tracing subscriber for production.
/// Falls back to the `info` level if `RUST_LOG` is not set.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
