//! BeeHive site server.
//!
//! Serves the compiled client-side site with a fallback to `index.html`,
//! plus generated `sitemap.xml` and `robots.txt`.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, check)
//! - [`config`] - `beehive.toml` and environment overrides
//! - [`router`] - axum routes

pub mod cmd;
pub mod config;
pub mod error;
pub mod robots;
pub mod router;
pub mod sitemap;

pub use config::Config;
pub use error::{Result, ServerError};

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
