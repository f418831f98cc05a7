//! Serve command - run the HTTP server for the compiled site

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use crate::{
    config::Config,
    router::{SiteState, create_router},
};

/// Run the serve command.
pub async fn run(
    config_path: &Path,
    port: Option<u16>,
    site_root: Option<PathBuf>,
    open_browser: bool,
) -> Result<()> {
    tracing::info!(?config_path, ?port, ?site_root, "Starting server");

    let mut config = Config::load(config_path).wrap_err("Failed to load configuration")?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(site_root) = site_root {
        config.server.site_root = site_root;
    }

    let root = config.server.site_root.clone();
    if !root.join("index.html").is_file() {
        tracing::warn!(
            root = %root.display(),
            "index.html not found in site root; build the frontend first"
        );
    }

    let state = Arc::new(SiteState::from_config(&config));
    let app = create_router(&root, state);
    let addr = config.listen_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  {} running at http://{addr}", config.site.title);
    println!("  Serving {}", root.display());
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser && let Err(e) = open::that(format!("http://{addr}")) {
        tracing::warn!("Failed to open browser: {e}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
