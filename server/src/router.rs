//! HTTP routes for serving the compiled site.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{config::Config, robots::RobotsGenerator, sitemap::SitemapGenerator};

/// Documents rendered once at startup.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub sitemap: String,
    pub robots: String,
}

impl SiteState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sitemap: SitemapGenerator::new(config.clone()).generate(),
            robots: RobotsGenerator::new(config.clone()).generate(),
        }
    }
}

/// Create the site router.
///
/// Files under `site_root` are served as-is; any other path gets
/// `index.html` so the client router can resolve it.
pub fn create_router(site_root: &Path, state: Arc<SiteState>) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));

    Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn sitemap_handler(State(state): State<Arc<SiteState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.sitemap.clone(),
    )
}

async fn robots_handler(State(state): State<Arc<SiteState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.robots.clone(),
    )
}
