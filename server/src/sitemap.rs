//! Sitemap generation.
//!
//! Lists every site route for search engines.

use beehive_core::Route;
use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::config::Config;

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
    lastmod: NaiveDate,
}

impl SitemapGenerator {
    /// Create a generator stamping entries with today's date.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_lastmod(config, Utc::now().date_naive())
    }

    #[must_use]
    pub fn with_lastmod(config: Config, lastmod: NaiveDate) -> Self {
        Self { config, lastmod }
    }

    /// Generate sitemap XML for all routes.
    pub fn generate(&self) -> String {
        debug!(count = Route::ALL.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for route in Route::ALL {
            xml.push_str(&url_to_xml(&self.route_to_url(route)));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn route_to_url(&self, route: Route) -> SitemapUrl {
        let (changefreq, priority) = match route {
            Route::Home => (ChangeFreq::Weekly, 1.0),
            Route::Booking | Route::Tariff => (ChangeFreq::Monthly, 0.8),
            Route::Gallery | Route::Destinations | Route::Activities => (ChangeFreq::Monthly, 0.6),
            Route::Facilities | Route::Contact => (ChangeFreq::Yearly, 0.5),
        };

        SitemapUrl {
            loc: self.config.url_for(route.path()),
            lastmod: self.lastmod,
            changefreq,
            priority,
        }
    }
}

fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    xml.push_str(&format!(
        "    <lastmod>{}</lastmod>\n",
        url.lastmod.format("%Y-%m-%d")
    ));
    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        url.changefreq.as_str()
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
