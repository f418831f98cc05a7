//! robots.txt generation.

use tracing::debug;

use crate::config::Config;

/// robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate robots.txt, pointing crawlers at the sitemap.
    pub fn generate(&self) -> String {
        debug!("generating robots.txt");

        let mut out = String::from("User-agent: *\n");
        for path in &self.config.robots.disallow {
            out.push_str(&format!("Disallow: {path}\n"));
        }
        out.push_str("Allow: /\n");
        out.push_str(&format!("Sitemap: {}\n", self.config.url_for("sitemap.xml")));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_allows_all_by_default() {
        let robots = RobotsGenerator::new(Config::default()).generate();
        assert_eq!(
            robots,
            "User-agent: *\nAllow: /\nSitemap: https://beehivewayanad.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_robots_disallow_entries() {
        let mut config = Config::default();
        config.robots.disallow = vec!["/booking".to_string()];

        let robots = RobotsGenerator::new(config).generate();
        assert!(robots.contains("Disallow: /booking\n"));
    }
}
