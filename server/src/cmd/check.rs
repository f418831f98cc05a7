//! Check command - validate configuration and the compiled site

use std::path::Path;

use color_eyre::eyre::{Result, bail};

use crate::config::Config;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and site root");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    if !config_path.exists() {
        result.add_warning(format!(
            "Configuration file {} not found, using defaults",
            config_path.display()
        ));
    }

    let config = match Config::load(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            result.add_error(format!("Configuration error: {e}"));
            return result;
        }
    };

    if config.site.base_url.starts_with("http://") {
        result.add_warning("site.base_url does not use https");
    }

    println!("\nChecking site root...");
    check_site_root(&config.server.site_root, &mut result);

    result
}

fn check_site_root(root: &Path, result: &mut ValidationResult) {
    if !root.is_dir() {
        result.add_error(format!("Site root is not a directory: {}", root.display()));
        println!("  ✗ {} missing", root.display());
        return;
    }

    if root.join("index.html").is_file() {
        println!("  ✓ index.html exists");
    } else {
        result.add_error(format!("Missing {}/index.html", root.display()));
        println!("  ✗ index.html missing (required)");
    }

    if root.join("pkg").is_dir() {
        println!("  ✓ pkg/ exists");
    } else {
        result.add_warning(format!("Missing {}/pkg/ (compiled wasm bundle)", root.display()));
        println!("  ⚠ pkg/ missing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, site_root: &Path) -> std::path::PathBuf {
        let path = dir.join("beehive.toml");
        std::fs::write(
            &path,
            format!("[server]\nsite_root = \"{}\"\n", site_root.display()),
        )
        .expect("write config");
        path
    }

    #[test]
    fn test_complete_site_root_passes() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("site");
        std::fs::create_dir_all(root.join("pkg")).expect("create pkg");
        std::fs::write(root.join("index.html"), "<html></html>").expect("write index");

        let config_path = write_config(dir.path(), &root);
        let result = validate(&config_path);

        assert!(!result.has_errors(), "errors: {:?}", result.errors);
        assert!(!result.has_warnings(), "warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_missing_index_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("site");
        std::fs::create_dir_all(&root).expect("create root");

        let config_path = write_config(dir.path(), &root);
        let result = validate(&config_path);

        assert!(result.errors.iter().any(|e| e.contains("index.html")));
        assert!(result.warnings.iter().any(|w| w.contains("pkg")));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("beehive.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"\"\n").expect("write config");

        let result = validate(&config_path);
        assert!(result.has_errors());
    }

    #[test]
    fn test_broken_config_reported_once() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("beehive.toml");
        std::fs::write(&config_path, "[server\nport = 1").expect("write config");

        let result = validate(&config_path);
        assert_eq!(result.errors.len(), 1, "errors: {:?}", result.errors);
        assert!(result.errors[0].starts_with("Configuration error"));
    }
}
