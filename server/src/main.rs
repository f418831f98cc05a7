//! BeeHive site server CLI
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the site server.
#[derive(Parser)]
#[command(
    name = "beehive",
    version,
    about = "Serve the BeeHive resort website"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "beehive.toml", global = true)]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the compiled site
    Serve {
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the compiled site (overrides server.site_root)
        #[arg(long)]
        site_root: Option<PathBuf>,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Validate configuration and the compiled site
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve {
            port,
            site_root,
            open,
        } => {
            server::cmd::serve::run(&cli.config, port, site_root, open).await?;
        }
        Commands::Check { strict } => {
            server::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["beehive", "serve", "--port", "8080", "--open"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, PathBuf::from("beehive.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve {
                port,
                site_root,
                open,
            } => {
                assert_eq!(port, Some(8080));
                assert!(site_root.is_none());
                assert!(open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_site_root() {
        let args = ["beehive", "serve", "--site-root", "dist"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Serve { site_root, port, .. } => {
                assert_eq!(site_root, Some(PathBuf::from("dist")));
                assert!(port.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["beehive", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["beehive", "-vvv", "serve"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["beehive", "check", "--config", "site.toml"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
