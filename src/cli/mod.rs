//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod sections;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::cli::sections::print_sections;
use crate::core::app::App;
use crate::core::config::Config;
use crate::core::content::ContentRegistry;
use crate::core::toml_file::path_display;
use crate::ui::session::{self, SessionEnd};
use crate::ui::theme::{Theme, THEME_NAMES};
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A portfolio you browse over SSH")]
#[command(
    long_about = "Folio is a full-screen terminal portfolio. Run it as the command of an SSH \
session (for example through ForceCommand) and each connection gets its own splash screen \
and tabbed view of the content.\n\n\
Controls:\n\
  Left/Right, h/l   Switch tabs\n\
  1-9               Jump to a tab\n\
  Up/Down, j/k      Move the selection or scroll\n\
  PgUp/PgDn         Page through the current tab\n\
  q, Ctrl+C         Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML content file to serve instead of the built-in sample
    #[arg(long, global = true, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Theme to use (dark, light, monochrome)
    #[arg(short = 't', long, global = true)]
    pub theme: Option<String>,

    /// Splash screen duration in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub splash_ms: Option<u64>,

    /// Write logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session on this terminal (default)
    Run,
    /// List the tabs the content provides
    Sections {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

impl Args {
    /// Flag values as a config layer over the file.
    fn overrides(&self) -> Config {
        Config {
            splash_ms: self.splash_ms,
            tick_ms: None,
            theme: self.theme.clone(),
            content: self.content.clone(),
            log_file: self.log.clone(),
        }
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let file_config = Config::load(args.config.as_deref())?;
    let config = file_config.merged_with(args.overrides());

    match args.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            init_tracing(config.log_file.as_deref())?;
            let registry = Arc::new(load_registry(&config)?);
            let theme = resolve_theme(config.theme_name());
            let app = App::new(registry, theme);
            let end = session::run(app, &config).await?;
            if end == SessionEnd::Closed {
                warn!("session ended without a quit or disconnect");
            }
            Ok(())
        }
        Commands::Sections { json } => {
            let registry = load_registry(&config)?;
            print_sections(&registry, json)
        }
        Commands::Config { init } => {
            if init {
                let path = match &args.config {
                    Some(path) => path.clone(),
                    None => Config::get_config_path()
                        .ok_or("could not determine a configuration directory")?,
                };
                init_config(&path)?;
            }
            config.print_all();
            Ok(())
        }
    }
}

/// The content the session serves: the configured file, or the built-in sample.
pub fn load_registry(config: &Config) -> Result<ContentRegistry, Box<dyn Error>> {
    match &config.content {
        Some(path) => {
            let registry = ContentRegistry::load_from_path(path)?;
            info!(
                path = %path.display(),
                sections = registry.len(),
                "content loaded"
            );
            Ok(registry)
        }
        None => Ok(ContentRegistry::builtin()),
    }
}

fn resolve_theme(name: &str) -> Theme {
    Theme::from_name(name).unwrap_or_else(|| {
        warn!(theme = name, "unknown theme, falling back to dark");
        eprintln!(
            "Unknown theme '{name}'. Available themes: {}",
            THEME_NAMES.join(", ")
        );
        Theme::dark_default()
    })
}

fn init_config(path: &Path) -> Result<(), Box<dyn Error>> {
    if Config::init_at(path)? {
        println!("✅ Wrote default configuration to {}", path_display(path));
    } else {
        println!(
            "Configuration already exists at {}; leaving it unchanged",
            path_display(path)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn flags_override_file_values() {
        let args = Args::parse_from([
            "folio",
            "--theme",
            "light",
            "--splash-ms",
            "250",
            "sections",
        ]);
        let file = Config {
            splash_ms: Some(5000),
            tick_ms: Some(40),
            theme: Some("monochrome".to_string()),
            ..Config::default()
        };
        let config = file.merged_with(args.overrides());
        assert_eq!(config.splash_ms, Some(250));
        assert_eq!(config.tick_ms, Some(40));
        assert_eq!(config.theme_name(), "light");
        assert!(matches!(args.command, Some(Commands::Sections { json: false })));
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let args = Args::parse_from(["folio", "config", "--init", "-c", "/tmp/x.toml"]);
        assert!(matches!(args.command, Some(Commands::Config { init: true })));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/x.toml")));
    }

    #[test]
    fn no_subcommand_means_run() {
        let args = Args::parse_from(["folio"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn registry_defaults_to_builtin() {
        let registry = load_registry(&Config::default()).expect("builtin");
        assert_eq!(registry.len(), ContentRegistry::builtin().len());
    }

    #[test]
    fn registry_loads_configured_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("content.toml");
        fs::write(
            &path,
            r#"
title = "Sam - SSH Portfolio"

[[sections]]
name = "Contact"

[[sections.records]]
kind = "contact"
text = "sam@example.com"
"#,
        )
        .expect("write content");

        let config = Config {
            content: Some(path),
            ..Config::default()
        };
        let registry = load_registry(&config).expect("load");
        assert_eq!(registry.title(), "Sam - SSH Portfolio");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Contact"]);
    }

    #[test]
    fn missing_content_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let config = Config {
            content: Some(dir.path().join("absent.toml")),
            ..Config::default()
        };
        assert!(load_registry(&config).is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        assert_eq!(resolve_theme("neon"), Theme::dark_default());
        assert_eq!(resolve_theme("light"), Theme::light());
    }
}
