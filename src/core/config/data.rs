use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SPLASH_MS: u64 = 3000;
pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_THEME: &str = "dark";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long the splash screen stays up before the main view may open
    pub splash_ms: Option<u64>,
    /// Spinner frame interval on the splash screen
    pub tick_ms: Option<u64>,
    /// UI theme name (e.g., "dark", "light", "monochrome")
    pub theme: Option<String>,
    /// TOML content document; the built-in sample is used when unset
    pub content: Option<PathBuf>,
    /// Destination for tracing output. The terminal is never used for logs.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// A config with every key spelled out, used by `folio config --init`.
    pub fn with_defaults() -> Self {
        Self {
            splash_ms: Some(DEFAULT_SPLASH_MS),
            tick_ms: Some(DEFAULT_TICK_MS),
            theme: Some(DEFAULT_THEME.to_string()),
            content: None,
            log_file: None,
        }
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms.unwrap_or(DEFAULT_SPLASH_MS))
    }

    pub fn tick_interval(&self) -> Duration {
        // A zero interval would make tokio's interval panic.
        Duration::from_millis(self.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(1))
    }

    pub fn theme_name(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    /// Layer values from `other` over this config; unset keys fall through.
    pub fn merged_with(mut self, other: Config) -> Self {
        if other.splash_ms.is_some() {
            self.splash_ms = other.splash_ms;
        }
        if other.tick_ms.is_some() {
            self.tick_ms = other.tick_ms;
        }
        if other.theme.is_some() {
            self.theme = other.theme;
        }
        if other.content.is_some() {
            self.content = other.content;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
        self
    }
}
