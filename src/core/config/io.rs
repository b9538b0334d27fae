use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::core::config::data::Config;
use crate::core::toml_file::{read_toml, write_toml_atomic};

impl Config {
    /// Load from `path`, or from the platform config location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Config, Box<dyn StdError>> {
        match path.map(Path::to_path_buf).or_else(Self::get_config_path) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    /// A missing file is not an error; it means every key is at its default.
    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn StdError>> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        Ok(read_toml("config", config_path)?)
    }

    pub(crate) fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn StdError>> {
        write_toml_atomic(self, config_path)
    }

    /// Write a fully spelled-out default config unless one already exists.
    /// Returns whether a file was written.
    pub fn init_at(config_path: &Path) -> Result<bool, Box<dyn StdError>> {
        if config_path.exists() {
            return Ok(false);
        }
        Config::with_defaults().save_to_path(config_path)?;
        Ok(true)
    }

    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "folio", "folio")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }
}
