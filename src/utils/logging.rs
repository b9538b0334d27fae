//! Tracing setup.
//!
//! The session owns the terminal, so log output only ever goes to a file.
//! Without a log file no subscriber is installed and events are dropped.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "folio=info";

/// Install the global subscriber writing to `log_file`. `RUST_LOG` overrides
/// the default filter. Returns whether a subscriber was installed.
pub fn init_tracing(log_file: Option<&Path>) -> Result<bool, Box<dyn Error>> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(!init_tracing(None).expect("no-op"));
    }

    // The only test that installs the global subscriber.
    #[test]
    fn log_file_receives_events() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("folio.log");
        assert!(init_tracing(Some(&path)).expect("install"));
        tracing::warn!("written to the log file");
        let written = std::fs::read_to_string(&path).expect("read log");
        assert!(written.contains("written to the log file"));
        assert!(init_tracing(Some(&path)).is_err(), "second install is refused");
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("folio.log");
        assert!(init_tracing(Some(&path)).is_err());
    }
}
