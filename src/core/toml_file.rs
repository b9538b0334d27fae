//! TOML documents on disk. Config and content files share one read path,
//! one error shape and one atomic write.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

#[derive(Debug)]
pub enum Fault {
    Read(io::Error),
    Parse(toml::de::Error),
}

/// A document that could not be read or parsed, with the path it came from.
#[derive(Debug)]
pub struct TomlFileError {
    /// Which document failed, as shown to the user ("config", "content").
    pub document: &'static str,
    pub path: PathBuf,
    pub fault: Fault,
}

impl TomlFileError {
    fn new(document: &'static str, path: &Path, fault: Fault) -> Self {
        Self {
            document,
            path: path.to_path_buf(),
            fault,
        }
    }
}

impl fmt::Display for TomlFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, cause): (&str, &dyn fmt::Display) = match &self.fault {
            Fault::Read(err) => ("read", err),
            Fault::Parse(err) => ("parse", err),
        };
        write!(
            f,
            "Failed to {verb} {} at {}: {cause}",
            self.document,
            path_display(&self.path)
        )
    }
}

impl StdError for TomlFileError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.fault {
            Fault::Read(err) => Some(err),
            Fault::Parse(err) => Some(err),
        }
    }
}

pub fn read_toml<T: DeserializeOwned>(
    document: &'static str,
    path: &Path,
) -> Result<T, TomlFileError> {
    let contents = fs::read_to_string(path)
        .map_err(|err| TomlFileError::new(document, path, Fault::Read(err)))?;
    parse_toml(document, &contents, path)
}

/// Parse text already in memory; `path` only labels errors.
pub fn parse_toml<T: DeserializeOwned>(
    document: &'static str,
    contents: &str,
    path: &Path,
) -> Result<T, TomlFileError> {
    toml::from_str(contents).map_err(|err| TomlFileError::new(document, path, Fault::Parse(err)))
}

/// Serialize `value` and replace `path` in one rename, creating parent
/// directories as needed.
pub fn write_toml_atomic<T: Serialize>(value: &T, path: &Path) -> Result<(), Box<dyn StdError>> {
    let contents = toml::to_string_pretty(value)?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Staged next to the target so the rename never crosses filesystems.
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Path for messages, with the home directory shortened to `~` on Unix.
pub fn path_display(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let under_home = BaseDirs::new().and_then(|dirs| {
        path.strip_prefix(dirs.home_dir())
            .ok()
            .map(Path::to_path_buf)
    });
    match under_home {
        Some(rest) if cfg!(unix) => format!("~/{}", rest.display()),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        name: String,
        count: u32,
    }

    #[test]
    fn write_then_read_through_missing_directories() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("a").join("b").join("doc.toml");
        let doc = Doc {
            name: "x".to_string(),
            count: 3,
        };
        write_toml_atomic(&doc, &path).expect("write");
        let back: Doc = read_toml("doc", &path).expect("read");
        assert_eq!(back, doc);
    }

    #[test]
    fn errors_name_the_document_and_keep_the_cause() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");
        let err = read_toml::<Doc>("config", &missing).unwrap_err();
        assert!(matches!(err.fault, Fault::Read(_)));
        assert!(err.to_string().starts_with("Failed to read config at "));
        assert!(err.to_string().contains("absent.toml"));
        assert!(err.source().is_some());

        let err = parse_toml::<Doc>("content", "name = ", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err.fault, Fault::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse content at c.toml: "));
    }

    #[test]
    fn paths_outside_home_are_shown_as_is() {
        assert_eq!(path_display("/definitely/elsewhere"), "/definitely/elsewhere");
    }
}
