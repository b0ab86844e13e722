use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::utils::io;
use crate::Result;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "chapterfix.json";

/// Settings shared by every relink operation.
///
/// Passed explicitly into each operation; nothing reads a global base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelinkConfig {
    /// Content directory scanned and mutated.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Index file, relative to `base_dir`.
    #[serde(default = "default_summary_file")]
    pub summary_file: PathBuf,

    /// Rename each pair once instead of once per plain file.
    #[serde(default)]
    pub dedupe_renames: bool,
}

impl Default for RelinkConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            summary_file: default_summary_file(),
            dedupe_renames: false,
        }
    }
}

impl RelinkConfig {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_summary_file(mut self, summary_file: impl Into<PathBuf>) -> Self {
        self.summary_file = summary_file.into();
        self
    }

    pub fn with_dedupe_renames(mut self, dedupe: bool) -> Self {
        self.dedupe_renames = dedupe;
        self
    }

    /// Full path of the index file.
    pub fn summary_path(&self) -> PathBuf {
        self.base_dir.join(&self.summary_file)
    }

    /// Expand `~` and `$VAR` in `base_dir` and reject empty paths.
    pub fn resolve(mut self) -> Result<Self> {
        let raw = self.base_dir.to_string_lossy().to_string();
        if raw.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "base_dir",
                Some(raw),
                "base directory must not be empty",
            ));
        }

        let expanded = shellexpand::full(&raw).map_err(|e| {
            Error::config_invalid_value("base_dir", Some(raw.clone()), e.to_string())
        })?;
        self.base_dir = PathBuf::from(expanded.into_owned());

        if self.summary_file.as_os_str().is_empty() {
            return Err(Error::config_invalid_value(
                "summary_file",
                None,
                "summary file must not be empty",
            ));
        }

        Ok(self)
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_summary_file() -> PathBuf {
    PathBuf::from("SUMMARY.md")
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load config from `path`, or from `chapterfix.json` in the working directory.
///
/// A missing default file yields built-in defaults. An explicitly named file
/// must exist, and invalid JSON is always an error.
pub fn load(path: Option<&Path>) -> Result<RelinkConfig> {
    match path {
        Some(path) => load_from_file(path),
        None => {
            let path = Path::new(CONFIG_FILE);
            if path.exists() {
                load_from_file(path)
            } else {
                Ok(RelinkConfig::default())
            }
        }
    }
}

fn load_from_file(path: &Path) -> Result<RelinkConfig> {
    let content = io::read_file(path)?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> RelinkConfig {
    RelinkConfig::default()
}
