//! User configuration
//!
//! Optional TOML file. Lookup order: explicit path, `PARLIAMENT_CONFIG`,
//! `<config_dir>/parliament/config.toml`. A missing file means defaults.
//!
//! ```toml
//! default_profile = "analytical"
//! json = false
//! export_dir = "/tmp/pog-runs"
//! ```

use crate::error::{Error, Result};
use crate::profiles::Profile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PARLIAMENT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Profile used when `--profile` is not given (unknown names mean balanced)
    pub default_profile: String,
    /// Emit JSON instead of text by default
    pub json: bool,
    /// Where `pog demo` writes its exports
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Profile::Balanced.name().to_string(),
            json: false,
            export_dir: default_data_dir(),
        }
    }
}

/// Platform data dir (XDG on Linux, Application Support on macOS)
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parliament")
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("parliament").join("config.toml"))
}

impl Config {
    /// Parse config text; `path` is only used for error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Resolve and load. An explicitly named file must exist; the default
    /// location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = named {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::from_file(&path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn profile(&self) -> Profile {
        Profile::resolve(&self.default_profile)
    }
}
