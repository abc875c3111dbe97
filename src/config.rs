//! Configuration System
//!
//! Hierarchical configuration: defaults, then the user's global file, then
//! workspace files, then `RANKLY__SECTION__KEY` environment variables.

use crate::logging::LoggingConfig;
use crate::sort::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RanklyConfig {
    /// Ranking session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Where named saves live
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Algorithm used by `rank` when none is given
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Save file used when neither a file nor a session name is given
    #[serde(default = "default_save_file")]
    pub save_file: PathBuf,
}

fn default_save_file() -> PathBuf {
    PathBuf::from("rank.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::default(),
            save_file: default_save_file(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Session database directory; relative paths are taken from the workspace root
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the session database directory.
    pub fn resolve_store_path(&self, workspace_root: &Path) -> PathBuf {
        match &self.store_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => workspace_root.join(path),
            None => directories::ProjectDirs::from("", "", "rankly")
                .map(|dirs| dirs.data_dir().join("sessions"))
                .unwrap_or_else(|| workspace_root.join(".rankly").join("sessions")),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Session(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Session(msg) => write!(f, "Session: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl RanklyConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.session.save_file.as_os_str().is_empty() {
            errors.push(ValidationError::Session(
                "Save file cannot be empty".to_string(),
            ));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
