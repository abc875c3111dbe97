//! Config loading entry point.

use crate::config::sources::{global_file, workspace_file};
use crate::config::RanklyConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<RanklyConfig, ConfigError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder
            .add_source(
                Environment::with_prefix("RANKLY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<RanklyConfig>()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load exactly one file, ignoring every other source.
    pub fn load_from_file(path: &Path) -> Result<RanklyConfig, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<RanklyConfig>()
    }

    /// Global config file location, if one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
