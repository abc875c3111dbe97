//! CLI route: single route table and run context. Dispatches to sessions, stores and presentation.

use crate::cli::parse::{Commands, SessionCommands};
use crate::cli::presentation::{
    format_outcome, format_session_list, format_session_show, format_state_summary,
};
use crate::config::{ConfigLoader, RanklyConfig};
use crate::error::{ApiError, StorageError};
use crate::session::{Arbiter, RankingSession, SessionOutcome, TerminalArbiter};
use crate::snapshot::restore;
use crate::song::{load_playlist, scan_directory, Song};
use crate::sort::Engine;
use crate::store::{JsonFileStore, SaveStore, SledSessionStore};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and effective config.
pub struct RunContext {
    workspace_root: PathBuf,
    config: RanklyConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::from_config(workspace_root, config)
    }

    /// Build from an already loaded configuration.
    pub fn from_config(workspace_root: PathBuf, config: RanklyConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(joined.join("; "))
        })?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &RanklyConfig {
        &self.config
    }

    /// Execute a command with the interactive terminal prompt.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let mut arbiter = TerminalArbiter::new();
        self.execute_with(command, &mut arbiter)
    }

    /// Execute a command, taking comparison answers from `arbiter`.
    pub fn execute_with(
        &self,
        command: &Commands,
        arbiter: &mut dyn Arbiter,
    ) -> Result<String, ApiError> {
        match command {
            Commands::Rank {
                source,
                algorithm,
                save,
                name,
            } => self.handle_rank(
                source,
                *algorithm,
                save.as_deref(),
                name.as_deref(),
                arbiter,
            ),
            Commands::Resume { file, name } => {
                self.handle_resume(file.as_deref(), name.as_deref(), arbiter)
            }
            Commands::Inspect { file, format } => {
                let state = JsonFileStore::new(file.clone()).load()?;
                format_state_summary(&state, format)
                    .map_err(|e| StorageError::from(e).into())
            }
            Commands::Sessions { command } => self.handle_sessions(command),
            Commands::Config => self
                .config
                .to_toml()
                .map_err(|e| ApiError::ConfigError(e.to_string())),
        }
    }

    fn handle_rank(
        &self,
        source: &Path,
        algorithm: Option<crate::sort::Algorithm>,
        save: Option<&Path>,
        name: Option<&str>,
        arbiter: &mut dyn Arbiter,
    ) -> Result<String, ApiError> {
        let songs = load_songs(source)?;
        let algorithm = algorithm.unwrap_or(self.config.session.default_algorithm);
        info!(source = %source.display(), songs = songs.len(), %algorithm, "Starting ranking");
        let engine = Engine::new(algorithm, songs)?;

        let (label, store): (String, Box<dyn SaveStore>) = match name {
            Some(name) => (name.to_string(), Box::new(self.open_sessions()?)),
            None => {
                let path = match save {
                    Some(path) => path.to_path_buf(),
                    None => self.default_save_file(),
                };
                (file_label(&path), Box::new(JsonFileStore::new(path)))
            }
        };

        let mut session = RankingSession::new(label, engine, store);
        let outcome = session.run(arbiter)?;
        Ok(format_outcome(&outcome, self.use_color()))
    }

    fn handle_resume(
        &self,
        file: Option<&Path>,
        name: Option<&str>,
        arbiter: &mut dyn Arbiter,
    ) -> Result<String, ApiError> {
        let outcome = match (name, file) {
            (Some(name), _) => {
                let sessions = self.open_sessions()?;
                let record = sessions.require(name)?;
                debug!(name = %name, answered = record.comparisons, "Resuming named session");
                let engine = restore(record.state)?;
                let mut session = RankingSession::new(name, engine, Box::new(sessions.clone()))
                    .with_prior_answers(record.comparisons);
                let outcome = session.run(arbiter)?;
                if matches!(outcome, SessionOutcome::Ranked(_)) {
                    sessions.remove(name)?;
                    sessions.flush()?;
                }
                outcome
            }
            (None, Some(path)) => {
                let store = JsonFileStore::new(path);
                let engine = restore(store.load()?)?;
                debug!(path = %path.display(), "Resuming from save file");
                let mut session = RankingSession::new(file_label(path), engine, Box::new(store));
                session.run(arbiter)?
            }
            (None, None) => {
                return Err(ApiError::ConfigError(
                    "Resume needs a save file or a session name".to_string(),
                ))
            }
        };
        Ok(format_outcome(&outcome, self.use_color()))
    }

    fn handle_sessions(&self, command: &SessionCommands) -> Result<String, ApiError> {
        let sessions = self.open_sessions()?;
        match command {
            SessionCommands::List { format } => {
                let records = sessions.list()?;
                let text = format_session_list(&records, format)
                    .map_err(StorageError::from)?;
                Ok(text)
            }
            SessionCommands::Show { name, format } => {
                let record = sessions.require(name)?;
                let text = format_session_show(&record, format)
                    .map_err(StorageError::from)?;
                Ok(text)
            }
            SessionCommands::Remove { name } => {
                if sessions.remove(name)? {
                    sessions.flush()?;
                    Ok(format!("Removed session '{}'", name))
                } else {
                    Err(StorageError::SaveNotFound(name.clone()).into())
                }
            }
        }
    }

    fn open_sessions(&self) -> Result<SledSessionStore, ApiError> {
        let path = self.config.storage.resolve_store_path(&self.workspace_root);
        std::fs::create_dir_all(&path).map_err(StorageError::IoError)?;
        debug!(path = %path.display(), "Opening session store");
        Ok(SledSessionStore::new(&path)?)
    }

    fn default_save_file(&self) -> PathBuf {
        let path = &self.config.session.save_file;
        if path.is_absolute() {
            path.clone()
        } else {
            self.workspace_root.join(path)
        }
    }

    fn use_color(&self) -> bool {
        self.config.logging.color && std::io::stdout().is_terminal()
    }
}

fn load_songs(source: &Path) -> Result<Vec<Song>, ApiError> {
    if source.is_dir() {
        scan_directory(source)
    } else {
        load_playlist(source)
    }
}

fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rank".to_string())
}
