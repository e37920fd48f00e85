//! Board configuration using Figment
//!
//! Sources are merged in precedence order, later sources overriding earlier
//! ones:
//! 1. Default values
//! 2. An optional configuration file (TOML, YAML or JSON, by extension)
//! 3. Environment variables with the `TASKBOARD_` prefix
//!
//! ```toml
//! id = "team-board"
//! title = "Team Board"
//! seed = false
//! activity_capacity = 64
//! ```

use crate::defaults::{DEFAULT_BOARD_ID, DEFAULT_BOARD_TITLE};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Default number of activity log entries kept in memory
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 256;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be parsed or a value has the wrong type
    #[error("failed to load board configuration: {0}")]
    Extract(Box<figment::Error>),

    /// The file extension does not map to a supported format
    #[error("unsupported configuration format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Extract(Box::new(error))
    }
}

/// Settings the bootstrap layer uses to build a `BoardStore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board id
    pub id: String,
    /// Board title shown above the lists
    pub title: String,
    /// Seed the default lists and sample tasks
    pub seed: bool,
    /// Maximum number of activity log entries retained
    pub activity_capacity: usize,
    /// Check ordering invariants after every mutation
    pub verify_invariants: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_BOARD_ID.to_string(),
            title: DEFAULT_BOARD_TITLE.to_string(),
            seed: true,
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
            verify_invariants: true,
        }
    }
}

impl BoardConfig {
    /// Load from defaults and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None)?)
    }

    /// Load from defaults, the given file, and environment variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::extract(Self::figment(Some(path.as_ref()))?)
    }

    /// Build the layered figment without extracting it
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            debug!("Loading board config file: {}", path.display());
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => {
                    return Err(ConfigError::UnsupportedFormat {
                        path: path.to_path_buf(),
                    })
                }
            };
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        debug!(?config, "Loaded board configuration");
        Ok(config)
    }
}
