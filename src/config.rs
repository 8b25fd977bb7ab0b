// Settings for recipe-book
//
// Read from a JSON file. Every field is optional; anything missing falls
// back to the defaults below. No file at all is fine too.

use crate::core::ClearPolicy;
use crate::error::{RecipeError, Result};
use crate::store::{IdSource, SequentialIds, TimestampIds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var that points at a config file, overriding the default location
pub const CONFIG_ENV: &str = "RECIPE_BOOK_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Timestamp,
    Sequential,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdSource> {
        match self {
            IdStrategy::Timestamp => Box::new(TimestampIds::new()),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clear_policy: ClearPolicy,
    pub id_source: IdStrategy,
    pub prompt: String,
    pub search_limit: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_policy: ClearPolicy::ClearAlways,
            id_source: IdStrategy::Timestamp,
            prompt: "recipe> ".to_string(),
            search_limit: 20,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load settings from a file
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed settings, or defaults if the file doesn't exist
    /// * `Err(RecipeError::Config)` - File exists but isn't valid
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = serde_json::from_str(&text)
            .map_err(|e| RecipeError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        Ok(config)
    }

    /// Load from `$RECIPE_BOOK_CONFIG`, or the per-user config dir
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("recipe-book").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.search_limit == 0 {
            return Err(RecipeError::Config(
                "search_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
