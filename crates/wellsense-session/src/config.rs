//! Session configuration.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use wellsense_core::{Error, Result};

use crate::history::{DEFAULT_HISTORY_CAPACITY, DEFAULT_TIME_LABEL_FORMAT};
use crate::session::AnalysisMode;

/// Environment variable prefix, e.g. `WELLSENSE_HISTORY_CAPACITY=5`
pub const ENV_PREFIX: &str = "WELLSENSE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,

    /// `strftime` pattern for history entry times
    pub time_label_format: String,

    /// Fixed seed for encouragement picks; entropy when unset
    pub encouragement_seed: Option<u64>,

    /// Mode used by `AnalysisSession::start_default`
    pub initial_mode: AnalysisMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            time_label_format: DEFAULT_TIME_LABEL_FORMAT.to_string(),
            encouragement_seed: None,
            initial_mode: AnalysisMode::Mood,
        }
    }
}

impl SessionConfig {
    /// Load configuration from file, overridden by `WELLSENSE_*` variables
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Self::finish(settings)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Self::finish(settings)
    }

    fn finish(settings: config::Config) -> Result<Self> {
        let config: Self = settings
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=DEFAULT_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(Error::Config(format!(
                "history_capacity must be between 1 and {}, got {}",
                DEFAULT_HISTORY_CAPACITY, self.history_capacity
            )));
        }
        if StrftimeItems::new(&self.time_label_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!(
                "invalid time_label_format: {}",
                self.time_label_format
            )));
        }
        Ok(())
    }
}
