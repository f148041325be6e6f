//! Configuration loader
//!
//! Reads the optional YAML file, applies environment overrides, and
//! resolves duration strings into a [`GameConfig`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::GameConfig;
use crate::error::ConfigError;
use crate::persist::validate_key;

/// Overrides the link auto-advance delay.
pub const ENV_LINK_DELAY: &str = "GHOSTWAKE_LINK_DELAY";
/// Overrides the state directory.
pub const ENV_STATE_DIR: &str = "GHOSTWAKE_STATE_DIR";
/// Overrides the storage key.
pub const ENV_STORAGE_KEY: &str = "GHOSTWAKE_STORAGE_KEY";

/// Configuration as written in YAML, before duration parsing.
///
/// Durations use `humantime` syntax (`1200ms`, `2s`, `1m 30s`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Link auto-advance delay
    pub link_advance_delay: Option<String>,
    /// Reveal flourish
    pub reveal_flourish: Option<String>,
    /// Reveal flourish under reduced motion
    pub reduced_motion_flourish: Option<String>,
    /// Storage key
    pub storage_key: Option<String>,
    /// State directory
    pub state_dir: Option<PathBuf>,
}

/// Builds a [`GameConfig`] from defaults, a YAML file and the environment.
///
/// The environment is read through an injectable lookup so tests do not
/// touch process-global state.
pub struct ConfigLoader<F> {
    env: F,
}

impl ConfigLoader<fn(&str) -> Option<String>> {
    /// Creates a loader reading the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            env: |name| std::env::var(name).ok(),
        }
    }
}

impl<F> ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Creates a loader using `env` to look up environment variables.
    pub const fn with_env(env: F) -> Self {
        Self { env }
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if a
    /// value is invalid.
    pub fn load(&self, path: Option<&Path>) -> Result<GameConfig, ConfigError> {
        let raw = match path {
            Some(path) => Self::read_file(path)?,
            None => RawConfig::default(),
        };
        self.resolve(raw)
    }

    fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration file");
        parse_yaml(path, &text)
    }

    /// Applies environment overrides to `raw` and resolves it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unparseable durations or
    /// invalid storage keys.
    pub fn resolve(&self, mut raw: RawConfig) -> Result<GameConfig, ConfigError> {
        if let Some(delay) = (self.env)(ENV_LINK_DELAY) {
            raw.link_advance_delay = Some(delay);
        }
        if let Some(dir) = (self.env)(ENV_STATE_DIR) {
            raw.state_dir = Some(PathBuf::from(dir));
        }
        if let Some(key) = (self.env)(ENV_STORAGE_KEY) {
            raw.storage_key = Some(key);
        }

        let mut config = GameConfig::default();
        if let Some(value) = raw.link_advance_delay {
            config.link_advance_delay = parse_duration("link_advance_delay", &value)?;
        }
        if let Some(value) = raw.reveal_flourish {
            config.reveal_flourish = parse_duration("reveal_flourish", &value)?;
        }
        if let Some(value) = raw.reduced_motion_flourish {
            config.reduced_motion_flourish = parse_duration("reduced_motion_flourish", &value)?;
        }
        if let Some(key) = raw.storage_key {
            validate_key(&key).map_err(|_| ConfigError::InvalidValue {
                field: "storage_key".to_string(),
                value: key.clone(),
                expected: "a non-empty key of letters, digits, '.', '_' or '-'".to_string(),
            })?;
            config.storage_key = key;
        }
        config.state_dir = raw.state_dir;
        Ok(config)
    }
}

/// Parses YAML text into a [`RawConfig`].
///
/// # Errors
///
/// Returns `ConfigError::ParseError` on malformed YAML or unknown keys.
pub fn parse_yaml(path: &Path, text: &str) -> Result<RawConfig, ConfigError> {
    if text.trim().is_empty() {
        return Ok(RawConfig::default());
    }
    serde_yaml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parses a `humantime` duration for the named field.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `value` is not a duration.
pub fn parse_duration(field: &str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value.trim()).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: format!("a duration such as 1200ms or 2s ({e})"),
    })
}
