//! Environment-driven runtime settings.
//!
//! # Responsibility
//! - Resolve log level and log directory for executables embedding core.
//!
//! # Invariants
//! - Missing or blank variables fall back to defaults.
//! - File logging is only enabled when a directory is configured.

use crate::logging::{default_log_level, init_logging, parse_level};
use std::path::PathBuf;

/// Variable holding the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "TUTORING_LOG_LEVEL";
/// Variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "TUTORING_LOG_DIR";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSettings {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// - The level variable is set to an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = match non_blank(LOG_LEVEL_ENV) {
            Some(value) => parse_level(&value)?,
            None => default_log_level(),
        };
        let log_dir = non_blank(LOG_DIR_ENV).map(|value| PathBuf::from(value.trim()));

        Ok(Self { log_level, log_dir })
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: {}", dir.display()))?;
        init_logging(self.log_level, dir)?;
        Ok(true)
    }
}
