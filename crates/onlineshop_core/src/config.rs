//! Runtime configuration sourced from the environment.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-blank values are errors.
//! - `log_dir = None` means logging goes to stderr.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "ONLINESHOP_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "ONLINESHOP_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "ONLINESHOP_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "onlineshop.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is present but empty after trimming.
    Blank(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank(key) => write!(f, "environment variable {key} must not be blank"),
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by every entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ShopConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(key)),
                Some(value) => Ok(Some(value.trim().to_string())),
                None => Ok(None),
            }
        };

        Ok(Self {
            db_path: read(DB_PATH_ENV)?
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_level: read(LOG_LEVEL_ENV)?.unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_ENV)?,
        })
    }
}
