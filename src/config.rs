//! Configuration
//!
//! Everything is read from `FUELFORGE_*` environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DATABASE_PATH_VAR: &str = "FUELFORGE_DATABASE_PATH";
pub const USER_ID_VAR: &str = "FUELFORGE_USER_ID";
pub const AI_BASE_URL_VAR: &str = "FUELFORGE_AI_BASE_URL";
pub const AI_API_KEY_VAR: &str = "FUELFORGE_AI_API_KEY";
pub const AI_TIMEOUT_VAR: &str = "FUELFORGE_AI_TIMEOUT_SECS";

const DEFAULT_USER_ID: &str = "local";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for the hosted AI functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub user_id: String,
    /// `None` when no AI base URL is configured
    pub ai: Option<AiConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_path = value(DATABASE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let user_id = value(USER_ID_VAR).unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let ai = match value(AI_BASE_URL_VAR) {
            Some(base_url) => {
                let timeout_secs = match value(AI_TIMEOUT_VAR) {
                    Some(raw) => match raw.parse::<u64>() {
                        Ok(secs) if secs > 0 => secs,
                        _ => {
                            return Err(ConfigError::Invalid {
                                var: AI_TIMEOUT_VAR,
                                value: raw,
                            })
                        }
                    },
                    None => DEFAULT_AI_TIMEOUT_SECS,
                };
                Some(AiConfig {
                    base_url,
                    api_key: value(AI_API_KEY_VAR),
                    timeout_secs,
                })
            }
            None => None,
        };

        Ok(Self {
            database_path,
            user_id,
            ai,
        })
    }
}

/// `<project>/data/fuelforge.db`, found relative to the running executable
pub fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push("fuelforge.db");
    path
}
