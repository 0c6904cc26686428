//! Environment-driven configuration

use std::env;

use serde::{Deserialize, Serialize};

/// Disables console output for every logger when set to a non-empty value
pub const DISABLE_CONSOLE_VAR: &str = "PLOGGER_DISABLE_CONSOLE_LOGGING_GLOBAL";

/// Disables file output for every logger when set to a non-empty value
pub const DISABLE_FILE_VAR: &str = "PLOGGER_DISABLE_FILE_LOGGING_GLOBAL";

/// Global switches as read from the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvConfig {
    pub disable_console: bool,
    pub disable_file: bool,
}

impl EnvConfig {
    /// Read the switches from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present,
    /// without overriding variables that are already set.
    pub fn from_env() -> Self {
        if let Some(err) = dotenv_failure(dotenvy::dotenv()) {
            eprintln!("[plogger] failed to load .env: {}", err);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the switches through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |key: &str| lookup(key).map_or(false, |v| !v.is_empty());
        Self {
            disable_console: is_set(DISABLE_CONSOLE_VAR),
            disable_file: is_set(DISABLE_FILE_VAR),
        }
    }
}

/// The error worth reporting from a `.env` load; a missing file is not one
fn dotenv_failure<T>(result: dotenvy::Result<T>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(err) if err.not_found() => None,
        Err(err) => Some(err),
    }
}
