//! Stderr diagnostics implementation

use super::traits::Diagnostics;
use crate::error::LogError;

/// Prints failures to stderr
#[derive(Debug, Clone)]
pub struct StderrDiagnostics {
    prefix: String,
}

impl Default for StderrDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl StderrDiagnostics {
    /// Create a stderr channel with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[plogger]".to_string(),
        }
    }

    /// Create a stderr channel with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Diagnostics for StderrDiagnostics {
    fn report(&self, error: &LogError) {
        eprintln!("{} {}", self.prefix, error);
    }
}
