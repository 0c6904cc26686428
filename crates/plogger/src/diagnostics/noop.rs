//! No-op diagnostics implementation

use super::traits::Diagnostics;
use crate::error::LogError;

/// Diagnostics channel that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl NoOpDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for NoOpDiagnostics {
    fn report(&self, _error: &LogError) {}
}
