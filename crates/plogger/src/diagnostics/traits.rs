//! Diagnostics trait definition

use std::sync::Arc;

use crate::error::LogError;

/// Receives every error the logger swallows
///
/// Logging is best-effort: directory, open and write failures are reported
/// here and never surface to the code that called the logger.
pub trait Diagnostics: Send + Sync {
    /// Report a failure
    fn report(&self, error: &LogError);
}

/// Type alias for an Arc-wrapped diagnostics channel
pub type SharedDiagnostics = Arc<dyn Diagnostics>;
