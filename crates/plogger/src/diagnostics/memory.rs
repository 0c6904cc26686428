//! In-memory diagnostics

use parking_lot::Mutex;

use super::traits::Diagnostics;
use crate::error::LogError;

/// Keeps every reported failure as its rendered message
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Messages reported so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, error: &LogError) {
        self.messages.lock().push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_diagnostics() {
        let diagnostics = MemoryDiagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.report(&LogError::sink_unavailable("info.log"));
        diagnostics.report(&LogError::sink_unavailable("all.log"));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.messages()[1], "all.log is not open, line dropped");

        diagnostics.clear();
        assert!(diagnostics.is_empty());
    }
}
