//! Plain renderer implementation

use super::record::{format_line, LogRecord};
use super::traits::LineRenderer;

/// Renders exactly what goes to the files
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRenderer for PlainRenderer {
    fn render(&self, record: &LogRecord, spacing: &str) -> String {
        format_line(record, spacing)
    }
}
