//! Line renderer trait and renderer selection

use super::plain::PlainRenderer;
use super::record::LogRecord;
use super::styled::StyledRenderer;

/// Renders a record for the console
pub trait LineRenderer: Send + Sync {
    /// Render `record` with `spacing` between the label and the caller block,
    /// newline included
    fn render(&self, record: &LogRecord, spacing: &str) -> String;
}

/// Type alias for a boxed renderer
pub type BoxedRenderer = Box<dyn LineRenderer>;

/// Whether stdout should get ANSI styling
///
/// Honours `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` along with tty detection.
pub fn terminal_supports_color() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Pick the console renderer for a terminal
pub fn renderer_for(supports_color: bool) -> BoxedRenderer {
    if supports_color {
        Box::new(StyledRenderer::new())
    } else {
        Box::new(PlainRenderer::new())
    }
}
