//! ANSI-styled renderer implementation

use colored::Color;

use super::record::LogRecord;
use super::traits::LineRenderer;

const RESET: &str = "\x1b[0m";

/// Same layout as the file line, with each field styled
///
/// Timestamp grey, label in its severity colour, `func ` magenta, function
/// bright cyan, module and file green, line bright yellow, message bold.
///
/// Escapes are always emitted; whether the terminal wants them is decided
/// once, when the renderer is picked (see `renderer_for`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StyledRenderer;

impl StyledRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Bold text in `fg` on an optional `bg`
fn paint(text: &str, fg: Color, bg: Option<Color>) -> String {
    match bg {
        Some(bg) => format!("\x1b[1;{};{}m{}{}", fg.to_fg_str(), bg.to_bg_str(), text, RESET),
        None => format!("\x1b[1;{}m{}{}", fg.to_fg_str(), text, RESET),
    }
}

fn bold(text: &str) -> String {
    format!("\x1b[1m{}{}", text, RESET)
}

impl LineRenderer for StyledRenderer {
    fn render(&self, record: &LogRecord, spacing: &str) -> String {
        let caller = &record.caller;
        let (label_fg, label_bg) = record.severity.colors();
        format!(
            "[{}] [{}]{}[{}{} {}/{}:{}] : {}\n",
            paint(&record.timestamp, Color::BrightBlack, None),
            paint(record.severity.label(), label_fg, label_bg),
            spacing,
            paint("func ", Color::Magenta, None),
            paint(&caller.function, Color::BrightCyan, None),
            paint(&caller.module, Color::Green, None),
            paint(&caller.file, Color::Green, None),
            paint(&caller.line, Color::BrightYellow, None),
            bold(&record.message),
        )
    }
}
