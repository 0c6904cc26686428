//! Line formatting
//!
//! Files always receive the plain line. The console goes through a
//! `LineRenderer` picked once from the terminal's colour support:
//! - `PlainRenderer`: the file line as-is
//! - `StyledRenderer`: same layout with ANSI styling

mod record;
mod traits;
mod plain;
mod styled;

pub use record::{LogRecord, format_line, TIMESTAMP_FORMAT};
pub use traits::{LineRenderer, BoxedRenderer, renderer_for, terminal_supports_color};
pub use plain::PlainRenderer;
pub use styled::StyledRenderer;
