//! plogger
//!
//! Leveled logger that writes timestamped, caller-annotated lines to the
//! console and to per-severity files under `<root>/log/`:
//!
//! ```text
//! log/all.log       every line, label padded so the caller column aligns
//! log/critical.log  ... one file per severity
//! ```
//!
//! Each line reads
//! `[2024-03-01T12:30:05] [WARNING] [func Worker.run() app::jobs/jobs.rs:57] : message`.
//!
//! Output is gated twice: per logger (`set_log_to_console`, `set_log_to_file`)
//! and process-wide (`set_global_log_to_console`, `set_global_log_to_file`,
//! seeded from `PLOGGER_DISABLE_CONSOLE_LOGGING_GLOBAL` and
//! `PLOGGER_DISABLE_FILE_LOGGING_GLOBAL`).
//!
//! ```rust,no_run
//! use plogger::{log_info, Logger};
//!
//! let logger = Logger::new();
//! logger.success("connected");
//! log_info!(logger, "{} jobs queued", 3);
//! ```

#[macro_use]
mod macros;

pub mod caller;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logger;
pub mod render;
pub mod severity;
mod sink;

pub use caller::{CallerInfo, CallerResolver, BacktraceResolver, LocationResolver};

pub use config::{
    EnvConfig, GlobalToggles,
    global_log_to_console, global_log_to_file,
    set_global_log_to_console, set_global_log_to_file,
};

pub use diagnostics::{Diagnostics, SharedDiagnostics, StderrDiagnostics, NoOpDiagnostics, MemoryDiagnostics};

pub use error::{LogError, LogResult};

pub use logger::{Logger, LoggerBuilder, LOG_DIR_NAME};

pub use render::{LineRenderer, LogRecord, PlainRenderer, StyledRenderer, terminal_supports_color};

pub use severity::{Severity, AGGREGATE_FILE_NAME, MAX_LABEL_LEN};
