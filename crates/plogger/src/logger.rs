//! The leveled logger
//!
//! Each call writes one line to the console and to two files: the severity's
//! own file and `all.log`. The severity file gets a single space after the
//! label; the console and `all.log` get padding that aligns the caller block.
//!
//! ```rust,no_run
//! use plogger::Logger;
//!
//! let logger = Logger::with_root("/var/lib/myapp");
//! logger.info("service started");
//! logger.warningf(format_args!("queue depth {}", 42));
//! logger.set_log_to_console(false);
//! ```

use std::fmt;
use std::fs;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::caller::{BacktraceResolver, BoxedResolver, CallerInfo, CallerResolver};
use crate::config::{global_toggles, GlobalToggles};
use crate::diagnostics::{SharedDiagnostics, StderrDiagnostics};
use crate::error::{LogError, LogResult};
use crate::render::{format_line, renderer_for, terminal_supports_color, BoxedRenderer, LineRenderer, LogRecord};
use crate::severity::{Severity, AGGREGATE_FILE_NAME};
use crate::sink::{ConsoleSink, FileSink};

/// Directory created under the root to hold the log files
pub const LOG_DIR_NAME: &str = "log";

/// Symbol prefix of the `Logger` frames that sit between a call site and
/// the caller resolver
pub(crate) const LOGGER_FRAME_PREFIX: &str = concat!(module_path!(), "::Logger::");

/// Writes caller-annotated lines to the console and per-severity files
///
/// Logging never fails from the caller's point of view: every error is sent
/// to the logger's [`Diagnostics`](crate::diagnostics::Diagnostics) channel.
/// `Logger` is `Send + Sync`; share it behind an `Arc` across threads.
pub struct Logger {
    log_dir: PathBuf,
    aggregate: FileSink,
    files: Vec<FileSink>,
    console: ConsoleSink,
    renderer: BoxedRenderer,
    resolver: BoxedResolver,
    diagnostics: SharedDiagnostics,
    toggles: Arc<GlobalToggles>,
    log_to_console: AtomicBool,
    log_to_file: AtomicBool,
}

impl Logger {
    /// Logger rooted at the current directory (`./log/`)
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Logger writing to `<root>/log/`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::builder().root(root).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Directory holding the log files
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of a severity's file, or of `all.log` for `None`
    pub fn file_path(&self, severity: Option<Severity>) -> &Path {
        self.sink(severity).path()
    }

    /// Whether a severity's file (or `all.log` for `None`) opened successfully
    pub fn is_file_open(&self, severity: Option<Severity>) -> bool {
        self.sink(severity).is_open()
    }

    fn sink(&self, severity: Option<Severity>) -> &FileSink {
        match severity {
            Some(severity) => &self.files[severity.index()],
            None => &self.aggregate,
        }
    }

    // Toggles

    pub fn log_to_console(&self) -> bool {
        self.log_to_console.load(Ordering::Relaxed)
    }

    /// Enable or disable console output for this logger
    pub fn set_log_to_console(&self, enabled: bool) {
        self.log_to_console.store(enabled, Ordering::Relaxed);
    }

    pub fn log_to_file(&self) -> bool {
        self.log_to_file.load(Ordering::Relaxed)
    }

    /// Enable or disable file output for this logger
    pub fn set_log_to_file(&self, enabled: bool) {
        self.log_to_file.store(enabled, Ordering::Relaxed);
    }

    /// The global gates this logger answers to
    pub fn global_toggles(&self) -> &GlobalToggles {
        &self.toggles
    }

    // Severity methods. Kept out of line so their frames bound the call
    // site in backtraces.

    #[track_caller]
    #[inline(never)]
    pub fn critical(&self, message: &str) {
        self.log_line(Severity::Critical, message, Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn error(&self, message: &str) {
        self.log_line(Severity::Error, message, Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn warning(&self, message: &str) {
        self.log_line(Severity::Warning, message, Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn success(&self, message: &str) {
        self.log_line(Severity::Success, message, Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn info(&self, message: &str) {
        self.log_line(Severity::Info, message, Location::caller());
    }

    // Formatted variants, `logger.infof(format_args!("n={}", n))`

    #[track_caller]
    #[inline(never)]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.log_line(Severity::Critical, &fmt::format(args), Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_line(Severity::Error, &fmt::format(args), Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log_line(Severity::Warning, &fmt::format(args), Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn successf(&self, args: fmt::Arguments<'_>) {
        self.log_line(Severity::Success, &fmt::format(args), Location::caller());
    }

    #[track_caller]
    #[inline(never)]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_line(Severity::Info, &fmt::format(args), Location::caller());
    }

    /// Log with caller metadata resolved by the caller
    ///
    /// Entry point of the `log_*!` macros, which fill `caller` at compile time.
    pub fn log_with_caller(&self, severity: Severity, caller: CallerInfo, args: fmt::Arguments<'_>) {
        self.write_record(&LogRecord::now(severity, caller, fmt::format(args)));
    }

    #[inline(never)]
    fn log_line(&self, severity: Severity, message: &str, location: &'static Location<'static>) {
        let caller = self.resolver.resolve(location);
        self.write_record(&LogRecord::now(severity, caller, message));
    }

    fn write_record(&self, record: &LogRecord) {
        let aligned = record.severity.spacing();

        if self.toggles.log_to_console() && self.log_to_console() {
            let line = self.renderer.render(record, &aligned);
            self.report(self.console.write_line(&line));
        }

        if self.toggles.log_to_file() && self.log_to_file() {
            let plain = format_line(record, " ");
            let spaced = format_line(record, &aligned);
            self.report(self.files[record.severity.index()].write_line(&plain));
            self.report(self.aggregate.write_line(&spaced));
        }
    }

    fn report(&self, result: LogResult<()>) {
        if let Err(err) = result {
            self.diagnostics.report(&err);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_dir", &self.log_dir)
            .field("log_to_console", &self.log_to_console())
            .field("log_to_file", &self.log_to_file())
            .field("toggles", &self.toggles)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]
///
/// Every part has a default: current directory as root, styled output when
/// the terminal supports colour, backtrace caller resolution, stderr
/// diagnostics, the process-wide toggles and stdout.
#[derive(Default)]
pub struct LoggerBuilder {
    root: Option<PathBuf>,
    renderer: Option<BoxedRenderer>,
    resolver: Option<BoxedResolver>,
    diagnostics: Option<SharedDiagnostics>,
    toggles: Option<Arc<GlobalToggles>>,
    console: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Root under which `log/` is created
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Console renderer
    pub fn renderer(mut self, renderer: impl LineRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Force styled (`true`) or plain (`false`) console output
    pub fn color(mut self, enabled: bool) -> Self {
        self.renderer = Some(renderer_for(enabled));
        self
    }

    pub fn resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Where the logger's own failures are reported
    pub fn diagnostics(mut self, diagnostics: SharedDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Use these gates instead of the process-wide ones
    pub fn toggles(mut self, toggles: Arc<GlobalToggles>) -> Self {
        self.toggles = Some(toggles);
        self
    }

    /// Write console output here instead of stdout
    pub fn console(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Box::new(writer));
        self
    }

    /// Create the log directory and open the six files
    ///
    /// Failures are reported to the diagnostics channel; the logger is
    /// returned regardless, with any failed file acting as a dead sink.
    pub fn build(self) -> Logger {
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Arc::new(StderrDiagnostics::new()));
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let log_dir = root.join(LOG_DIR_NAME);

        if let Err(source) = fs::create_dir_all(&log_dir) {
            diagnostics.report(&LogError::CreateDir {
                path: log_dir.clone(),
                source,
            });
        }

        let aggregate = FileSink::open(&log_dir, AGGREGATE_FILE_NAME, diagnostics.as_ref());
        let files = Severity::ALL
            .iter()
            .map(|severity| FileSink::open(&log_dir, severity.file_name(), diagnostics.as_ref()))
            .collect();

        Logger {
            log_dir,
            aggregate,
            files,
            console: self.console.map(ConsoleSink::new).unwrap_or_else(ConsoleSink::stdout),
            renderer: self
                .renderer
                .unwrap_or_else(|| renderer_for(terminal_supports_color())),
            resolver: self
                .resolver
                .unwrap_or_else(|| Box::new(BacktraceResolver::new())),
            diagnostics,
            toggles: self.toggles.unwrap_or_else(global_toggles),
            log_to_console: AtomicBool::new(true),
            log_to_file: AtomicBool::new(true),
        }
    }
}
