//! Built-in caller resolvers

use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::Location;

use super::info::CallerInfo;
use super::traits::CallerResolver;
use crate::logger::LOGGER_FRAME_PREFIX;

/// Resolves function and module names by walking a captured backtrace
///
/// The frame is located by matching the call site's file and line rather
/// than by depth, so inlining inside the logger cannot shift it. Without
/// debug info (the default release profile) there are no positions to
/// match, and the caller is taken as the first frame below the logger's own
/// non-inlined entry points. When neither works the function and module fall
/// back to placeholders while file and line stay accurate.
///
/// Capturing a backtrace is slow; use [`LocationResolver`] or the logging
/// macros on hot paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceResolver;

impl BacktraceResolver {
    pub fn new() -> Self {
        Self
    }
}

impl CallerResolver for BacktraceResolver {
    fn resolve(&self, location: &'static Location<'static>) -> CallerInfo {
        let trace = Backtrace::force_capture();
        if trace.status() != BacktraceStatus::Captured {
            return CallerInfo::at(location.file(), location.line());
        }

        let rendered = trace.to_string();
        let symbol = find_symbol(&rendered, location.file(), location.line())
            .or_else(|| find_symbol_after(&rendered, LOGGER_FRAME_PREFIX));
        match symbol {
            Some(symbol) => CallerInfo::from_symbol(location.file(), location.line(), &symbol),
            None => CallerInfo::at(location.file(), location.line()),
        }
    }
}

/// Resolves file and line only
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationResolver;

impl LocationResolver {
    pub fn new() -> Self {
        Self
    }
}

impl CallerResolver for LocationResolver {
    fn resolve(&self, location: &'static Location<'static>) -> CallerInfo {
        CallerInfo::at(location.file(), location.line())
    }
}

/// Find the symbol of the first frame located at `file:line` in a rendered
/// backtrace
///
/// Frames render as `N: symbol` (or a bare `symbol` for inlined frames)
/// followed by an `at path:line:col` line.
fn find_symbol(rendered: &str, file: &str, line: u32) -> Option<String> {
    let file = normalize(file);
    let mut symbol: Option<&str> = None;

    for raw in rendered.lines() {
        let entry = raw.trim();
        if entry.is_empty() {
            continue;
        }

        if let Some(position) = entry.strip_prefix("at ") {
            let mut parts = position.rsplitn(3, ':');
            let _column = parts.next();
            let frame_line = parts.next().and_then(|l| l.parse::<u32>().ok());
            let frame_file = parts.next().map(normalize);

            if let (Some(sym), Some(frame_line), Some(frame_file)) = (symbol, frame_line, frame_file) {
                if frame_line == line && same_file(&frame_file, &file) {
                    return Some(sym.to_string());
                }
            }
            continue;
        }

        symbol = Some(frame_symbol(entry));
    }

    None
}

/// Find the first symbol below a run of frames starting with `prefix`
///
/// Frames are listed innermost first, so this is the caller of the
/// outermost matching frame.
fn find_symbol_after(rendered: &str, prefix: &str) -> Option<String> {
    let mut inside = false;

    for raw in rendered.lines() {
        let entry = raw.trim();
        if entry.is_empty() || entry.starts_with("at ") {
            continue;
        }

        let symbol = frame_symbol(entry);
        if symbol.trim_start_matches('<').starts_with(prefix) {
            inside = true;
        } else if inside {
            return Some(symbol.to_string());
        }
    }

    None
}

/// `N: symbol` or a bare `symbol` for inlined frames
fn frame_symbol(entry: &str) -> &str {
    match entry.split_once(": ") {
        Some((index, rest)) if index.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => entry,
    }
}

fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    path.strip_prefix("./").map(str::to_string).unwrap_or(path)
}

/// Backtraces may print absolute paths while `Location` is relative to the
/// workspace, so compare on a path-component boundary
fn same_file(frame_file: &str, file: &str) -> bool {
    frame_file == file
        || (frame_file.ends_with(file)
            && frame_file[..frame_file.len() - file.len()].ends_with('/'))
        || (file.ends_with(frame_file)
            && file[..file.len() - frame_file.len()].ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENDERED: &str = "   0: plogger::caller::resolvers::BacktraceResolver::resolve
             at ./crates/plogger/src/caller/resolvers.rs:29:21
   1: plogger::logger::Logger::info
             at ./crates/plogger/src/logger.rs:120:9
   2: app::jobs::Worker::run
             at /home/dev/app/src/jobs.rs:57:13
      app::jobs::spawn::{{closure}}
             at /home/dev/app/src/jobs.rs:88:5
   3: std::rt::lang_start_internal
             at /rustc/abc/library/std/src/rt.rs:148:20
";

    #[test]
    fn test_find_symbol_numbered_frame() {
        assert_eq!(
            find_symbol(RENDERED, "src/jobs.rs", 57),
            Some("app::jobs::Worker::run".to_string())
        );
    }

    #[test]
    fn test_find_symbol_inlined_frame() {
        assert_eq!(
            find_symbol(RENDERED, "src/jobs.rs", 88),
            Some("app::jobs::spawn::{{closure}}".to_string())
        );
    }

    #[test]
    fn test_find_symbol_no_match() {
        assert_eq!(find_symbol(RENDERED, "src/jobs.rs", 58), None);
        assert_eq!(find_symbol(RENDERED, "src/obs.rs", 57), None);
        assert_eq!(find_symbol("", "src/jobs.rs", 57), None);
    }

    const RENDERED_WITHOUT_POSITIONS: &str = "   0: plogger::caller::resolvers::BacktraceResolver::resolve
   1: plogger::logger::Logger::log_line
   2: plogger::logger::Logger::info
   3: app::jobs::Worker::run
   4: app::main
   5: std::rt::lang_start_internal
";

    #[test]
    fn test_find_symbol_after_logger_frames() {
        assert_eq!(find_symbol(RENDERED_WITHOUT_POSITIONS, "src/jobs.rs", 57), None);
        assert_eq!(
            find_symbol_after(RENDERED_WITHOUT_POSITIONS, LOGGER_FRAME_PREFIX),
            Some("app::jobs::Worker::run".to_string())
        );

        let info = CallerInfo::from_symbol("src/jobs.rs", 57, "app::jobs::Worker::run");
        assert_eq!(info.function, "Worker.run()");
        assert_eq!(info.module, "app::jobs");
    }

    #[test]
    fn test_find_symbol_after_skips_hashes_and_inlined_frames() {
        let rendered = "   0: plogger::logger::Logger::log_line::h0123456789abcdef
      plogger::logger::Logger::warning::h0123456789abcdef
   1: app::bar::foo::h0123456789abcdef
";
        assert_eq!(
            find_symbol_after(rendered, LOGGER_FRAME_PREFIX),
            Some("app::bar::foo::h0123456789abcdef".to_string())
        );
        assert_eq!(find_symbol_after("   0: app::main\n", LOGGER_FRAME_PREFIX), None);
    }

    #[test]
    fn test_same_file() {
        assert!(same_file("/home/dev/app/src/jobs.rs", "src/jobs.rs"));
        assert!(same_file("crates/plogger/src/logger.rs", "crates/plogger/src/logger.rs"));
        assert!(!same_file("/home/dev/app/src/myjobs.rs", "jobs.rs"));
    }

    #[test]
    fn test_location_resolver() {
        let location = Location::caller();
        let info = LocationResolver::new().resolve(location);
        assert_eq!(info.file, "resolvers.rs");
        assert_eq!(info.line, location.line().to_string());
        assert_eq!(info.function, CallerInfo::UNKNOWN_FUNCTION);
        assert_eq!(info.module, CallerInfo::UNKNOWN_MODULE);
    }

    #[test]
    fn test_backtrace_resolver_keeps_call_site() {
        // Function and module depend on debug info being available; file and
        // line must always come through.
        let location = Location::caller();
        let info = BacktraceResolver::new().resolve(location);
        assert_eq!(info.file, "resolvers.rs");
        assert_eq!(info.line, location.line().to_string());
    }
}
