//! File and console sinks

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::diagnostics::Diagnostics;
use crate::error::{LogError, LogResult};

/// One append-only log file
///
/// A sink whose file failed to open stays in place with no handle; every
/// write to it reports [`LogError::SinkUnavailable`] and does nothing else.
#[derive(Debug)]
pub(crate) struct FileSink {
    name: String,
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `dir/name` for appending, creating it if needed
    pub(crate) fn open(dir: &Path, name: &str, diagnostics: &dyn Diagnostics) -> Self {
        let path = dir.join(name);
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(source) => {
                diagnostics.report(&LogError::OpenFile {
                    path: path.clone(),
                    source,
                });
                None
            }
        };

        Self {
            name: name.to_string(),
            path,
            file: Mutex::new(file),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Append one whole line
    ///
    /// The line goes out in a single `write_all` under the sink lock, so
    /// lines from concurrent callers never interleave.
    pub(crate) fn write_line(&self, line: &str) -> LogResult<()> {
        let mut guard = self.file.lock();
        let file = guard
            .as_mut()
            .ok_or_else(|| LogError::sink_unavailable(self.name.as_str()))?;
        file.write_all(line.as_bytes())
            .map_err(|source| LogError::write(self.name.as_str(), source))
    }
}

/// Console output; stdout unless the builder supplies another writer
pub(crate) struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub(crate) fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub(crate) fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub(crate) fn write_line(&self, line: &str) -> LogResult<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|source| LogError::write("console", source))
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemoryDiagnostics;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_appends() {
        let dir = TempDir::new().unwrap();
        let diagnostics = MemoryDiagnostics::new();

        let sink = FileSink::open(dir.path(), "info.log", &diagnostics);
        assert!(sink.is_open());
        sink.write_line("one\n").unwrap();
        sink.write_line("two\n").unwrap();
        drop(sink);

        // reopening appends rather than truncates
        let sink = FileSink::open(dir.path(), "info.log", &diagnostics);
        sink.write_line("three\n").unwrap();

        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "one\ntwo\nthree\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_file_sink_open_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let diagnostics = MemoryDiagnostics::new();

        let sink = FileSink::open(&missing, "info.log", &diagnostics);
        assert!(!sink.is_open());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.messages()[0].starts_with("failed to open log file"));

        let err = sink.write_line("lost\n").unwrap_err();
        assert!(matches!(err, LogError::SinkUnavailable { .. }));
        // still unavailable on the next write
        assert!(sink.write_line("lost\n").is_err());
    }
}
