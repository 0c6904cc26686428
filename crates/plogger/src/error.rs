//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up or writing to a sink
///
/// None of these ever reach the caller of a logging method; they are handed
/// to the logger's [`Diagnostics`](crate::diagnostics::Diagnostics) channel.
#[derive(Error, Debug)]
pub enum LogError {
    /// The log directory could not be created
    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be opened
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a line to a sink failed
    #[error("failed to write to {sink}: {source}")]
    Write {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// The sink never opened, so the line was dropped
    #[error("{sink} is not open, line dropped")]
    SinkUnavailable { sink: String },
}

impl LogError {
    /// Create a write error
    pub fn write(sink: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            sink: sink.into(),
            source,
        }
    }

    /// Create a sink unavailable error
    pub fn sink_unavailable(sink: impl Into<String>) -> Self {
        Self::SinkUnavailable { sink: sink.into() }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages() {
        let err = LogError::CreateDir {
            path: PathBuf::from("/nope/log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to create log directory /nope/log: denied");

        let err = LogError::write("all.log", io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "failed to write to all.log: disk full");

        let err = LogError::sink_unavailable("info.log");
        assert_eq!(err.to_string(), "info.log is not open, line dropped");
    }
}
