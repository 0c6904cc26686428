//! The per-call line record and the shared line template

use chrono::Utc;

use crate::caller::CallerInfo;
use crate::severity::Severity;

/// UTC, second precision, no zone suffix
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Everything one log call writes; formatted and then dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub severity: Severity,
    pub caller: CallerInfo,
    pub message: String,
}

impl LogRecord {
    /// Stamp a record with the current UTC time
    pub fn now(severity: Severity, caller: CallerInfo, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            severity,
            caller,
            message: message.into(),
        }
    }
}

/// `[<ts>] [<LABEL>]<spacing>[func <function> <module>/<file>:<line>] : <message>\n`
pub fn format_line(record: &LogRecord, spacing: &str) -> String {
    format!(
        "[{}] [{}]{}[func {} {}/{}:{}] : {}\n",
        record.timestamp,
        record.severity.label(),
        spacing,
        record.caller.function,
        record.caller.module,
        record.caller.file,
        record.caller.line,
        record.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn record(severity: Severity) -> LogRecord {
        LogRecord {
            timestamp: "2024-03-01T12:30:05".to_string(),
            severity,
            caller: CallerInfo {
                file: "main.rs".to_string(),
                line: "12".to_string(),
                function: "Worker.run()".to_string(),
                module: "app::jobs".to_string(),
            },
            message: "started".to_string(),
        }
    }

    #[test]
    fn test_format_line_single_space() {
        assert_eq!(
            format_line(&record(Severity::Info), " "),
            "[2024-03-01T12:30:05] [INFO] [func Worker.run() app::jobs/main.rs:12] : started\n"
        );
    }

    #[test]
    fn test_format_line_aligned() {
        let info = format_line(&record(Severity::Info), &Severity::Info.spacing());
        let critical = format_line(&record(Severity::Critical), &Severity::Critical.spacing());
        assert_eq!(
            info,
            "[2024-03-01T12:30:05] [INFO]     [func Worker.run() app::jobs/main.rs:12] : started\n"
        );
        assert_eq!(info.find("[func"), critical.find("[func"));
    }

    #[test]
    fn test_now_timestamp_format() {
        let record = LogRecord::now(Severity::Info, CallerInfo::unknown(), "hi");
        assert_eq!(record.timestamp.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(record.message, "hi");
    }
}
