//! Severity levels and their fixed labels, colours and file sinks

use colored::Color;
use serde::{Deserialize, Serialize};

/// File that receives every line regardless of severity
pub const AGGREGATE_FILE_NAME: &str = "all.log";

/// Length of the longest label (`CRITICAL`), used to align the caller column
pub const MAX_LABEL_LEN: usize = 8;

/// Severity of a log line
///
/// Every severity is always written; there is no level filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Success,
    Info,
}

impl Severity {
    /// All severities, in the order their sinks are opened
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Success,
        Severity::Info,
    ];

    /// Fixed label written between brackets
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Success => "SUCCESS",
            Severity::Info => "INFO",
        }
    }

    /// Name of the dedicated log file
    pub fn file_name(self) -> &'static str {
        match self {
            Severity::Critical => "critical.log",
            Severity::Error => "error.log",
            Severity::Warning => "warning.log",
            Severity::Success => "success.log",
            Severity::Info => "info.log",
        }
    }

    /// Position in [`Severity::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Spaces that pad the label so the caller column lines up
    pub fn spacing(self) -> String {
        " ".repeat(MAX_LABEL_LEN - self.label().len() + 1)
    }

    /// Console colours of the label, foreground and optional background
    ///
    /// Labels are always bold.
    pub fn colors(self) -> (Color, Option<Color>) {
        match self {
            Severity::Critical => (Color::White, Some(Color::BrightRed)),
            Severity::Error => (Color::Red, None),
            Severity::Warning => (Color::Yellow, None),
            Severity::Success => (Color::Green, None),
            Severity::Info => (Color::Cyan, None),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_label_len_matches_longest_label() {
        let longest = Severity::ALL.iter().map(|s| s.label().len()).max().unwrap();
        assert_eq!(longest, MAX_LABEL_LEN);
    }

    #[test]
    fn test_spacing() {
        assert_eq!(Severity::Critical.spacing(), " ");
        assert_eq!(Severity::Warning.spacing(), "  ");
        assert_eq!(Severity::Error.spacing(), "    ");
        assert_eq!(Severity::Info.spacing(), "     ");

        // label + spacing is the same width for every severity
        for severity in Severity::ALL {
            assert_eq!(severity.label().len() + severity.spacing().len(), MAX_LABEL_LEN + 1);
        }
    }

    #[test]
    fn test_index_follows_all() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.index(), i);
        }
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = Severity::ALL.iter().map(|s| s.file_name()).collect();
        names.push(AGGREGATE_FILE_NAME);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"WARNING\"");
        let parsed: Severity = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(parsed, Severity::Critical);
        assert_eq!(Severity::Success.to_string(), "SUCCESS");
    }
}
