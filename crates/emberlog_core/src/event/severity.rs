//! Logging severity levels.

use std::fmt;

/// Severity attached to every event.
///
/// Levels are ordered from least to most severe.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Developer diagnostics.
    Debug,
    /// Routine operational information.
    Info,
    /// Progress/tracking markers.
    Tracking,
    /// Business-logic anomalies.
    Logic,
    /// Errors that degrade service.
    Critical,
    /// Errors that require operator attention.
    Alert,
    /// Unrecoverable failures.
    Fatal,
}

impl Severity {
    /// Human readable label for the severity level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Tracking => "Tracking",
            Self::Logic => "Logic",
            Self::Critical => "Critical",
            Self::Alert => "Alert",
            Self::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
