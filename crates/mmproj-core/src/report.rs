//! User-visible reporting channel
//!
//! Hosts surface these messages in their status area. They are separate from
//! `tracing` diagnostics, which are for developers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tag attached to every report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single severity-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Sink for user-visible messages
pub trait Reporter {
    fn report(&mut self, severity: Severity, message: &str);

    fn info(&mut self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn error(&mut self, message: &str) {
        self.report(Severity::Error, message);
    }
}

/// Collects reports in memory, in emission order
impl Reporter for Vec<Report> {
    fn report(&mut self, severity: Severity, message: &str) {
        self.push(Report {
            severity,
            message: message.to_string(),
        });
    }
}
