//! Log entry structure

use super::label::Labels;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One emitted log event
///
/// Built once per emit call by the logger, with the prefix already joined
/// into `message`, and consumed by exactly one appender chain invocation.
/// Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub labels: Labels,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String, labels: Labels) -> Self {
        Self {
            time: Utc::now(),
            level,
            message,
            labels,
        }
    }

    /// Replace the label set, used by wrappers that inject ambient labels
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}
