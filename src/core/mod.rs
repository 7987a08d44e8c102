//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod label;
pub mod log_entry;
pub mod log_level;
pub mod logfmt;
pub mod logger;
pub mod timestamp;

pub use appender::{Appender, Sink};
pub use error::{LoggerError, Result};
pub use label::{LabelValue, Labels};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logfmt::{LogfmtFormatter, RESERVED_LABELS};
pub use logger::{Logger, LoggerBuilder, DURATION_LABEL};
pub use timestamp::TimestampFormat;
