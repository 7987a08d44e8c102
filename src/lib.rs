//! # Logfmt Logger
//!
//! A hierarchical, structured logging library with logfmt output and
//! composable appender pipelines.
//!
//! ## Features
//!
//! - **Hierarchical Loggers**: Cheap derived sub-loggers with prefix and
//!   label inheritance
//! - **Logfmt Output**: One parseable `key=value` line per entry
//! - **Composable Appenders**: Mutex guarding, tracing-context injection,
//!   human-readable console rendering
//! - **Measured Emission**: Block-scoped timing with a `duration` label
//! - **Thread Safe**: Derived loggers share one appender chain across
//!   threads

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{
        BufferSink, HumanAppender, LogfmtAppender, NoopAppender, Pipeline, TracingAppender,
        TracingContext, WithMutex, WriterSink,
    };
    pub use crate::core::{
        Appender, LabelValue, Labels, LogEntry, LogLevel, LogfmtFormatter, Logger, LoggerBuilder,
        LoggerError, Result, Sink, TimestampFormat, DURATION_LABEL,
    };
}

pub use appenders::{
    BufferSink, HumanAppender, LogfmtAppender, NoopAppender, Pipeline, TracingAppender,
    TracingContext, WithMutex, WriterSink,
};
pub use core::{
    Appender, LabelValue, Labels, LogEntry, LogLevel, LogfmtFormatter, Logger, LoggerBuilder,
    LoggerError, Result, Sink, TimestampFormat, DURATION_LABEL,
};
