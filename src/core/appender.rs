//! Appender and sink traits for log output destinations
//!
//! Appenders take shared references so derived loggers can share one
//! chain through an `Arc` across threads; stages that need mutable state
//! use interior locking.

use super::{error::Result, log_entry::LogEntry};

/// An output stage accepting whole log entries.
///
/// Stages compose by wrapping: each stage either transforms the entry or
/// passes it through to an inner appender, ending in a terminal sink.
pub trait Appender: Send + Sync {
    fn append(&self, entry: &LogEntry) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<A: Appender + ?Sized> Appender for Box<A> {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        (**self).append(entry)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// The terminal byte-sink contract: write one rendered line.
///
/// The sink adds line termination; the core never opens, closes, or
/// otherwise manages the lifecycle of the destination.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
