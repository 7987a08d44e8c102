//! Appender implementations

pub mod human;
pub mod logfmt;
pub mod pipeline;
pub mod sink;
pub mod wrappers;

pub use human::HumanAppender;
pub use logfmt::LogfmtAppender;
pub use pipeline::Pipeline;
pub use sink::{BufferSink, WriterSink};
pub use wrappers::{NoopAppender, TracingAppender, TracingContext, WithMutex};

// Re-export traits for convenience
pub use crate::core::{Appender, Sink};

use std::sync::Arc;

/// Default destination: mutex-guarded standard-error sink behind logfmt
/// encoding. The console stream is shared with other writers, so the
/// chain serializes each line.
#[must_use]
pub fn stderr() -> Arc<dyn Appender> {
    Arc::new(WithMutex::new(LogfmtAppender::new(WriterSink::stderr())))
}

/// Like [`stderr`], writing to standard output.
#[must_use]
pub fn stdout() -> Arc<dyn Appender> {
    Arc::new(WithMutex::new(LogfmtAppender::new(WriterSink::stdout())))
}

/// Human-readable standard-error chain for interactive use.
#[must_use]
pub fn stderr_human() -> Arc<dyn Appender> {
    Arc::new(WithMutex::new(HumanAppender::new(WriterSink::stderr())))
}
