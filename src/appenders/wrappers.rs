//! Wrapping appender stages
//!
//! Each stage is an independent type holding an inner appender; chains
//! are built by explicit composition, innermost last.

use crate::core::{Appender, Labels, LogEntry, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Discards every entry. Silences logging without branching caller code.
pub struct NoopAppender;

impl Appender for NoopAppender {
    fn append(&self, _entry: &LogEntry) -> Result<()> {
        Ok(())
    }
}

/// Serializes `append` and `flush` calls across the whole inner chain.
///
/// Wrapping an already serialized chain again is safe, merely redundant.
pub struct WithMutex<A: Appender> {
    inner: A,
    lock: Mutex<()>,
}

impl<A: Appender> WithMutex<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            lock: Mutex::new(()),
        }
    }
}

impl<A: Appender> Appender for WithMutex<A> {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        let _guard = self.lock.lock();
        self.inner.append(entry)
    }

    fn flush(&self) -> Result<()> {
        let _guard = self.lock.lock();
        self.inner.flush()
    }
}

/// Ambient tracing context for request correlation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingContext {
    /// Trace ID for request correlation
    pub trace_id: String,

    /// Span ID for this operation
    pub span_id: String,
}

impl TracingContext {
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
        }
    }
}

/// Injects `trace_id`/`span_id` labels when an ambient tracing context
/// is present, and forwards entries unchanged otherwise.
///
/// The provider is queried per entry, so context recorded mid-request
/// shows up on subsequent entries without rebuilding the chain.
pub struct TracingAppender<A: Appender> {
    inner: A,
    provider: Box<dyn Fn() -> Option<TracingContext> + Send + Sync>,
}

impl<A: Appender> TracingAppender<A> {
    pub fn new<P>(inner: A, provider: P) -> Self
    where
        P: Fn() -> Option<TracingContext> + Send + Sync + 'static,
    {
        Self {
            inner,
            provider: Box::new(provider),
        }
    }
}

impl<A: Appender> Appender for TracingAppender<A> {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        match (self.provider)() {
            None => self.inner.append(entry),
            Some(ctx) => {
                let ambient = Labels::new()
                    .with_label("trace_id", ctx.trace_id)
                    .with_label("span_id", ctx.span_id);
                let merged = entry.labels.merge(&ambient);
                self.inner.append(&entry.clone().with_labels(merged))
            }
        }
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}
