//! Explicit appender pipeline composition
//!
//! Stages are declared outer-to-inner and folded into nested wrappers
//! around a terminal sink. The entry-to-text boundary is a formatter
//! stage (`logfmt` or `human`), which must be the last stage declared;
//! any other arrangement fails fast at build time.
//!
//! # Example
//!
//! ```
//! use logfmt_logger::appenders::{BufferSink, Pipeline, TracingContext};
//!
//! let sink = BufferSink::new();
//! let appender = Pipeline::new()
//!     .mutex()
//!     .tracing(|| Some(TracingContext::new("t1", "s1")))
//!     .logfmt()
//!     .sink(sink)
//!     .unwrap();
//! # let _ = appender;
//! ```

use super::human::HumanAppender;
use super::logfmt::LogfmtAppender;
use super::wrappers::{TracingAppender, TracingContext, WithMutex};
use crate::core::{Appender, LogfmtFormatter, LoggerError, Result, Sink};

type ContextProvider = Box<dyn Fn() -> Option<TracingContext> + Send + Sync>;

enum Stage {
    Mutex,
    Tracing(ContextProvider),
    Logfmt(LogfmtFormatter),
    Human(LogfmtFormatter),
}

impl Stage {
    fn is_formatter(&self) -> bool {
        matches!(self, Stage::Logfmt(_) | Stage::Human(_))
    }

    fn name(&self) -> &'static str {
        match self {
            Stage::Mutex => "mutex",
            Stage::Tracing(_) => "tracing",
            Stage::Logfmt(_) => "logfmt",
            Stage::Human(_) => "human",
        }
    }
}

/// Ordered chain of appender stages ending in a sink.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize everything declared after this stage.
    #[must_use]
    pub fn mutex(mut self) -> Self {
        self.stages.push(Stage::Mutex);
        self
    }

    /// Inject ambient tracing labels when the provider reports a context.
    #[must_use]
    pub fn tracing<P>(mut self, provider: P) -> Self
    where
        P: Fn() -> Option<TracingContext> + Send + Sync + 'static,
    {
        self.stages.push(Stage::Tracing(Box::new(provider)));
        self
    }

    /// Encode entries as plain logfmt lines.
    #[must_use]
    pub fn logfmt(self) -> Self {
        self.logfmt_with(LogfmtFormatter::new())
    }

    #[must_use]
    pub fn logfmt_with(mut self, formatter: LogfmtFormatter) -> Self {
        self.stages.push(Stage::Logfmt(formatter));
        self
    }

    /// Encode entries in the human-readable console form.
    #[must_use]
    pub fn human(self) -> Self {
        self.human_with(LogfmtFormatter::new())
    }

    #[must_use]
    pub fn human_with(mut self, formatter: LogfmtFormatter) -> Self {
        self.stages.push(Stage::Human(formatter));
        self
    }

    /// Terminate the chain with a sink, folding the declared stages
    /// into nested wrappers (first declared wraps all subsequent).
    pub fn sink<S: Sink + 'static>(self, sink: S) -> Result<Box<dyn Appender>> {
        let mut stages = self.stages;

        match stages.last() {
            Some(stage) if stage.is_formatter() => {}
            Some(stage) => {
                return Err(LoggerError::pipeline(format!(
                    "chain must end in a formatter stage before the sink, got `{}`",
                    stage.name()
                )))
            }
            None => {
                return Err(LoggerError::pipeline(
                    "empty pipeline: declare a `logfmt` or `human` stage",
                ))
            }
        }

        if stages.iter().filter(|s| s.is_formatter()).count() > 1 {
            return Err(LoggerError::pipeline(
                "only one formatter stage is allowed per chain",
            ));
        }

        let mut appender: Box<dyn Appender> = match stages.pop() {
            Some(Stage::Logfmt(formatter)) => {
                Box::new(LogfmtAppender::with_formatter(sink, formatter))
            }
            Some(Stage::Human(formatter)) => {
                Box::new(HumanAppender::with_formatter(sink, formatter))
            }
            _ => unreachable!("validated above"),
        };

        for stage in stages.into_iter().rev() {
            appender = match stage {
                Stage::Mutex => Box::new(WithMutex::new(appender)),
                Stage::Tracing(provider) => {
                    Box::new(TracingAppender::new(appender, move || provider()))
                }
                Stage::Logfmt(_) | Stage::Human(_) => unreachable!("validated above"),
            };
        }

        Ok(appender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::BufferSink;
    use crate::core::{Labels, LogEntry, LogLevel};

    fn entry() -> LogEntry {
        LogEntry::new(
            LogLevel::Info,
            "test".to_string(),
            Labels::new().with_label("foo", "bar"),
        )
    }

    #[test]
    fn test_logfmt_chain() {
        let sink = BufferSink::new();
        let appender = Pipeline::new().logfmt().sink(sink.clone()).unwrap();

        appender.append(&entry()).unwrap();
        assert!(sink.contents().contains("level=info msg=test foo=bar"));
    }

    #[test]
    fn test_full_chain_outer_to_inner() {
        let sink = BufferSink::new();
        let appender = Pipeline::new()
            .mutex()
            .tracing(|| Some(TracingContext::new("t1", "s1")))
            .human()
            .sink(sink.clone())
            .unwrap();

        appender.append(&entry()).unwrap();
        assert_eq!(
            sink.contents(),
            " INFO test foo=bar trace_id=t1 span_id=s1\n"
        );
    }

    #[test]
    fn test_empty_pipeline_fails() {
        // The success type is a trait object without Debug, so drop it
        // before unwrapping the error side
        let err = Pipeline::new()
            .sink(BufferSink::new())
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidPipeline(_)));
    }

    #[test]
    fn test_formatter_must_be_innermost() {
        let err = Pipeline::new()
            .logfmt()
            .mutex()
            .sink(BufferSink::new())
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidPipeline(_)));
    }

    #[test]
    fn test_duplicate_formatter_fails() {
        let err = Pipeline::new()
            .logfmt()
            .human()
            .sink(BufferSink::new())
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidPipeline(_)));
    }
}
