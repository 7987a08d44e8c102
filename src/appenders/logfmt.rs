//! Logfmt-encoding appender stage

use crate::core::{Appender, LogEntry, LogfmtFormatter, Result, Sink};

/// Formats each entry as one logfmt line and forwards the text to its
/// sink.
pub struct LogfmtAppender<S: Sink> {
    sink: S,
    formatter: LogfmtFormatter,
}

impl<S: Sink> LogfmtAppender<S> {
    pub fn new(sink: S) -> Self {
        Self::with_formatter(sink, LogfmtFormatter::new())
    }

    pub fn with_formatter(sink: S, formatter: LogfmtFormatter) -> Self {
        Self { sink, formatter }
    }
}

impl<S: Sink> Appender for LogfmtAppender<S> {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format_entry(entry)?;
        self.sink.write_line(&line)
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}
