//! Human-readable appender stage
//!
//! Reformats entries for interactive consoles: drops the timestamp,
//! right-pads the uppercased level name, and renders numeric `duration`
//! labels in a readable unit.

use crate::core::{
    Appender, LabelValue, LogEntry, LogLevel, LogfmtFormatter, LoggerError, Result, Sink,
    DURATION_LABEL, RESERVED_LABELS,
};

/// Renders entries as `"<LEVEL> <message> <labels>"`, omitting the label
/// segment when no labels remain.
pub struct HumanAppender<S: Sink> {
    sink: S,
    formatter: LogfmtFormatter,
}

impl<S: Sink> HumanAppender<S> {
    pub fn new(sink: S) -> Self {
        Self::with_formatter(sink, LogfmtFormatter::new())
    }

    pub fn with_formatter(sink: S, formatter: LogfmtFormatter) -> Self {
        Self { sink, formatter }
    }

    fn format_entry(&self, entry: &LogEntry) -> Result<String> {
        if entry.message.is_empty() {
            return Err(LoggerError::MalformedEntry { missing: "msg" });
        }

        let mut line = format!(
            "{:>width$} {}",
            entry.level.as_upper_str(),
            entry.message,
            width = LogLevel::MAX_STR_WIDTH
        );

        let mut parts = Vec::new();
        for (name, value) in entry.labels.iter() {
            if RESERVED_LABELS.contains(&name) {
                continue;
            }
            if name == DURATION_LABEL {
                if let Some(text) = format_duration(value) {
                    parts.push(format!("{}={}", name, text));
                    continue;
                }
            }
            parts.push(self.formatter.format_pair(name, value)?);
        }

        if !parts.is_empty() {
            line.push(' ');
            line.push_str(&parts.join(" "));
        }

        Ok(line)
    }
}

impl<S: Sink> Appender for HumanAppender<S> {
    fn append(&self, entry: &LogEntry) -> Result<()> {
        let line = self.format_entry(entry)?;
        self.sink.write_line(&line)
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

/// Numeric durations under one second render as integer milliseconds,
/// anything longer with two decimal places in seconds. Non-numeric
/// values are left to ordinary encoding.
fn format_duration(value: &LabelValue) -> Option<String> {
    let secs = match value {
        LabelValue::Float(f) => *f,
        LabelValue::Int(i) => *i as f64,
        _ => return None,
    };

    if secs < 1.0 {
        Some(format!("{}ms", (secs * 1000.0) as i64))
    } else {
        Some(format!("{:.2}s", secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::BufferSink;
    use crate::core::Labels;

    fn render(level: LogLevel, message: &str, labels: Labels) -> String {
        let sink = BufferSink::new();
        let appender = HumanAppender::new(sink.clone());
        let entry = LogEntry::new(level, message.to_string(), labels);
        appender.append(&entry).unwrap();
        sink.contents()
    }

    #[test]
    fn test_level_is_uppercased_and_right_aligned() {
        assert_eq!(render(LogLevel::Info, "test", Labels::new()), " INFO test\n");
        assert_eq!(
            render(LogLevel::Debug, "test", Labels::new()),
            "DEBUG test\n"
        );
    }

    #[test]
    fn test_no_time_in_output() {
        let output = render(LogLevel::Info, "test", Labels::new());
        assert!(!output.contains("time="));
    }

    #[test]
    fn test_labels_follow_message() {
        let labels = Labels::new().with_label("foo", "bar");
        assert_eq!(
            render(LogLevel::Info, "test", labels),
            " INFO test foo=bar\n"
        );
    }

    #[test]
    fn test_label_values_are_quoted() {
        let labels = Labels::new().with_label("foo", "bar baz");
        assert_eq!(
            render(LogLevel::Info, "test", labels),
            " INFO test foo=\"bar baz\"\n"
        );
    }

    #[test]
    fn test_duration_formatting() {
        let labels = Labels::new()
            .with_label("duration", 1.23)
            .with_label("a_float", 1.23);
        assert_eq!(
            render(LogLevel::Debug, "test", labels),
            "DEBUG test duration=1.23s a_float=1.23\n"
        );

        let labels = Labels::new().with_label("duration", 0.999);
        assert_eq!(
            render(LogLevel::Debug, "test", labels),
            "DEBUG test duration=999ms\n"
        );
    }

    #[test]
    fn test_non_numeric_duration_passes_through() {
        let labels = Labels::new().with_label("duration", "a string");
        assert_eq!(
            render(LogLevel::Debug, "test", labels),
            "DEBUG test duration=\"a string\"\n"
        );
    }

    #[test]
    fn test_reserved_label_names_are_dropped() {
        let labels = Labels::new()
            .with_label("level", "debug")
            .with_label("msg", "spoofed")
            .with_label("time", "1970-01-01")
            .with_label("foo", "bar");
        assert_eq!(
            render(LogLevel::Info, "real", labels),
            " INFO real foo=bar\n"
        );
    }

    #[test]
    fn test_empty_message_is_malformed() {
        let sink = BufferSink::new();
        let appender = HumanAppender::new(sink);
        let entry = LogEntry::new(LogLevel::Info, String::new(), Labels::new());

        let err = appender.append(&entry).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::MalformedEntry { missing: "msg" }
        ));
    }
}
