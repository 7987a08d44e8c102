//! Main logger implementation
//!
//! Loggers are cheap, immutable values forming a tree: deriving a
//! sub-logger extends the prefix and label set while sharing the same
//! appender chain through an `Arc`. All emission is synchronous on the
//! caller's thread.

use super::{
    appender::Appender,
    error::Result,
    label::Labels,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use std::sync::Arc;
use std::time::Instant;

/// Label name attached by measured emission.
pub const DURATION_LABEL: &str = "duration";

const PREFIX_SEPARATOR: &str = ": ";

#[derive(Clone)]
pub struct Logger {
    level: LogLevel,
    prefix: Option<String>,
    labels: Labels,
    appender: Arc<dyn Appender>,
}

impl Logger {
    /// Create a logger with defaults: `Debug` threshold, no prefix, no
    /// labels, mutex-guarded stderr sink behind logfmt encoding.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Mutate only this logger's own threshold. Existing sub-loggers are
    /// unaffected; sub-loggers derived afterward inherit the new value.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Set the threshold from a severity name, failing with
    /// `InvalidLevel` for unrecognized names.
    pub fn set_level_str(&mut self, level: &str) -> Result<()> {
        self.level = level.parse()?;
        Ok(())
    }

    /// Derive a sub-logger with an extended prefix.
    #[must_use]
    pub fn sub(&self, prefix: impl Into<String>) -> Logger {
        self.derive(Some(prefix.into()), Labels::new())
    }

    /// Derive a sub-logger with extra labels; same-named labels override
    /// the receiver's.
    #[must_use]
    pub fn sub_labels(&self, labels: Labels) -> Logger {
        self.derive(None, labels)
    }

    /// Derive a sub-logger with both an extended prefix and extra labels.
    #[must_use]
    pub fn sub_with(&self, prefix: impl Into<String>, labels: Labels) -> Logger {
        self.derive(Some(prefix.into()), labels)
    }

    fn derive(&self, prefix: Option<String>, labels: Labels) -> Logger {
        Logger {
            level: self.level,
            prefix: compose_prefix(self.prefix.as_deref(), prefix),
            labels: self.labels.merge(&labels),
            appender: Arc::clone(&self.appender),
        }
    }

    /// Generic emit. Below-threshold levels are a no-op.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        if level < self.level {
            return Ok(());
        }
        self.append(level, message.as_ref())
    }

    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    /// Measured emit: log `message` suffixed with `...`, run `work`,
    /// then log `message` again at the same level with a `duration`
    /// label of elapsed wall-clock seconds. The work's result is
    /// returned unchanged.
    ///
    /// When the level is filtered out, `work` still runs exactly once
    /// and its result is returned; filtering only suppresses output.
    pub fn log_measured<T, F>(
        &self,
        level: LogLevel,
        message: impl AsRef<str>,
        work: F,
    ) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        let message = message.as_ref();

        if level < self.level {
            return Ok(work());
        }

        self.append(level, &format!("{}...", message))?;

        let started = Instant::now();
        let result = work();
        let elapsed = started.elapsed().as_secs_f64();

        self.sub_labels(Labels::new().with_label(DURATION_LABEL, elapsed))
            .log(level, message)?;

        Ok(result)
    }

    pub fn debug_measured<T, F: FnOnce() -> T>(
        &self,
        message: impl AsRef<str>,
        work: F,
    ) -> Result<T> {
        self.log_measured(LogLevel::Debug, message, work)
    }

    pub fn info_measured<T, F: FnOnce() -> T>(
        &self,
        message: impl AsRef<str>,
        work: F,
    ) -> Result<T> {
        self.log_measured(LogLevel::Info, message, work)
    }

    pub fn warn_measured<T, F: FnOnce() -> T>(
        &self,
        message: impl AsRef<str>,
        work: F,
    ) -> Result<T> {
        self.log_measured(LogLevel::Warn, message, work)
    }

    pub fn error_measured<T, F: FnOnce() -> T>(
        &self,
        message: impl AsRef<str>,
        work: F,
    ) -> Result<T> {
        self.log_measured(LogLevel::Error, message, work)
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.flush()
    }

    fn append(&self, level: LogLevel, message: &str) -> Result<()> {
        let message = match &self.prefix {
            Some(prefix) => format!("{}{}{}", prefix, PREFIX_SEPARATOR, message),
            None => message.to_string(),
        };

        let entry = LogEntry::new(level, message, self.labels.clone());
        self.appender.append(&entry)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn compose_prefix(base: Option<&str>, fragment: Option<String>) -> Option<String> {
    match (base, fragment) {
        (None, None) => None,
        (Some(base), None) => Some(base.to_string()),
        (None, Some(fragment)) => Some(fragment),
        (Some(base), Some(fragment)) => {
            Some(format!("{}{}{}", base, PREFIX_SEPARATOR, fragment))
        }
    }
}

pub struct LoggerBuilder {
    level: LogLevel,
    prefix: Option<String>,
    labels: Labels,
    appender: Option<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: LogLevel::Debug,
            prefix: None,
            labels: Labels::new(),
            appender: None,
        }
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn label<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::label::LabelValue>,
    {
        self.labels.insert(name, value);
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = self.labels.merge(&labels);
        self
    }

    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Arc::new(appender));
        self
    }

    #[must_use]
    pub fn appender_arc(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            level: self.level,
            prefix: self.prefix,
            labels: self.labels,
            appender: self
                .appender
                .unwrap_or_else(crate::appenders::stderr),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::NoopAppender;

    fn noop_logger() -> Logger {
        Logger::builder().appender(NoopAppender).build()
    }

    #[test]
    fn test_default_level_is_debug() {
        assert_eq!(noop_logger().level(), LogLevel::Debug);
    }

    #[test]
    fn test_set_level_str() {
        let mut logger = noop_logger();
        logger.set_level_str("warn").unwrap();
        assert_eq!(logger.level(), LogLevel::Warn);

        let err = logger.set_level_str("loud").unwrap_err();
        assert!(matches!(err, crate::core::LoggerError::InvalidLevel(_)));
        assert_eq!(logger.level(), LogLevel::Warn);
    }

    #[test]
    fn test_derivation_does_not_mutate_parent() {
        let parent = noop_logger().sub("a");
        let child = parent.sub("b");

        // Both loggers stay usable; the parent keeps its own prefix
        parent.debug("from parent").unwrap();
        child.debug("from child").unwrap();
        assert_eq!(parent.prefix.as_deref(), Some("a"));
        assert_eq!(child.prefix.as_deref(), Some("a: b"));
    }

    #[test]
    fn test_sub_inherits_threshold_at_derivation_time() {
        let mut logger = noop_logger();
        let early = logger.sub("early");

        logger.set_level(LogLevel::Error);
        let late = logger.sub("late");

        assert_eq!(early.level(), LogLevel::Debug);
        assert_eq!(late.level(), LogLevel::Error);
    }

    #[test]
    fn test_filtered_measured_work_still_runs() {
        let mut logger = noop_logger();
        logger.set_level(LogLevel::Info);

        let mut runs = 0;
        let result = logger
            .debug_measured("skipped", || {
                runs += 1;
                "res"
            })
            .unwrap();

        assert_eq!(runs, 1);
        assert_eq!(result, "res");
    }

    #[test]
    fn test_compose_prefix() {
        assert_eq!(compose_prefix(None, None), None);
        assert_eq!(compose_prefix(Some("a"), None), Some("a".to_string()));
        assert_eq!(
            compose_prefix(None, Some("b".to_string())),
            Some("b".to_string())
        );
        assert_eq!(
            compose_prefix(Some("a"), Some("b".to_string())),
            Some("a: b".to_string())
        );
    }
}
