//! Logfmt entry encoding
//!
//! Renders ordered label/value pairs into one line of logfmt text,
//! space-separated, with no trailing separator or newline. See
//! <https://brandur.org/logfmt> for the format.
//!
//! Quoting is applied only to values containing whitespace or control
//! characters; embedded quotes and backslashes are escaped when (and
//! only when) quoting occurs. `true` booleans render as the bare label
//! name.

use super::error::{LoggerError, Result};
use super::label::LabelValue;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

/// Label names owned by the entry framing fields. Entry fields win:
/// same-named user labels are dropped at encode time so a line never
/// carries a duplicate, spoofable `time`/`level`/`msg` key.
pub const RESERVED_LABELS: [&str; 3] = ["time", "level", "msg"];

#[derive(Debug, Clone, Default)]
pub struct LogfmtFormatter {
    time_format: TimestampFormat,
}

impl LogfmtFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Encode a full entry: `time=… level=… msg=…` followed by labels in
    /// attachment order.
    pub fn format_entry(&self, entry: &LogEntry) -> Result<String> {
        let mut line = String::with_capacity(64);
        line.push_str("time=");
        line.push_str(&quote_if_needed(&self.time_format.format(&entry.time)));
        line.push_str(" level=");
        line.push_str(entry.level.as_str());
        line.push_str(" msg=");
        line.push_str(&quote_if_needed(&entry.message));

        for (name, value) in entry.labels.iter() {
            if RESERVED_LABELS.contains(&name) {
                continue;
            }
            line.push(' ');
            line.push_str(&self.format_pair(name, value)?);
        }

        Ok(line)
    }

    /// Encode bare label/value pairs, without the entry framing fields.
    pub fn format_labels<'a, I>(&self, pairs: I) -> Result<String>
    where
        I: IntoIterator<Item = (&'a str, &'a LabelValue)>,
    {
        let mut parts = Vec::new();
        for (name, value) in pairs {
            parts.push(self.format_pair(name, value)?);
        }
        Ok(parts.join(" "))
    }

    /// Encode one `name=value` field; `true` renders as the bare name.
    pub fn format_pair(&self, name: &str, value: &LabelValue) -> Result<String> {
        validate_label(name)?;

        if matches!(value, LabelValue::Bool(true)) {
            return Ok(name.to_string());
        }

        Ok(format!("{}={}", name, self.format_value(value)))
    }

    /// Render a single value into its logfmt-safe textual form.
    pub fn format_value(&self, value: &LabelValue) -> String {
        match value {
            LabelValue::Time(t) => quote_if_needed(&self.time_format.format(t)),
            other => quote_if_needed(&other.to_string()),
        }
    }
}

/// Label names must contain no whitespace or control characters.
pub fn validate_label(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(LoggerError::InvalidLabel(name.to_string()));
    }
    Ok(())
}

fn needs_quoting(s: &str) -> bool {
    s.chars().any(|c| c.is_whitespace() || c.is_control())
}

fn quote_if_needed(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
