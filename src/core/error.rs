//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized severity name passed to a level setter or parser
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Label name contains whitespace or control characters
    #[error("invalid label: {0:?}")]
    InvalidLabel(String),

    /// Human-readable encoder given an entry missing a required field
    #[error("malformed entry: missing `{missing}`")]
    MalformedEntry { missing: &'static str },

    /// Underlying sink write failed; propagated unchanged
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Appender pipeline composed in an order that cannot terminate
    /// in a sink
    #[error("invalid pipeline: {0}")]
    InvalidPipeline(String),
}

impl LoggerError {
    /// Create an invalid pipeline error
    pub fn pipeline(msg: impl Into<String>) -> Self {
        LoggerError::InvalidPipeline(msg.into())
    }
}
