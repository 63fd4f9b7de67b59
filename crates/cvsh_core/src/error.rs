//! Structured error types for cvsh.
//!
//! Every fallible operation in the core crate returns [`CvshResult`].
//! Errors carry a category, a human-readable message and an optional
//! context map so the UI layer can decide how much detail to surface.
//! User-input problems (unknown command, bad field name) are not errors
//! at all; they are rendered directly into the transcript.

use std::collections::HashMap;
use std::fmt;

/// Result type for all cvsh core operations.
pub type CvshResult<T> = Result<T, CvshError>;

/// Main error type for cvsh core operations.
#[derive(Debug, Clone)]
pub struct CvshError {
    pub kind: ErrorKind,
    pub message: String,
    // Boxed: most errors carry no context entries.
    pub context: Box<HashMap<String, String>>,
}

/// Categories of errors that can occur in cvsh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Command dispatch and argument problems.
    Command(CommandErrorKind),

    /// Key-value store problems.
    Storage(StorageErrorKind),

    /// Media import problems (picture / resume files).
    Media(MediaErrorKind),

    /// Configuration problems.
    Config(ConfigErrorKind),

    /// JSON / data-URI encoding problems.
    Serialization(SerializationErrorKind),

    /// Plain I/O problems.
    Io(IoErrorKind),
}

/// Command error subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandErrorKind {
    NotFound,
    MissingArgument,
    InvalidArgument,
    AdminRequired,
}

/// Storage error subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageErrorKind {
    ReadFailed,
    WriteFailed,
    CorruptData,
}

/// Media error subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaErrorKind {
    UnsupportedType,
    ReadFailed,
    DecodeFailed,
}

/// Configuration error subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    InvalidFormat,
    InvalidValue,
}

/// Serialization error subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationErrorKind {
    JsonError,
    InvalidData,
    EncodingError,
}

/// I/O error subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoErrorKind {
    NotFound,
    PermissionError,
    Other,
}

impl CvshError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Box::new(HashMap::new()),
        }
    }

    /// Attach a context key-value pair.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Create a command-not-found error.
    pub fn command_not_found(command: &str) -> Self {
        Self::new(
            ErrorKind::Command(CommandErrorKind::NotFound),
            format!("command not found: {command}"),
        )
        .with_context("command", command)
    }

    /// Create a missing-argument error.
    pub fn missing_argument(usage: &str) -> Self {
        Self::new(
            ErrorKind::Command(CommandErrorKind::MissingArgument),
            format!("Usage: {usage}"),
        )
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Command(CommandErrorKind::InvalidArgument), message)
    }

    /// Create an unsupported-media-type error.
    pub fn unsupported_media(expected: &str, path: &str) -> Self {
        Self::new(
            ErrorKind::Media(MediaErrorKind::UnsupportedType),
            format!("'{path}' is not a valid {expected} file"),
        )
        .with_context("expected", expected)
        .with_context("path", path)
    }

    /// Create a corrupt-data storage error.
    pub fn corrupt_data(key: &str, detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Storage(StorageErrorKind::CorruptData),
            format!("stored value for '{key}' is not valid JSON"),
        )
        .with_context("key", key)
        .with_context("detail", detail)
    }
}

impl fmt::Display for CvshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match &self.kind {
            ErrorKind::Command(_) => "command",
            ErrorKind::Storage(_) => "storage",
            ErrorKind::Media(_) => "media",
            ErrorKind::Config(_) => "config",
            ErrorKind::Serialization(_) => "serialization",
            ErrorKind::Io(_) => "io",
        };
        write!(f, "{category} error: {}", self.message)?;
        if !self.context.is_empty() {
            let mut entries: Vec<_> = self.context.iter().collect();
            entries.sort();
            write!(f, " (")?;
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for CvshError {}

impl From<std::io::Error> for CvshError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionError,
            _ => IoErrorKind::Other,
        };
        CvshError::new(ErrorKind::Io(kind), err.to_string())
    }
}

impl From<serde_json::Error> for CvshError {
    fn from(err: serde_json::Error) -> Self {
        CvshError::new(
            ErrorKind::Serialization(SerializationErrorKind::JsonError),
            err.to_string(),
        )
    }
}

impl From<base64::DecodeError> for CvshError {
    fn from(err: base64::DecodeError) -> Self {
        CvshError::new(
            ErrorKind::Serialization(SerializationErrorKind::EncodingError),
            err.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_context() {
        let err = CvshError::command_not_found("hepl");
        let rendered = err.to_string();
        assert!(rendered.starts_with("command error: command not found: hepl"));
        assert!(rendered.contains("command=hepl"));
    }

    #[test]
    fn io_error_kind_is_mapped() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CvshError::from(io);
        assert_eq!(err.kind, ErrorKind::Io(IoErrorKind::NotFound));
    }
}
