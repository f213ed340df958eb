use thiserror::Error;

/// Errors raised by a durable slot backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Read failed for slot '{key}': {message}")]
    ReadFailed { key: String, message: String },
    #[error("Write failed for slot '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// Result type for slot operations.
pub type Result<T> = std::result::Result<T, SlotError>;
