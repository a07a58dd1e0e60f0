//! Error types for the word cloud text pipeline.

use thiserror::Error;

/// Primary error type for text preparation and layout operations.
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tokenizer pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("word at index {index} contains the line separator: {word:?}")]
    SentinelCollision { index: usize, word: String },

    #[error("word count changed during batch transform: expected {expected}, got {got}")]
    Misaligned { expected: usize, got: usize },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("collaborator error: {0}")]
    Collaborator(String),
}

/// Convenience Result type alias for CloudError.
pub type Result<T> = std::result::Result<T, CloudError>;
