//! Error types for the mention graph library.

use thiserror::Error;

/// All errors that can occur while loading tweets or building a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A tweet record has no author.
    #[error("Tweet record {index} has no `user` field")]
    MissingAuthor { index: usize },

    /// A tweet record is present but unusable.
    #[error("Tweet record {index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Input file is not UTF-8 text.
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// Input is not valid JSON, or not an array of records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// The tweet source failed in a way retries cannot fix.
    #[error("Retrieval error: {0}")]
    Retrieval(String),
}

/// Convenience result type for mention graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
