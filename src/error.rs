//! Error types for nrclex.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for lexicon resolution and analysis.
///
/// The affect aggregation itself never fails; every variant here comes from
/// the loading and tokenizing plumbing around it.
#[derive(Debug, Error)]
pub enum NrcError {
    /// An explicit absolute lexicon path does not exist.
    #[error(
        "lexicon file '{}' was not found; pass an existing path, or use the bundled lexicon ('{}')",
        .path.display(),
        crate::core::types::DEFAULT_LEXICON_FILENAME
    )]
    LexiconNotFound { path: PathBuf },

    /// Raw-text analysis was requested without a tokenizer.
    #[error("{capability} is required for raw-text analysis; configure a tokenizer or enable the `tokenizer` feature")]
    MissingTokenizer { capability: &'static str },

    /// A lexicon file exists but is not a JSON object of string arrays.
    #[error("malformed lexicon '{}': {source}", .path.display())]
    MalformedLexicon {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A label that is not part of the emotion vocabulary.
    #[error("unknown emotion label: {0}")]
    UnknownEmotion(String),

    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for nrclex operations.
pub type Result<T> = std::result::Result<T, NrcError>;
