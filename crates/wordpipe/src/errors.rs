//! # Error Types

/// Errors from wordpipe operations.
///
/// Transforms never raise these on their own; they are produced by the
/// collaborators a transform wraps and propagated unchanged.
#[derive(Debug, thiserror::Error)]
pub enum WordpipeError {
    /// Token is not in the vocabulary, and no default index is set.
    #[error("token {token:?} not found and default index is not set")]
    UnknownToken {
        /// The missing token.
        token: String,
    },

    /// Token is already present in the vocabulary.
    #[error("token {token:?} already exists in the vocab with index {index}")]
    DuplicateToken {
        /// The duplicate token.
        token: String,

        /// The index the token already holds.
        index: usize,
    },

    /// Index is outside the valid range of the vocabulary.
    #[error("index {index} out of range [0, {len}]")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,

        /// The vocabulary length at the time of the request.
        len: usize,
    },

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Array construction failed; typically ragged input.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    /// A regex pattern failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (float, header, dimension, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for wordpipe operations.
pub type WPResult<T> = core::result::Result<T, WordpipeError>;
