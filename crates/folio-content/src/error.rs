//! Error types for content decoding.

use thiserror::Error;

/// Result alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while decoding translation tables and content files.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Language tag is not one the site supports.
    #[error("unsupported language")]
    UnknownLanguage {
        /// Tag supplied by the caller.
        value: String,
    },
    /// Translation table root was not a JSON object.
    #[error("translation table must be a JSON object")]
    TableShape {
        /// JSON type found at the root.
        found: &'static str,
    },
    /// Translation table held no language sub-tree at all.
    #[error("translation table has no language catalogs")]
    NoCatalogs,
    /// A content file did not match the expected record shape.
    #[error("invalid content file")]
    Records {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// Raw text was not valid JSON.
    #[error("invalid JSON document")]
    Json {
        /// Underlying serde error.
        source: serde_json::Error,
    },
}
