//! Error types for content sources and hydration.

use std::io;

use folio_content::ContentError;
use thiserror::Error;

/// Failure to fetch or decode a JSON resource.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The server answered with a non-success status.
    #[error("resource unavailable")]
    Unavailable {
        /// Requested path.
        path: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request could not be completed.
    #[error("resource request failed")]
    Transport {
        /// Requested path.
        path: String,
        /// Transport error detail.
        detail: String,
    },
    /// Reading a local file failed.
    #[error("resource could not be read")]
    Io {
        /// Requested path.
        path: String,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The body was not valid JSON.
    #[error("resource is not valid JSON")]
    Decode {
        /// Requested path.
        path: String,
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// No resource is registered under the path.
    #[error("resource not found")]
    Missing {
        /// Requested path.
        path: String,
    },
}

impl SourceError {
    /// Path the failed request targeted.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Unavailable { path, .. }
            | Self::Transport { path, .. }
            | Self::Io { path, .. }
            | Self::Decode { path, .. }
            | Self::Missing { path } => path.as_str(),
        }
    }
}

/// Failure while hydrating a page section.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Fetching a resource failed.
    #[error("failed to fetch {path}")]
    Fetch {
        /// Resource path.
        path: String,
        /// Underlying source error.
        source: SourceError,
    },
    /// The resource was fetched but did not match the expected shape.
    #[error("failed to parse {path}")]
    Parse {
        /// Resource path.
        path: String,
        /// Underlying content error.
        source: ContentError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        match serde_json::from_str::<serde_json::Value>("[") {
            Ok(_) => serde::de::Error::custom("expected invalid json"),
            Err(err) => err,
        }
    }

    #[test]
    fn source_error_display_and_path() {
        let cases = vec![
            (
                SourceError::Unavailable {
                    path: "a.json".to_string(),
                    status: 404,
                },
                "resource unavailable",
            ),
            (
                SourceError::Transport {
                    path: "a.json".to_string(),
                    detail: "offline".to_string(),
                },
                "resource request failed",
            ),
            (
                SourceError::Io {
                    path: "a.json".to_string(),
                    source: io::Error::other("io"),
                },
                "resource could not be read",
            ),
            (
                SourceError::Decode {
                    path: "a.json".to_string(),
                    source: json_error(),
                },
                "resource is not valid JSON",
            ),
            (
                SourceError::Missing {
                    path: "a.json".to_string(),
                },
                "resource not found",
            ),
        ];
        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
            assert_eq!(err.path(), "a.json");
        }
    }

    #[test]
    fn controller_error_keeps_source() {
        let err = ControllerError::Fetch {
            path: "t.json".to_string(),
            source: SourceError::Missing {
                path: "t.json".to_string(),
            },
        };
        assert_eq!(err.to_string(), "failed to fetch t.json");
        assert!(err.source().is_some());

        let err = ControllerError::Parse {
            path: "t.json".to_string(),
            source: ContentError::NoCatalogs,
        };
        assert_eq!(err.to_string(), "failed to parse t.json");
        assert!(err.source().is_some());
    }
}
