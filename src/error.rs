//! Error types for URL classification and normalization.

use thiserror::Error;

/// Errors returned by the domain, path and parsing operations.
///
/// Every variant is reported straight back to the caller. Nothing in this
/// crate retries, logs, or substitutes a fallback value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlUtilError {
    /// The host is empty but the operation needs one.
    #[error("Missing host in URL structure")]
    HostMissing,

    /// The host has fewer than two dot-separated labels.
    #[error("URL host is malformed")]
    HostMalformed,

    /// The path is empty but the operation needs one.
    #[error("Missing path in URL structure")]
    PathMissing,

    /// The path contains no `/`-separated segments to split on.
    #[error("URL path has no segments")]
    PathPartsEmpty,

    /// The requested split depth lies outside `0..=max`.
    #[error("Path depth {depth} out of range: must be between 0 and {max}")]
    PathDepthOutOfRange {
        /// Depth that was asked for.
        depth: isize,
        /// Deepest depth the path supports.
        max: usize,
    },

    /// A reference string could not be parsed, or the `url` crate rejected it.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for UrlUtilError {
    fn from(err: url::ParseError) -> Self {
        UrlUtilError::InvalidUrl(err.to_string())
    }
}
