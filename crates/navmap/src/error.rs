//! Lookup error type.

/// Navigation lookup error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// No node in the map has the requested url.
    #[error("Navigation url not found: {url}")]
    NotFound {
        /// Url that failed to resolve.
        url: String,
    },
}

impl NavError {
    pub(crate) fn not_found(url: &str) -> Self {
        Self::NotFound {
            url: url.to_owned(),
        }
    }
}
