//! # Error Types
//!
//! Failures surfaced by the client, gateway and store layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no base URL configured (set ENGSTER_BASE_URL or `base_url` in the profile)")]
    MissingBaseUrl,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("'{0}' cannot be sent as a path segment")]
    DotSegment(String),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("profile error: {0}")]
    Profile(String),
}

impl SearchError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_should_expose_code() {
        let err = SearchError::Status {
            status: 404,
            body: "Nothing Found".to_string(),
        };

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "server responded with status 404");
    }

    #[test]
    fn non_status_errors_should_have_no_code() {
        assert_eq!(SearchError::MissingBaseUrl.status(), None);
    }
}
