use thiserror::Error;

/// Errors that can occur while querying the recipe service
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not complete
    #[error("Request failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Response body did not match the expected envelope
    #[error("Failed to decode response: {0}")]
    DecodeFailure(String),

    /// Search term was empty after trimming; nothing was queried
    #[error("Search term is empty")]
    EmptyTerm,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl SearchError {
    /// True for failures of the transport or the remote service.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SearchError::NetworkFailure(_) | SearchError::Status { .. }
        )
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::DecodeFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_network() {
        let err = SearchError::Status {
            endpoint: "filter.php".to_string(),
            status: 503,
        };
        assert!(err.is_network());
        assert_eq!(err.to_string(), "filter.php returned HTTP 503");
    }

    #[test]
    fn test_decode_is_not_network() {
        let err: SearchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_network());
        assert!(matches!(err, SearchError::DecodeFailure(_)));
        assert!(!SearchError::EmptyTerm.is_network());
    }
}
