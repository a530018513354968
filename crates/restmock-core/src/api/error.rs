//! Errors returned by the remote method API.

use thiserror::Error;

/// Failure of a request against the mock server
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or other transport failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a valid method record
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    #[case(404, "not found")]
    #[case(500, "")]
    fn test_api_error_status_display(#[case] status: u16, #[case] body: &str) {
        let error = ApiError::Status {
            status,
            body: body.to_string(),
        };
        let display = error.to_string();
        assert!(display.contains(&status.to_string()));
        assert!(display.contains(body));
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_api_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ApiError = json_err.into();
        assert!(matches!(error, ApiError::Decode(_)));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("invalid response body"));
    }
}
