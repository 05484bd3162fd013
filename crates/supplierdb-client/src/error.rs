use supplierdb_core::ApiError;
use thiserror::Error;

/// Errors returned by the supplier record API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No response within the configured request timeout.
    #[error("request to {url} timed out after {after_secs}s")]
    Timeout { url: String, after_secs: u64 },

    /// The API answered with a non-2xx status.
    #[error("record API returned HTTP {status} for {url}")]
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Timeout { after_secs, .. } => ApiError::Timeout { after_secs },
            ClientError::Status {
                status, message, ..
            } => ApiError::Rejected { status, message },
            ClientError::Deserialize { .. } => ApiError::MalformedResponse(err.to_string()),
            ClientError::Http(_) | ClientError::InvalidBaseUrl { .. } => {
                ApiError::Transport(err.to_string())
            }
        }
    }
}
