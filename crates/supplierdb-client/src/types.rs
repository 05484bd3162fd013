//! Response shapes specific to the HTTP transport.

use serde::Deserialize;

/// Error body returned by the record API on non-2xx responses.
///
/// Seen as `{"message": "..."}` and as `{"error": {"message": "..."}}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<NestedError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NestedError {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parses an error body; anything unreadable yields no message.
    #[must_use]
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .message
            .or_else(|| parsed.error.and_then(|e| e.message))
            .filter(|m| !m.trim().is_empty())
    }
}
