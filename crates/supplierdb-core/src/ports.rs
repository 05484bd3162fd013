//! Collaborators the core drives but does not implement: the record API,
//! the notification sink and the confirmation prompt.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::records::SupplierRecord;

/// Failure of one call to the record API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error("record API returned HTTP {status}")]
    Rejected {
        status: u16,
        /// `message` from the error body, when the backend sent one.
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// The backend's own explanation, if it provided one.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// The supplier record REST API.
///
/// Bodies are already in wire form; the caller decides how the phone list is
/// encoded.
pub trait SupplierApi {
    /// `GET /`
    fn list(&self) -> impl Future<Output = Result<Vec<SupplierRecord>, ApiError>> + Send;

    /// `POST /`: returns the created record, id included.
    fn create(&self, body: &Value)
        -> impl Future<Output = Result<SupplierRecord, ApiError>> + Send;

    /// `PUT /{id}`: returns the updated record, or `None` when the backend
    /// answers without one.
    fn update(
        &self,
        id: &str,
        body: &Value,
    ) -> impl Future<Output = Result<Option<SupplierRecord>, ApiError>> + Send;

    /// `DELETE /{id}`
    fn delete(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warn => write!(f, "warn"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Fire-and-forget user notifications (toasts in a browser, lines on a terminal).
pub trait NotificationSink {
    fn notify(&self, severity: Severity, message: &str);
}

/// Yes/no challenge shown before a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, question: &str) -> bool;
}
