use crate::format::NoMatchPolicy;
use crate::phones::PhoneWireFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the record API client and the form core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Base URL of the supplier record API (`GET /`, `POST /`, `PUT /{id}`, `DELETE /{id}`).
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Wire shape used for the phone field in both create and update payloads.
    pub phone_wire_format: PhoneWireFormat,
    /// What the phone formatter shows when the digits are not an 11-digit number.
    pub phone_fallback: NoMatchPolicy,
    pub log_level: String,
}
