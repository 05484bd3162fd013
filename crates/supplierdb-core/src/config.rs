use crate::app_config::{AppConfig, Environment};
use crate::format::NoMatchPolicy;
use crate::phones::PhoneWireFormat;
use crate::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8800";
pub const DEFAULT_USER_AGENT: &str = "supplierdb/0.1 (supplier-records)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("SUPPLIERDB_ENV", "development"))
        .map_err(|reason| invalid("SUPPLIERDB_ENV", reason))?;

    let api_url = or_default("SUPPLIERDB_API_URL", DEFAULT_API_URL);
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(invalid(
            "SUPPLIERDB_API_URL",
            format!("expected an http(s) URL, got \"{api_url}\""),
        ));
    }

    let request_timeout_secs = or_default("SUPPLIERDB_REQUEST_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("SUPPLIERDB_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "SUPPLIERDB_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let user_agent = or_default("SUPPLIERDB_USER_AGENT", DEFAULT_USER_AGENT);

    let phone_wire_format = or_default("SUPPLIERDB_PHONE_WIRE_FORMAT", "list")
        .parse::<PhoneWireFormat>()
        .map_err(|reason| invalid("SUPPLIERDB_PHONE_WIRE_FORMAT", reason))?;

    let phone_fallback = or_default("SUPPLIERDB_PHONE_FALLBACK", "digits")
        .parse::<NoMatchPolicy>()
        .map_err(|reason| invalid("SUPPLIERDB_PHONE_FALLBACK", reason))?;

    let log_level = or_default("SUPPLIERDB_LOG_LEVEL", "info");

    Ok(AppConfig {
        env,
        api_url,
        request_timeout_secs,
        user_agent,
        phone_wire_format,
        phone_fallback,
        log_level,
    })
}

fn parse_environment(s: &str) -> Result<Environment, String> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(format!(
            "expected development, test or production, got \"{other}\""
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
