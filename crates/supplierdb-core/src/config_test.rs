use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_rejects_unknown() {
    assert!(parse_environment("staging").is_err());
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.api_url, "http://localhost:8800");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "supplierdb/0.1 (supplier-records)");
    assert_eq!(cfg.phone_wire_format, PhoneWireFormat::List);
    assert_eq!(cfg.phone_fallback, NoMatchPolicy::StrippedDigits);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_ENV", "production");
    map.insert("SUPPLIERDB_API_URL", "https://suppliers.example.com/api");
    map.insert("SUPPLIERDB_REQUEST_TIMEOUT_SECS", "30");
    map.insert("SUPPLIERDB_PHONE_WIRE_FORMAT", "joined");
    map.insert("SUPPLIERDB_PHONE_FALLBACK", "original");
    map.insert("SUPPLIERDB_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.api_url, "https://suppliers.example.com/api");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.phone_wire_format, PhoneWireFormat::Joined);
    assert_eq!(cfg.phone_fallback, NoMatchPolicy::OriginalInput);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_rejects_unknown_env() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIERDB_ENV"),
        "expected InvalidEnvVar(SUPPLIERDB_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_http_api_url() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_API_URL", "localhost:8800");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIERDB_API_URL"),
        "expected InvalidEnvVar(SUPPLIERDB_API_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIERDB_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SUPPLIERDB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIERDB_REQUEST_TIMEOUT_SECS"
    ));
}

#[test]
fn build_app_config_rejects_unknown_wire_format() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_PHONE_WIRE_FORMAT", "csv");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIERDB_PHONE_WIRE_FORMAT"
    ));
}

#[test]
fn build_app_config_rejects_unknown_phone_fallback() {
    let mut map = HashMap::new();
    map.insert("SUPPLIERDB_PHONE_FALLBACK", "partial");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SUPPLIERDB_PHONE_FALLBACK"
    ));
}
