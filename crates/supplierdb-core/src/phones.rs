//! Wire shapes of the phone field and their normalization.
//!
//! The backend has stored phones as a comma-joined string, as an array of
//! strings, and as an array holding one comma-joined string. Reading accepts
//! all of them; writing uses exactly one [`PhoneWireFormat`].

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// The phone field had a JSON shape that cannot be read as phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed phone field: expected string or array of strings, got {found}")]
pub struct MalformedRecord {
    pub found: String,
}

/// How the phone list is serialized in create and update payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneWireFormat {
    /// `"number": ["11987654321", "2133334444"]`
    #[default]
    List,
    /// `"number": "11987654321,2133334444"`
    Joined,
}

impl PhoneWireFormat {
    /// Encodes an ordered phone list as the JSON value sent to the backend.
    #[must_use]
    pub fn encode(self, phones: &[String]) -> Value {
        match self {
            Self::List => Value::Array(phones.iter().cloned().map(Value::String).collect()),
            Self::Joined => Value::String(phones.join(",")),
        }
    }
}

impl FromStr for PhoneWireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "joined" => Ok(Self::Joined),
            other => Err(format!("expected list or joined, got \"{other}\"")),
        }
    }
}

/// Normalizes any accepted phone shape into an ordered list of raw phones.
///
/// Strings are split on `,`, pieces trimmed, and empty pieces dropped.
/// `null` yields an empty list.
///
/// # Errors
///
/// Returns [`MalformedRecord`] for numbers, booleans, objects, or arrays
/// holding anything other than strings.
pub fn normalize_phone_value(value: &Value) -> Result<Vec<String>, MalformedRecord> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(split_joined(s)),
        Value::Array(items) => {
            let mut phones = Vec::new();
            for item in items {
                match item {
                    Value::String(s) => phones.extend(split_joined(s)),
                    other => {
                        return Err(MalformedRecord {
                            found: format!("array containing {}", kind_of(other)),
                        })
                    }
                }
            }
            Ok(phones)
        }
        other => Err(MalformedRecord {
            found: kind_of(other).to_string(),
        }),
    }
}

fn split_joined(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serde hook for the record's phone field. Malformed shapes become an empty
/// list instead of failing the whole record.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_phone_value(&value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring unreadable phone field");
        Vec::new()
    }))
}
