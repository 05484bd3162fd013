use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::phones::{self, PhoneWireFormat};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown supplier type \"{0}\" (expected Fabricante, Atacadista, Distribuidor or Varejista)")]
pub struct UnknownSupplierType(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierType {
    Fabricante,
    Atacadista,
    Distribuidor,
    Varejista,
}

impl SupplierType {
    pub const ALL: [SupplierType; 4] = [
        SupplierType::Fabricante,
        SupplierType::Atacadista,
        SupplierType::Distribuidor,
        SupplierType::Varejista,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SupplierType::Fabricante => "Fabricante",
            SupplierType::Atacadista => "Atacadista",
            SupplierType::Distribuidor => "Distribuidor",
            SupplierType::Varejista => "Varejista",
        }
    }
}

impl std::fmt::Display for SupplierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierType {
    type Err = UnknownSupplierType;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSupplierType(s.to_string()))
    }
}

/// A supplier contact record as held in the page cache.
///
/// Field names on the wire follow the record API: `number` for phones,
/// `typeFornecedor` for the supplier type and `message` for the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRecord {
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        rename = "number",
        alias = "fone",
        alias = "phoneNumbers",
        default,
        deserialize_with = "phones::deserialize_lenient"
    )]
    pub phone_numbers: Vec<String>,
    #[serde(
        rename = "typeFornecedor",
        alias = "supplierType",
        default,
        deserialize_with = "deserialize_supplier_type"
    )]
    pub supplier_type: Option<SupplierType>,
    #[serde(rename = "message", alias = "note", default, deserialize_with = "null_as_empty")]
    pub note: String,
}

impl SupplierRecord {
    /// The record as it looks after a successful write: the submitted payload
    /// under the given id.
    #[must_use]
    pub fn from_payload(id: Option<String>, payload: &SupplierPayload) -> Self {
        Self {
            id,
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone_numbers: payload.phone_numbers.clone(),
            supplier_type: Some(payload.supplier_type),
            note: payload.note.clone(),
        }
    }

    /// Takes each non-empty field of `returned` over `self`. The id is kept.
    #[must_use]
    pub fn overlaid_with(mut self, returned: SupplierRecord) -> Self {
        if !returned.name.trim().is_empty() {
            self.name = returned.name;
        }
        if !returned.email.trim().is_empty() {
            self.email = returned.email;
        }
        if !returned.phone_numbers.is_empty() {
            self.phone_numbers = returned.phone_numbers;
        }
        if returned.supplier_type.is_some() {
            self.supplier_type = returned.supplier_type;
        }
        if !returned.note.trim().is_empty() {
            self.note = returned.note;
        }
        self
    }
}

/// Body of a create or update request. Built only from validated form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierPayload {
    pub name: String,
    pub email: String,
    pub phone_numbers: Vec<String>,
    pub supplier_type: SupplierType,
    pub note: String,
}

impl SupplierPayload {
    /// JSON body for the record API, with the phone list encoded as `format`.
    #[must_use]
    pub fn to_wire(&self, format: PhoneWireFormat) -> Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "number": format.encode(&self.phone_numbers),
            "typeFornecedor": self.supplier_type.as_str(),
            "message": self.note,
        })
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Null | Value::String(_) => Ok(None),
        other => Err(serde::de::Error::custom(format!(
            "record id must be a string or number, got {other}"
        ))),
    }
}

fn deserialize_supplier_type<'de, D>(deserializer: D) -> Result<Option<SupplierType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        if s.trim().is_empty() {
            return None;
        }
        s.parse::<SupplierType>()
            .map_err(|err| tracing::debug!(error = %err, "treating supplier type as unset"))
            .ok()
    }))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
