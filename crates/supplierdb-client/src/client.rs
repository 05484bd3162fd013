//! HTTP client for the supplier record REST API.
//!
//! Wraps `reqwest` with the API's four routes (`GET /`, `POST /`,
//! `PUT /{id}`, `DELETE /{id}`), typed errors for non-2xx statuses and
//! timeouts, and lenient record deserialization from `supplierdb-core`.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde_json::Value;
use supplierdb_core::{ApiError, SupplierApi, SupplierRecord};

use crate::error::ClientError;
use crate::types::ErrorBody;

/// Client for the supplier record API.
///
/// Use [`SupplierClient::new`] with the configured base URL; tests point it at
/// a wiremock server.
pub struct SupplierClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl SupplierClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so the collection route is the base
        // itself and item routes append one segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            timeout_secs,
        })
    }

    /// `GET /`: every supplier record.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Status`] on a non-2xx status.
    /// - [`ClientError::Timeout`] / [`ClientError::Http`] on transport failure.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of records.
    pub async fn list_suppliers(&self) -> Result<Vec<SupplierRecord>, ClientError> {
        let url = self.base_url.clone();
        let body = self.send(Method::GET, url.clone(), None).await?;
        parse_json(&body, &format!("GET {url}"))
    }

    /// `POST /`: creates a record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Same as [`SupplierClient::list_suppliers`].
    pub async fn create_supplier(&self, payload: &Value) -> Result<SupplierRecord, ClientError> {
        let url = self.base_url.clone();
        let body = self.send(Method::POST, url.clone(), Some(payload)).await?;
        parse_json(&body, &format!("POST {url}"))
    }

    /// `PUT /{id}`: returns the record the backend echoed back, or `None`
    /// when the reply is empty, plain text, a JSON string, or an object
    /// carrying none of the record's fields (such as `{"message": "ok"}`).
    ///
    /// # Errors
    ///
    /// Same as [`SupplierClient::list_suppliers`], plus
    /// [`ClientError::InvalidBaseUrl`] if the id cannot form a path.
    pub async fn update_supplier(
        &self,
        id: &str,
        payload: &Value,
    ) -> Result<Option<SupplierRecord>, ClientError> {
        let url = self.item_url(id)?;
        let body = self.send(Method::PUT, url.clone(), Some(payload)).await?;

        let Ok(reply) = serde_json::from_str::<Value>(&body) else {
            tracing::debug!(%url, "update reply is not JSON; keeping submitted values");
            return Ok(None);
        };
        if !carries_record_fields(&reply) {
            tracing::debug!(%url, "update reply carries no record; keeping submitted values");
            return Ok(None);
        }
        serde_json::from_value(reply)
            .map(Some)
            .map_err(|e| ClientError::Deserialize {
                context: format!("PUT {url}"),
                source: e,
            })
    }

    /// `DELETE /{id}`. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Status`] on a non-2xx status.
    /// - [`ClientError::Timeout`] / [`ClientError::Http`] on transport failure.
    pub async fn delete_supplier(&self, id: &str) -> Result<(), ClientError> {
        let url = self.item_url(id)?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// `{base}/{id}` with the id percent-encoded as a single path segment.
    fn item_url(&self, id: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_owned(),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Sends one request, maps non-2xx statuses and timeouts to typed errors,
    /// and returns the response body as text.
    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<&Value>,
    ) -> Result<String, ClientError> {
        tracing::debug!(%method, %url, "record API request");

        let mut request = self.client.request(method, url.clone());
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| self.classify(&url, e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(&url, e))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: ErrorBody::message_from(&body),
            });
        }
        Ok(body)
    }

    fn classify(&self, url: &Url, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                url: url.to_string(),
                after_secs: self.timeout_secs,
            }
        } else {
            ClientError::Http(err)
        }
    }
}

/// Wire names (and aliases) of the record fields other than `id` and the
/// note, whose `message` name collides with status replies.
const RECORD_FIELDS: [&str; 8] = [
    "name",
    "nome",
    "email",
    "number",
    "fone",
    "phoneNumbers",
    "typeFornecedor",
    "supplierType",
];

fn carries_record_fields(reply: &Value) -> bool {
    reply
        .as_object()
        .is_some_and(|fields| RECORD_FIELDS.iter().any(|name| fields.contains_key(*name)))
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &str, context: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

impl SupplierApi for SupplierClient {
    async fn list(&self) -> Result<Vec<SupplierRecord>, ApiError> {
        Ok(self.list_suppliers().await?)
    }

    async fn create(&self, body: &Value) -> Result<SupplierRecord, ApiError> {
        Ok(self.create_supplier(body).await?)
    }

    async fn update(&self, id: &str, body: &Value) -> Result<Option<SupplierRecord>, ApiError> {
        Ok(self.update_supplier(id, body).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        Ok(self.delete_supplier(id).await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
