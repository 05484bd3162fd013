//! In-memory collaborators for unit tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::Notify;

use crate::ports::{ApiError, ConfirmPrompt, NotificationSink, Severity, SupplierApi};
use crate::records::{SupplierRecord, SupplierType};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List,
    Create(Value),
    Update(String, Value),
    Delete(String),
}

#[derive(Default)]
pub(crate) struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    pub records: Vec<SupplierRecord>,
    pub fail_with: Option<ApiError>,
    pub update_has_body: bool,
    /// Returned verbatim from `update` when set.
    pub update_reply: Option<SupplierRecord>,
    /// When set, every call waits for a permit before answering.
    pub gate: Option<Arc<Notify>>,
    pub next_id: AtomicU32,
}

impl FakeApi {
    pub fn failing(err: ApiError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl SupplierApi for FakeApi {
    async fn list(&self) -> Result<Vec<SupplierRecord>, ApiError> {
        self.enter(Call::List).await?;
        Ok(self.records.clone())
    }

    async fn create(&self, body: &Value) -> Result<SupplierRecord, ApiError> {
        self.enter(Call::Create(body.clone())).await?;
        let mut record: SupplierRecord = serde_json::from_value(body.clone())
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let id = 100 + self.next_id.fetch_add(1, Ordering::SeqCst);
        record.id = Some(id.to_string());
        Ok(record)
    }

    async fn update(&self, id: &str, body: &Value) -> Result<Option<SupplierRecord>, ApiError> {
        self.enter(Call::Update(id.to_owned(), body.clone())).await?;
        if let Some(reply) = &self.update_reply {
            return Ok(Some(reply.clone()));
        }
        if !self.update_has_body {
            return Ok(None);
        }
        let mut record: SupplierRecord = serde_json::from_value(body.clone())
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        record.id = Some(id.to_owned());
        Ok(Some(record))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.enter(Call::Delete(id.to_owned())).await
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub seen: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn seen(&self) -> Vec<(Severity, String)> {
        self.seen.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, severity: Severity, message: &str) {
        self.seen.lock().unwrap().push((severity, message.to_owned()));
    }
}

pub(crate) struct ScriptedPrompt {
    pub answer: bool,
    pub asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, question: &str) -> bool {
        self.asked.lock().unwrap().push(question.to_owned());
        self.answer
    }
}

pub(crate) fn record(id: &str, name: &str) -> SupplierRecord {
    SupplierRecord {
        id: Some(id.to_owned()),
        name: name.to_owned(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone_numbers: vec!["11987654321".to_owned()],
        supplier_type: Some(SupplierType::Fabricante),
        note: String::new(),
    }
}
