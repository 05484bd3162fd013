//! Create/update orchestration for the supplier form.
//!
//! A submission moves `Idle → Validating → Dispatching → Idle`. Validation
//! failures never reach the network. While one submission is in flight the
//! submitter refuses another with [`SubmitError::Busy`]; the phase is reset
//! by a drop guard, so a cancelled submission re-enables the control.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;

use crate::form::{SupplierForm, ValidationError};
use crate::phones::PhoneWireFormat;
use crate::ports::{ApiError, NotificationSink, Severity, SupplierApi};
use crate::records::{SupplierPayload, SupplierRecord};

pub const MISSING_FIELDS_MESSAGE: &str = "Fill in all required fields!";
pub const CREATED_MESSAGE: &str = "Supplier created successfully";
pub const UPDATED_MESSAGE: &str = "Supplier updated successfully";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save supplier";

/// Where the submitter currently is. Rejection and settlement are not
/// phases of their own: they end the call, are reported through its
/// `Result`, and leave the submitter `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Dispatching,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(SupplierRecord),
    Updated(SupplierRecord),
}

impl SubmitOutcome {
    #[must_use]
    pub fn record(&self) -> &SupplierRecord {
        match self {
            SubmitOutcome::Created(record) | SubmitOutcome::Updated(record) => record,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("saving supplier failed: {0}")]
    Network(#[from] ApiError),

    #[error("a submission is already in flight")]
    Busy,
}

pub struct RecordSubmitter<A> {
    api: A,
    wire_format: PhoneWireFormat,
    timeout: Duration,
    phase: Mutex<SubmitPhase>,
}

impl<A: SupplierApi> RecordSubmitter<A> {
    #[must_use]
    pub fn new(api: A, wire_format: PhoneWireFormat, timeout: Duration) -> Self {
        Self {
            api,
            wire_format,
            timeout,
            phase: Mutex::new(SubmitPhase::Idle),
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.phase() == SubmitPhase::Idle
    }

    /// Validates `form` and creates or updates the record it describes.
    ///
    /// On success the cached list is updated (append on create, in-place
    /// replace on update), the form is reset and a success notification is
    /// emitted. On failure the form and its edit target are left as they
    /// were so the user can retry.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Busy`] if another submission has not settled yet.
    /// - [`SubmitError::Validation`] for the first empty required field; no
    ///   request is sent.
    /// - [`SubmitError::Network`] if the API call fails or times out.
    pub async fn submit<N>(
        &self,
        form: &mut SupplierForm,
        cache: &mut Vec<SupplierRecord>,
        notifier: &N,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        N: NotificationSink + ?Sized,
    {
        let Some(_guard) = self.begin() else {
            tracing::debug!("ignoring submit while a request is in flight");
            return Err(SubmitError::Busy);
        };

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(field = %err.field, "supplier form rejected");
                notifier.notify(Severity::Warn, MISSING_FIELDS_MESSAGE);
                return Err(err.into());
            }
        };

        self.set_phase(SubmitPhase::Dispatching);
        let target = form.edit_target().map(str::to_owned);
        let result = self.dispatch(target.as_deref(), &payload).await;

        match result {
            Ok(outcome) => {
                apply_to_cache(cache, &outcome);
                form.reset();
                let message = match outcome {
                    SubmitOutcome::Created(_) => CREATED_MESSAGE,
                    SubmitOutcome::Updated(_) => UPDATED_MESSAGE,
                };
                tracing::info!(id = ?outcome.record().id, "{message}");
                notifier.notify(Severity::Success, message);
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(id = ?target, error = %err, "saving supplier failed");
                notifier.notify(
                    Severity::Error,
                    err.backend_message().unwrap_or(SAVE_FAILED_MESSAGE),
                );
                Err(err.into())
            }
        }
    }

    async fn dispatch(
        &self,
        target: Option<&str>,
        payload: &SupplierPayload,
    ) -> Result<SubmitOutcome, ApiError> {
        tokio::time::timeout(self.timeout, self.call_api(target, payload))
            .await
            .map_err(|_| ApiError::Timeout {
                after_secs: whole_secs_rounded_up(self.timeout),
            })?
    }

    async fn call_api(
        &self,
        target: Option<&str>,
        payload: &SupplierPayload,
    ) -> Result<SubmitOutcome, ApiError> {
        let body = payload.to_wire(self.wire_format);
        let Some(id) = target else {
            return self.api.create(&body).await.map(SubmitOutcome::Created);
        };

        // The reply may be missing or partial; what was sent fills the gaps
        // and the row keeps the target id.
        let sent = SupplierRecord::from_payload(Some(id.to_owned()), payload);
        let record = match self.api.update(id, &body).await? {
            Some(returned) => sent.overlaid_with(returned),
            None => sent,
        };
        Ok(SubmitOutcome::Updated(record))
    }

    fn begin(&self) -> Option<PhaseGuard<'_>> {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase != SubmitPhase::Idle {
            return None;
        }
        *phase = SubmitPhase::Validating;
        Some(PhaseGuard { phase: &self.phase })
    }

    fn set_phase(&self, next: SubmitPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

struct PhaseGuard<'a> {
    phase: &'a Mutex<SubmitPhase>,
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = SubmitPhase::Idle;
    }
}

fn whole_secs_rounded_up(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

fn apply_to_cache(cache: &mut Vec<SupplierRecord>, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Created(record) => cache.push(record.clone()),
        SubmitOutcome::Updated(record) => {
            match cache.iter_mut().find(|r| r.id.is_some() && r.id == record.id) {
                Some(slot) => *slot = record.clone(),
                None => cache.push(record.clone()),
            }
        }
    }
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
