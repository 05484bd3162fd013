//! Page-level state: the cached record list, the row selection, the modal and
//! the form it hosts. Components receive this by `&mut` and never reach for
//! it implicitly.

use thiserror::Error;

use crate::form::{FormError, SupplierForm};
use crate::ports::{ConfirmPrompt, NotificationSink, Severity, SupplierApi};
use crate::records::SupplierRecord;
use crate::submit::{RecordSubmitter, SubmitError, SubmitOutcome};

pub const DELETE_QUESTION: &str = "Are you sure you want to delete this supplier?";
pub const DELETED_MESSAGE: &str = "Supplier deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete supplier";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load suppliers";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("select exactly one supplier to edit ({selected} selected)")]
    NothingToEdit { selected: usize },

    #[error("supplier {0} is not in the loaded list")]
    UnknownRecord(String),

    #[error("invalid supplier id")]
    InvalidId,

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The API call failed; the cache is unchanged.
    Failed,
}

#[derive(Debug, Default)]
pub struct SupplierPage {
    records: Vec<SupplierRecord>,
    selected: Vec<String>,
    modal_open: bool,
    form: SupplierForm,
}

impl SupplierPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<SupplierRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn records(&self) -> &[SupplierRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, id: &str) -> Option<&SupplierRecord> {
        self.records.iter().find(|r| r.id.as_deref() == Some(id))
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn form(&self) -> &SupplierForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SupplierForm {
        &mut self.form
    }

    /// Reloads the cache from `GET /`. On failure the previous cache stays
    /// and an error notification is emitted.
    ///
    /// Returns `true` when the cache was replaced.
    pub async fn refresh<A, N>(&mut self, api: &A, notifier: &N) -> bool
    where
        A: SupplierApi,
        N: NotificationSink + ?Sized,
    {
        match api.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "supplier list loaded");
                self.selected
                    .retain(|id| records.iter().any(|r| r.id.as_deref() == Some(id)));
                self.records = records;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load suppliers");
                notifier.notify(Severity::Error, LOAD_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Adds `id` to the selection, or removes it if already selected.
    pub fn toggle_selection(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_owned());
        }
    }

    #[must_use]
    pub fn edit_enabled(&self) -> bool {
        self.selected.len() == 1
    }

    #[must_use]
    pub fn delete_enabled(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Opens the modal with a blank create form.
    pub fn open_create(&mut self) {
        self.form = SupplierForm::new();
        self.modal_open = true;
    }

    /// Opens the modal with a form hydrated from the single selected row.
    ///
    /// # Errors
    ///
    /// - [`PageError::NothingToEdit`] unless exactly one row is selected.
    /// - [`PageError::UnknownRecord`] if the selected id is not cached.
    /// - [`PageError::Form`] if the cached record has no id.
    pub fn open_edit(&mut self) -> Result<(), PageError> {
        let [id] = self.selected.as_slice() else {
            return Err(PageError::NothingToEdit {
                selected: self.selected.len(),
            });
        };
        let record = self
            .record(id)
            .ok_or_else(|| PageError::UnknownRecord(id.clone()))?;
        self.form = SupplierForm::for_edit(record)?;
        self.modal_open = true;
        Ok(())
    }

    /// Hides the modal. The form keeps whatever was typed.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Submits the hosted form; closes the modal on success.
    ///
    /// # Errors
    ///
    /// See [`RecordSubmitter::submit`].
    pub async fn submit<A, N>(
        &mut self,
        submitter: &RecordSubmitter<A>,
        notifier: &N,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        A: SupplierApi,
        N: NotificationSink + ?Sized,
    {
        let outcome = submitter
            .submit(&mut self.form, &mut self.records, notifier)
            .await?;
        self.modal_open = false;
        Ok(outcome)
    }

    /// Deletes one record after the user confirms.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidId`] for a blank id, before prompting.
    pub async fn delete<A, P, N>(
        &mut self,
        id: &str,
        api: &A,
        prompt: &P,
        notifier: &N,
    ) -> Result<DeleteOutcome, PageError>
    where
        A: SupplierApi,
        P: ConfirmPrompt + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let id = id.trim();
        if id.is_empty() {
            return Err(PageError::InvalidId);
        }

        if !prompt.confirm(DELETE_QUESTION) {
            tracing::debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match api.delete(id).await {
            Ok(()) => {
                self.records.retain(|r| r.id.as_deref() != Some(id));
                self.selected.retain(|s| s != id);
                tracing::info!(id, "supplier deleted");
                notifier.notify(Severity::Success, DELETED_MESSAGE);
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                tracing::error!(id, error = %err, "failed to delete supplier");
                notifier.notify(
                    Severity::Error,
                    err.backend_message().unwrap_or(DELETE_FAILED_MESSAGE),
                );
                Ok(DeleteOutcome::Failed)
            }
        }
    }

    /// Deletes the first selected row (the toolbar delete button).
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidId`] when nothing is selected.
    pub async fn delete_selected<A, P, N>(
        &mut self,
        api: &A,
        prompt: &P,
        notifier: &N,
    ) -> Result<DeleteOutcome, PageError>
    where
        A: SupplierApi,
        P: ConfirmPrompt + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let id = self.selected.first().cloned().ok_or(PageError::InvalidId)?;
        self.delete(&id, api, prompt, notifier).await
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
