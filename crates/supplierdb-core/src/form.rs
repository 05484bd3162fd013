//! Local editable state of the supplier create/update form.

use thiserror::Error;

use crate::phone_list::{PhoneList, PhoneListError};
use crate::records::{SupplierPayload, SupplierRecord, SupplierType, UnknownSupplierType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phones,
    SupplierType,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Email => write!(f, "email"),
            FormField::Phones => write!(f, "phone numbers"),
            FormField::SupplierType => write!(f, "supplier type"),
        }
    }
}

/// First required field found empty during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: FormField,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("record has no id and cannot be edited")]
    MissingRecordId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub email: String,
    pub supplier_type: Option<SupplierType>,
    pub note: String,
    phones: PhoneList,
    edit_target: Option<String>,
}

impl SupplierForm {
    /// Blank form for a new record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-populated from an existing record. The record's id becomes
    /// the edit target, so submitting updates instead of creating.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingRecordId`] if the record was never
    /// assigned an id by the backend.
    pub fn for_edit(record: &SupplierRecord) -> Result<Self, FormError> {
        let id = record.id.clone().ok_or(FormError::MissingRecordId)?;
        Ok(Self {
            name: record.name.clone(),
            email: record.email.clone(),
            supplier_type: record.supplier_type,
            note: record.note.clone(),
            phones: PhoneList::from_values(record.phone_numbers.iter().cloned()),
            edit_target: Some(id),
        })
    }

    #[must_use]
    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    #[must_use]
    pub fn phones(&self) -> &PhoneList {
        &self.phones
    }

    pub fn add_phone(&mut self) {
        self.phones = self.phones.append();
    }

    /// # Errors
    ///
    /// Returns [`PhoneListError::IndexOutOfRange`] for an index past the end.
    pub fn remove_phone(&mut self, index: usize) -> Result<(), PhoneListError> {
        self.phones = self.phones.remove_at(index)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PhoneListError::IndexOutOfRange`] for an index past the end.
    pub fn set_phone(&mut self, index: usize, value: impl Into<String>) -> Result<(), PhoneListError> {
        self.phones = self.phones.set_value(index, value)?;
        Ok(())
    }

    /// Replaces the whole phone list, keeping at least one slot.
    pub fn replace_phones<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones = PhoneList::from_values(values);
    }

    /// Sets the supplier type from the select widget's value; `""` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSupplierType`] for any other unrecognized value. The
    /// current selection is left unchanged in that case.
    pub fn select_supplier_type(&mut self, raw: &str) -> Result<(), UnknownSupplierType> {
        self.supplier_type = if raw.trim().is_empty() {
            None
        } else {
            Some(raw.parse()?)
        };
        Ok(())
    }

    /// Checks the required fields in display order and builds the request
    /// payload from trimmed values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: name, email, phones (at
    /// least one slot, none blank), supplier type.
    pub fn validate(&self) -> Result<SupplierPayload, ValidationError> {
        let require = |value: &str, field| {
            if value.trim().is_empty() {
                Err(ValidationError { field })
            } else {
                Ok(value.trim().to_string())
            }
        };

        let name = require(&self.name, FormField::Name)?;
        let email = require(&self.email, FormField::Email)?;
        if !self.phones.all_filled() {
            return Err(ValidationError {
                field: FormField::Phones,
            });
        }
        let supplier_type = self.supplier_type.ok_or(ValidationError {
            field: FormField::SupplierType,
        })?;

        Ok(SupplierPayload {
            name,
            email,
            phone_numbers: self
                .phones
                .slots()
                .map(|s| s.value.trim().to_string())
                .collect(),
            supplier_type,
            note: self.note.clone(),
        })
    }

    /// Back to a blank create form: one blank phone slot, no edit target.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
