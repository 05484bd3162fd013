//! Editable list of phone-number slots backing one supplier form.
//!
//! [`PhoneList`] is a value type: every edit returns a new list and leaves the
//! receiver untouched, so a caller can keep the previous snapshot around (the
//! form re-renders from the latest one on every keystroke).

use thiserror::Error;

use crate::format::PhoneFormatter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneListError {
    #[error("phone slot {index} is out of range (list has {len} slots)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One editable phone entry. Holds the raw text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSlot {
    pub value: String,
}

impl PhoneSlot {
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneList {
    slots: Vec<PhoneSlot>,
}

impl Default for PhoneList {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneList {
    /// A fresh list with a single blank slot at index 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![PhoneSlot::blank()],
        }
    }

    /// Builds a list with one slot per value, or a single blank slot when
    /// `values` is empty.
    #[must_use]
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<PhoneSlot> = values
            .into_iter()
            .map(|v| PhoneSlot { value: v.into() })
            .collect();
        if slots.is_empty() {
            Self::new()
        } else {
            Self { slots }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PhoneSlot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> impl Iterator<Item = &PhoneSlot> {
        self.slots.iter()
    }

    /// Raw slot values in order.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.value.clone()).collect()
    }

    /// `true` when the list has at least one slot and none of them is blank.
    #[must_use]
    pub fn all_filled(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(PhoneSlot::is_filled)
    }

    /// Display strings for every slot, in order.
    #[must_use]
    pub fn display_values(&self, formatter: &PhoneFormatter) -> Vec<String> {
        self.slots
            .iter()
            .map(|s| formatter.format_one(&s.value))
            .collect()
    }

    /// Returns a new list with a blank slot appended.
    #[must_use]
    pub fn append(&self) -> Self {
        let mut slots = self.slots.clone();
        slots.push(PhoneSlot::blank());
        Self { slots }
    }

    /// Returns a new list without the slot at `index`.
    ///
    /// Removing the last remaining slot is allowed here; the form hides the
    /// delete control for slot 0 and validation rejects an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneListError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&self, index: usize) -> Result<Self, PhoneListError> {
        self.check_index(index)?;
        let mut slots = self.slots.clone();
        slots.remove(index);
        Ok(Self { slots })
    }

    /// Returns a new list with slot `index` holding `value`. No formatting
    /// is applied.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneListError::IndexOutOfRange`] if `index >= len`.
    pub fn set_value(&self, index: usize, value: impl Into<String>) -> Result<Self, PhoneListError> {
        self.check_index(index)?;
        let mut slots = self.slots.clone();
        slots[index].value = value.into();
        Ok(Self { slots })
    }

    fn check_index(&self, index: usize) -> Result<(), PhoneListError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(PhoneListError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }
}
