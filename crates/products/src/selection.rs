//! Set-valued field backed by an insertion-ordered, duplicate-free sequence.

use serde::{Deserialize, Deserializer, Serialize};

use productdesk_core::ValueObject;

use crate::options::OptionDomain;

/// Values picked from an [`OptionDomain`].
///
/// Shared by every checkbox group on the form: activating an option appends
/// it, deactivating removes it. The sequence never holds the same value twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection<T: OptionDomain> {
    values: Vec<T>,
}

impl<T: OptionDomain> Default for Selection<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T: OptionDomain> ValueObject for Selection<T> {}

impl<T: OptionDomain> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` if absent, remove it if present.
    ///
    /// Returns whether `value` is selected afterwards.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.contains(value) {
            self.values.retain(|v| *v != value);
            false
        } else {
            self.values.push(value);
            true
        }
    }

    /// Checkbox semantics: `checked` selects, unchecked deselects.
    pub fn set(&mut self, value: T, checked: bool) {
        if checked != self.contains(value) {
            self.toggle(value);
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Stored values, in selection order.
    pub fn values(&self) -> Vec<&'static str> {
        self.values.iter().map(|v| v.value()).collect()
    }
}

impl<T: OptionDomain> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Self::new();
        for value in iter {
            selection.set(value, true);
        }
        selection
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: OptionDomain + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<T>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
