//! Behaviour switches for what happens around a submission.

use serde::{Deserialize, Serialize};

/// Form behaviour around submissions.
///
/// Defaults keep the draft after a successful create (the user can submit
/// the same product again), keep the status banner until the next submit,
/// and re-validate edited fields once a submit has been attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPolicy {
    /// Clear the draft after a successful create.
    pub reset_on_success: bool,
    /// Drop the success/failure banner on the next edit.
    pub clear_status_on_edit: bool,
    /// After the first submit attempt, re-check each field as it is edited.
    pub revalidate_on_change: bool,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            reset_on_success: false,
            clear_status_on_edit: false,
            revalidate_on_change: true,
        }
    }
}

impl FormPolicy {
    pub fn reset_on_success(mut self, enabled: bool) -> Self {
        self.reset_on_success = enabled;
        self
    }

    pub fn clear_status_on_edit(mut self, enabled: bool) -> Self {
        self.clear_status_on_edit = enabled;
        self
    }

    pub fn revalidate_on_change(mut self, enabled: bool) -> Self {
        self.revalidate_on_change = enabled;
        self
    }
}
