//! Submission lifecycle.

use serde::Serialize;
use thiserror::Error;

use productdesk_cms::CmsError;
use productdesk_core::{DocumentId, ValidationErrors};
use productdesk_products::ProductDocument;

pub const BUSY_MESSAGE: &str = "Uploading your product...";
pub const SUCCESS_MESSAGE: &str = "Your product has been uploaded successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to upload product. Please try again.";

/// Where the form is in `idle → submitting → (succeeded | failed)`.
///
/// `Succeeded` and `Failed` accept input and a new submit just like `Idle`;
/// they only add a status banner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        id: DocumentId,
    },
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Banner for the status region, if any.
    pub fn status_message(&self) -> Option<StatusMessage> {
        match self {
            SubmissionState::Succeeded { .. } => Some(StatusMessage {
                kind: StatusKind::Success,
                text: SUCCESS_MESSAGE,
            }),
            SubmissionState::Failed => Some(StatusMessage {
                kind: StatusKind::Failure,
                text: FAILURE_MESSAGE,
            }),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }
}

/// Identifies one accepted submit of a form.
///
/// Only the result carrying the current id may move the form out of
/// `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A submit that passed validation: the payload for its one create call.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    pub id: SubmissionId,
    pub document: ProductDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: &'static str,
}

/// Why a submit did not produce a product.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Another submission of this form has not settled yet.
    #[error("a submission is already in progress")]
    InFlight,

    /// The draft broke at least one rule; nothing was sent.
    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),

    /// The create call failed.
    #[error("create failed: {0}")]
    Failed(#[from] CmsError),
}
