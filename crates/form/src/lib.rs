//! `productdesk-form`
//!
//! **Responsibility:** the product-creation form.
//!
//! - `ProductForm`: draft, inline errors and submission state (no IO)
//! - `FormController`: single-flight submission through a `DocumentStore`
//! - `FormView`: what a front end draws, with a plain-text rendering

pub mod controller;
pub mod form;
pub mod policy;
pub mod state;
pub mod view;

pub use controller::FormController;
pub use form::{FieldInput, ProductForm};
pub use policy::FormPolicy;
pub use state::{
    BUSY_MESSAGE, FAILURE_MESSAGE, PendingSubmit, StatusKind, StatusMessage, SUCCESS_MESSAGE,
    SubmissionId, SubmissionState, SubmitError,
};
pub use view::{CheckboxOption, Control, FieldView, FormView, SubmitControl};
