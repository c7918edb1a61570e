//! Form state: the draft, its inline errors and the submission state.

use productdesk_cms::CmsError;
use productdesk_core::ValidationErrors;
use productdesk_products::{
    Color, Product, ProductDraft, ProductField, Size, parse_number_input, validate,
    validate_field,
};

use crate::policy::FormPolicy;
use crate::state::{PendingSubmit, SubmissionId, SubmissionState, SubmitError};
use crate::view::FormView;

/// One user interaction with a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    ProductName(String),
    Description(String),
    ToggleSize(Size),
    ToggleColor(Color),
    /// Checkbox change with an explicit checked state.
    SetSize(Size, bool),
    SetColor(Color, bool),
    /// Raw text of the price input.
    Price(String),
    /// Raw text of the inventory input.
    Inventory(String),
}

impl FieldInput {
    pub fn field(&self) -> ProductField {
        match self {
            FieldInput::ProductName(_) => ProductField::ProductName,
            FieldInput::Description(_) => ProductField::Description,
            FieldInput::ToggleSize(_) | FieldInput::SetSize(..) => ProductField::Size,
            FieldInput::ToggleColor(_) | FieldInput::SetColor(..) => ProductField::Color,
            FieldInput::Price(_) => ProductField::Price,
            FieldInput::Inventory(_) => ProductField::ProductInventory,
        }
    }
}

/// The product-creation form.
///
/// Pure state machine: it decides what to send and records how the send
/// ended, but never performs the create call itself (see
/// [`crate::FormController`]).
#[derive(Debug, Clone)]
pub struct ProductForm {
    draft: ProductDraft,
    price_text: String,
    inventory_text: String,
    errors: ValidationErrors,
    state: SubmissionState,
    policy: FormPolicy,
    submit_attempted: bool,
    /// Id of the latest accepted submit.
    submission: Option<SubmissionId>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new(FormPolicy::default())
    }
}

impl ProductForm {
    /// A freshly mounted, empty form.
    pub fn new(policy: FormPolicy) -> Self {
        Self {
            draft: ProductDraft::new(),
            price_text: "0".to_string(),
            inventory_text: "0".to_string(),
            errors: ValidationErrors::new(),
            state: SubmissionState::Idle,
            policy,
            submit_attempted: false,
            submission: None,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Text currently shown in the price input.
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    /// Text currently shown in the inventory input.
    pub fn inventory_text(&self) -> &str {
        &self.inventory_text
    }

    /// Apply one interaction.
    pub fn input(&mut self, input: FieldInput) {
        let field = input.field();
        match input {
            FieldInput::ProductName(v) => self.draft.product_name = v,
            FieldInput::Description(v) => self.draft.description = v,
            FieldInput::ToggleSize(v) => {
                self.draft.size.toggle(v);
            }
            FieldInput::ToggleColor(v) => {
                self.draft.color.toggle(v);
            }
            FieldInput::SetSize(v, checked) => self.draft.size.set(v, checked),
            FieldInput::SetColor(v, checked) => self.draft.color.set(v, checked),
            FieldInput::Price(text) => {
                self.draft.price = parse_number_input(&text);
                self.price_text = text;
            }
            FieldInput::Inventory(text) => {
                self.draft.product_inventory = parse_number_input(&text);
                self.inventory_text = text;
            }
        }
        self.after_edit(field);
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.input(FieldInput::ProductName(name.into()));
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.input(FieldInput::Description(description.into()));
    }

    pub fn toggle_size(&mut self, size: Size) {
        self.input(FieldInput::ToggleSize(size));
    }

    pub fn toggle_color(&mut self, color: Color) {
        self.input(FieldInput::ToggleColor(color));
    }

    pub fn set_price(&mut self, price: f64) {
        self.input(FieldInput::Price(price.to_string()));
    }

    pub fn set_inventory(&mut self, inventory: f64) {
        self.input(FieldInput::Inventory(inventory.to_string()));
    }

    fn after_edit(&mut self, field: ProductField) {
        if self.policy.clear_status_on_edit && self.state.status_message().is_some() {
            self.state = SubmissionState::Idle;
        }
        if self.policy.revalidate_on_change && self.submit_attempted {
            self.errors
                .set_field(field.name(), validate_field(&self.draft, field));
        }
    }

    /// Start a submission.
    ///
    /// Any earlier success/failure banner is cleared. An invalid draft stores
    /// its field errors and stays out of `Submitting`; a valid one enters
    /// `Submitting` and yields the payload for the single create call.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.submit_attempted = true;
        self.state = SubmissionState::Idle;

        match validate(&self.draft) {
            Ok(valid) => {
                let id = self.submission.map_or_else(SubmissionId::first, SubmissionId::next);
                self.submission = Some(id);
                self.errors = ValidationErrors::new();
                self.state = SubmissionState::Submitting;
                Ok(PendingSubmit {
                    id,
                    document: valid.to_document(),
                })
            }
            Err(errors) => {
                tracing::warn!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "product draft rejected by validation"
                );
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// The submit currently waiting on its create call.
    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.submission.filter(|_| self.is_submitting())
    }

    /// Record how the create call of submission `id` ended.
    ///
    /// A result for any submission other than the one in flight is passed
    /// back to the caller but leaves the form untouched.
    pub fn settle(
        &mut self,
        id: SubmissionId,
        result: Result<Product, CmsError>,
    ) -> Result<Product, SubmitError> {
        if self.in_flight() != Some(id) {
            tracing::warn!(
                submission = ?id,
                "ignoring result of a submission that is no longer in flight"
            );
            return result.map_err(SubmitError::Failed);
        }

        match result {
            Ok(product) => {
                tracing::info!(id = %product.id, name = product.name(), "product created");
                self.state = SubmissionState::Succeeded {
                    id: product.id.clone(),
                };
                if self.policy.reset_on_success {
                    self.clear_draft();
                }
                Ok(product)
            }
            Err(e) => {
                tracing::error!(error = %e, "error adding product");
                self.state = SubmissionState::Failed;
                Err(SubmitError::Failed(e))
            }
        }
    }

    /// Leave `Submitting` when the create call of submission `id` will never
    /// settle (the task panicked or was dropped).
    pub fn abandon(&mut self, id: SubmissionId) {
        if self.in_flight() == Some(id) {
            tracing::warn!("submission abandoned before the create call settled");
            self.state = SubmissionState::Failed;
        }
    }

    /// Back to a freshly mounted form, keeping the policy.
    ///
    /// A submission in flight stays in flight: the busy state and the
    /// single-flight guard survive a reset.
    pub fn reset(&mut self) {
        let in_flight = self.is_submitting();
        let submission = self.submission;
        *self = Self::new(self.policy);
        self.submission = submission;
        if in_flight {
            self.state = SubmissionState::Submitting;
        }
    }

    fn clear_draft(&mut self) {
        self.draft = ProductDraft::new();
        self.price_text = "0".to_string();
        self.inventory_text = "0".to_string();
        self.errors = ValidationErrors::new();
        self.submit_attempted = false;
    }

    pub fn view(&self) -> FormView {
        FormView::of(self)
    }
}
