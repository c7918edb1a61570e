//! Single-flight submission of a form through a document store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use productdesk_cms::{CmsError, DocumentStore};
use productdesk_products::Product;

use crate::form::{FieldInput, ProductForm};
use crate::policy::FormPolicy;
use crate::state::{SubmissionId, SubmissionState, SubmitError};
use crate::view::FormView;

/// Owns one form instance and the store it submits to.
///
/// The form lock is only held for synchronous steps (edit, begin, settle),
/// never across the create call, so the form stays readable and editable
/// while a submission is in flight.
#[derive(Clone)]
pub struct FormController {
    form: Arc<Mutex<ProductForm>>,
    store: Arc<dyn DocumentStore>,
}

impl FormController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_policy(store, FormPolicy::default())
    }

    pub fn with_policy(store: Arc<dyn DocumentStore>, policy: FormPolicy) -> Self {
        Self {
            form: Arc::new(Mutex::new(ProductForm::new(policy))),
            store,
        }
    }

    /// Apply one interaction.
    pub fn input(&self, input: FieldInput) {
        self.lock().input(input);
    }

    /// Run `f` against the form.
    pub fn edit<R>(&self, f: impl FnOnce(&mut ProductForm) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn view(&self) -> FormView {
        self.lock().view()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state().clone()
    }

    /// Copy of the current form.
    pub fn snapshot(&self) -> ProductForm {
        self.lock().clone()
    }

    /// Validate and, if valid, create the product.
    ///
    /// Issues at most one create call. While it is pending, further submits
    /// fail with [`SubmitError::InFlight`]. The form leaves `Submitting` on
    /// every exit path, including a panicking store or a dropped future.
    pub async fn submit(&self) -> Result<Product, SubmitError> {
        let pending = self.lock().begin_submit()?;
        let in_flight = InFlight::new(&self.form, pending.id);

        tracing::info!(
            submission = ?pending.id,
            product_name = %pending.document.product_name,
            "submitting product"
        );
        let result = self.store.create(&pending.document).await;

        in_flight.settle(result)
    }

    fn lock(&self) -> MutexGuard<'_, ProductForm> {
        lock(&self.form)
    }
}

impl core::fmt::Debug for FormController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

fn lock(form: &Mutex<ProductForm>) -> MutexGuard<'_, ProductForm> {
    // A panic elsewhere must not leave the form stuck; its state is still usable.
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the busy state of one submission when dropped unless its call
/// was settled.
struct InFlight<'a> {
    form: &'a Mutex<ProductForm>,
    id: SubmissionId,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(form: &'a Mutex<ProductForm>, id: SubmissionId) -> Self {
        Self {
            form,
            id,
            settled: false,
        }
    }

    fn settle(mut self, result: Result<Product, CmsError>) -> Result<Product, SubmitError> {
        self.settled = true;
        lock(self.form).settle(self.id, result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            lock(self.form).abandon(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use productdesk_cms::InMemoryDocumentStore;
    use productdesk_products::{Color, Size};

    fn fill(controller: &FormController) {
        controller.edit(|form| {
            form.set_product_name("Shoe");
            form.set_description("A".repeat(25));
            form.toggle_size(Size::M);
            form.toggle_color(Color::Black);
            form.set_price(50.0);
            form.set_inventory(10.0);
        });
    }

    #[tokio::test]
    async fn submit_creates_one_document() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let controller = FormController::new(store.clone());
        fill(&controller);

        let product = controller.submit().await.unwrap();
        assert_eq!(store.create_calls(), 1);
        assert_eq!(store.get(&product.id), Some(product.clone()));
        assert_eq!(controller.state(), SubmissionState::Succeeded { id: product.id });
    }

    #[tokio::test]
    async fn invalid_submit_never_reaches_the_store() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let controller = FormController::new(store.clone());

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(store.create_calls(), 0);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn store_failure_is_reported_and_settled() {
        let store = Arc::new(InMemoryDocumentStore::failing("down for maintenance"));
        let controller = FormController::new(store.clone());
        fill(&controller);

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Failed(CmsError::Unavailable(_))));
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert!(controller.view().has_submit_control());
        assert_eq!(store.create_calls(), 1);
    }
}
