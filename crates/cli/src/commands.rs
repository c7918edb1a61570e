//! Subcommand bodies. Each returns whether the command succeeded; only
//! setup problems (bad config, unwritable stdout) become errors.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use productdesk_cms::{CmsConfig, DocumentStore, HttpCmsClient, InMemoryDocumentStore};
use productdesk_form::{FormController, FormPolicy, ProductForm};
use productdesk_core::Entity;
use productdesk_products::{product_schema, validate};

use crate::cli::ProductArgs;

pub async fn create(
    fields: &ProductArgs,
    dry_run: bool,
    reset_on_success: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let store: Arc<dyn DocumentStore> = if dry_run {
        tracing::info!("dry run: documents are kept in memory");
        Arc::new(InMemoryDocumentStore::new())
    } else {
        let config = CmsConfig::from_env().context("CMS configuration")?;
        let client = HttpCmsClient::new(config).context("failed to build CMS client")?;
        tracing::debug!(
            project = client.config().project_id(),
            dataset = client.config().dataset(),
            url = %client.config().mutate_url(),
            "using CMS"
        );
        Arc::new(client)
    };

    let policy = FormPolicy::default().reset_on_success(reset_on_success);
    let controller = FormController::with_policy(store, policy);
    for input in fields.inputs() {
        controller.input(input);
    }

    let result = controller.submit().await;
    write!(out, "{}", controller.view())?;
    match result {
        Ok(product) => {
            writeln!(out, "id: {}", product.id())?;
            if let Some(revision) = product.revision() {
                writeln!(out, "revision: {revision}")?;
            }
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

pub fn check(fields: &ProductArgs, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut form = ProductForm::default();
    for input in fields.inputs() {
        form.input(input);
    }

    match validate(form.draft()) {
        Ok(_) => {
            writeln!(out, "ok")?;
            Ok(true)
        }
        Err(errors) => {
            for entry in errors.iter() {
                writeln!(out, "{}: {}", entry.field, entry.messages.join("; "))?;
            }
            Ok(false)
        }
    }
}

pub fn schema(out: &mut impl Write) -> anyhow::Result<bool> {
    let json = serde_json::to_string_pretty(&product_schema())?;
    writeln!(out, "{json}")?;
    Ok(true)
}
