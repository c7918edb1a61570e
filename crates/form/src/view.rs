//! What a front end draws for the form.

use serde::Serialize;

use productdesk_products::{Color, OptionDomain, ProductField, Selection};

use crate::form::ProductForm;
use crate::state::{BUSY_MESSAGE, StatusKind, StatusMessage};

/// Snapshot of the rendered surface.
///
/// `submit` and `busy` are never both present: while a create call is in
/// flight the submit control is replaced by the busy indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit: Option<SubmitControl>,
    pub busy: Option<&'static str>,
    pub message: Option<StatusMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub field: ProductField,
    pub label: &'static str,
    pub control: Control,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Control {
    Text {
        value: String,
        placeholder: &'static str,
    },
    Number {
        value: String,
        placeholder: &'static str,
    },
    Checkboxes {
        options: Vec<CheckboxOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub label: &'static str,
}

/// One checkbox per option of `T`, checked when selected.
fn checkbox_group<T: OptionDomain>(
    selection: &Selection<T>,
    swatch: impl Fn(T) -> Option<&'static str>,
) -> Control {
    Control::Checkboxes {
        options: T::all()
            .iter()
            .map(|&option| CheckboxOption {
                value: option.value(),
                label: option.label(),
                checked: selection.contains(option),
                swatch: swatch(option),
            })
            .collect(),
    }
}

impl FormView {
    pub(crate) fn of(form: &ProductForm) -> Self {
        let draft = form.draft();
        let field = |field: ProductField, label: &'static str, control: Control| FieldView {
            field,
            label,
            control,
            errors: form.errors().for_field(field.name()).to_vec(),
        };

        let fields = vec![
            field(
                ProductField::ProductName,
                "Product Name",
                Control::Text {
                    value: draft.product_name.clone(),
                    placeholder: "Product Name",
                },
            ),
            field(
                ProductField::Description,
                "Description",
                Control::Text {
                    value: draft.description.clone(),
                    placeholder: "Description",
                },
            ),
            field(ProductField::Size, "Size", checkbox_group(&draft.size, |_| None)),
            field(
                ProductField::Color,
                "Color",
                checkbox_group(&draft.color, |c: Color| Some(c.hex())),
            ),
            field(
                ProductField::Price,
                "Price",
                Control::Number {
                    value: form.price_text().to_string(),
                    placeholder: "Price",
                },
            ),
            field(
                ProductField::ProductInventory,
                "Product Inventory",
                Control::Number {
                    value: form.inventory_text().to_string(),
                    placeholder: "Inventory",
                },
            ),
        ];

        let submitting = form.is_submitting();
        Self {
            fields,
            submit: (!submitting).then_some(SubmitControl { label: "Submit" }),
            busy: submitting.then_some(BUSY_MESSAGE),
            message: form.state().status_message(),
        }
    }

    pub fn field(&self, field: ProductField) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn has_submit_control(&self) -> bool {
        self.submit.is_some()
    }
}

impl core::fmt::Display for FormView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for field in &self.fields {
            write!(f, "{}: ", field.label)?;
            match &field.control {
                Control::Text { value, .. } | Control::Number { value, .. } => {
                    write!(f, "[{value}]")?;
                }
                Control::Checkboxes { options } => {
                    for (idx, option) in options.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(" ")?;
                        }
                        let mark = if option.checked { 'x' } else { ' ' };
                        write!(f, "[{mark}] {}", option.label)?;
                    }
                }
            }
            writeln!(f)?;
            for error in &field.errors {
                writeln!(f, "  ! {error}")?;
            }
        }

        if let Some(submit) = &self.submit {
            writeln!(f, "[ {} ]", submit.label)?;
        }
        if let Some(busy) = self.busy {
            writeln!(f, "{busy}")?;
        }
        if let Some(message) = &self.message {
            let prefix = match message.kind {
                StatusKind::Success => "✓",
                StatusKind::Failure => "✗",
            };
            writeln!(f, "{prefix} {}", message.text)?;
        }
        Ok(())
    }
}
