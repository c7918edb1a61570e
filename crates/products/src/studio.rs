//! Studio adapter: the product type as the CMS studio declares and enforces it.
//!
//! The declaration mirrors the studio's `defineType`/`defineField` shape so it
//! can be serialized and handed to the studio build, and
//! [`validate_document`] re-checks raw documents on the server side with the
//! same [`PRODUCT_RULES`].

use serde::Serialize;
use serde_json::{Value, json};

use productdesk_core::ValidationErrors;

use crate::draft::FieldValue;
use crate::options::OptionEntry;
use crate::product::PRODUCT_TYPE;
use crate::rules::{FieldRule, PRODUCT_RULES, RuleKind, Violation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSchema {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub of: Vec<TypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
    pub validation: Vec<RuleSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRef {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOptions {
    pub list: Vec<ListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListItem {
    Titled(OptionEntry),
    Plain(&'static str),
}

/// One link of a studio validation chain (`Rule.required().min(3)...`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleSpec {
    Required,
    Unique,
    Integer,
    Min(Value),
    Max(Value),
    Error(&'static str),
}

/// Declaration of the `product` document type.
pub fn product_schema() -> DocumentSchema {
    DocumentSchema {
        name: PRODUCT_TYPE,
        title: "Product",
        kind: "document",
        fields: PRODUCT_RULES.iter().map(field_schema).collect(),
    }
}

fn field_schema(rule: &FieldRule) -> FieldSchema {
    let mut validation = Vec::new();
    if rule.required {
        validation.push(RuleSpec::Required);
    }

    let (kind, of, options) = match rule.kind {
        RuleKind::Text { min, max, multiline } => {
            validation.push(RuleSpec::Min(json!(min)));
            validation.push(RuleSpec::Max(json!(max)));
            (if multiline { "text" } else { "string" }, Vec::new(), None)
        }
        RuleKind::Number { min, max, integer } => {
            if integer {
                validation.push(RuleSpec::Integer);
            }
            validation.push(RuleSpec::Min(bound(min)));
            validation.push(RuleSpec::Max(bound(max)));
            ("number", Vec::new(), None)
        }
        RuleKind::Options {
            options,
            min,
            unique,
            titled,
            layout,
        } => {
            if unique {
                validation.push(RuleSpec::Unique);
            }
            validation.push(RuleSpec::Min(json!(min)));
            let list = options()
                .into_iter()
                .map(|entry| {
                    if titled {
                        ListItem::Titled(entry)
                    } else {
                        ListItem::Plain(entry.value)
                    }
                })
                .collect();
            (
                "array",
                vec![TypeRef { kind: "string" }],
                Some(FieldOptions { list, layout }),
            )
        }
    };
    validation.push(RuleSpec::Error(rule.messages.studio));

    FieldSchema {
        name: rule.field.name(),
        title: rule.title,
        kind,
        of,
        options,
        validation,
    }
}

fn bound(v: f64) -> Value {
    if v.fract() == 0.0 {
        json!(v as i64)
    } else {
        json!(v)
    }
}

/// Server-side check of a raw `product` document.
pub fn validate_document(document: &Value) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(object) = document.as_object() else {
        errors.push("_type", "Expected a document object");
        return Err(errors);
    };

    if object.get("_type").and_then(Value::as_str) != Some(PRODUCT_TYPE) {
        errors.push("_type", format!("Expected document type {PRODUCT_TYPE:?}"));
    }

    for rule in &PRODUCT_RULES {
        let violations = match object.get(rule.field.name()) {
            None | Some(Value::Null) if rule.required => vec![Violation::Missing],
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => match field_value(raw) {
                Some(value) => rule.check(&value),
                None => vec![Violation::WrongType {
                    expected: rule.kind.type_name(),
                }],
            },
        };

        let mut messages: Vec<String> = Vec::new();
        for violation in &violations {
            let message = studio_message(rule, violation);
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
        errors.set_field(rule.field.name(), messages);
    }

    errors.into_result(())
}

fn field_value(raw: &Value) -> Option<FieldValue<'_>> {
    match raw {
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::Array(items) => items
            .iter()
            .map(Value::as_str)
            .collect::<Option<Vec<_>>>()
            .map(FieldValue::Options),
        _ => None,
    }
}

fn studio_message(rule: &FieldRule, violation: &Violation) -> String {
    match violation {
        v if v.is_bound() => rule.messages.studio.to_string(),
        Violation::Missing => "Required".to_string(),
        Violation::WrongType { expected } => format!("Expected type {expected:?}"),
        Violation::NotANumber => format!("Expected type {:?}", rule.kind.type_name()),
        Violation::NotAnInteger => "Must be an integer".to_string(),
        Violation::NotAllowed(v) => format!("Value {v:?} did not match any allowed values"),
        Violation::Duplicate(_) => "Can't be a duplicate".to_string(),
        _ => rule.messages.studio.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_document() -> Value {
        json!({
            "_type": "product",
            "productName": "Shoe",
            "description": "A".repeat(25),
            "size": ["M"],
            "color": ["Black"],
            "price": 50,
            "product_inventory": 10
        })
    }

    #[test]
    fn declaration_matches_the_studio_shape() {
        let schema = serde_json::to_value(product_schema()).unwrap();
        assert_eq!(schema["name"], "product");
        assert_eq!(schema["type"], "document");

        let fields = schema["fields"].as_array().unwrap();
        let names: Vec<_> = fields.iter().map(|f| f["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["productName", "description", "size", "color", "price", "product_inventory"]
        );

        assert_eq!(
            fields[0]["validation"],
            json!(["required", {"min": 3}, {"max": 20},
                   {"error": "Product name must be between 3 and 20 characters"}])
        );
        assert_eq!(fields[1]["type"], "text");
        assert_eq!(fields[2]["of"], json!([{"type": "string"}]));
        assert_eq!(fields[2]["options"]["layout"], "grid");
        assert_eq!(fields[2]["options"]["list"][0], json!({"title": "XL", "value": "Xl"}));
        assert_eq!(fields[3]["options"]["list"], json!(["Purple", "Black", "Gold"]));
        assert_eq!(
            fields[5]["validation"],
            json!(["required", "integer", {"min": 1}, {"max": 200},
                   {"error": "Inventory must be between 1 and 200"}])
        );
    }

    #[test]
    fn size_is_the_only_optional_field() {
        let schema = product_schema();
        let optional: Vec<_> = schema
            .fields
            .iter()
            .filter(|f| !f.validation.contains(&RuleSpec::Required))
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec!["size"]);
    }

    #[test]
    fn accepts_a_valid_document() {
        assert!(validate_document(&valid_document()).is_ok());
    }

    #[test]
    fn reports_studio_messages() {
        let mut doc = valid_document();
        doc["productName"] = json!("Sh");
        doc["price"] = json!(0);

        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(
            errors.for_field("productName"),
            ["Product name must be between 3 and 20 characters"]
        );
        assert_eq!(errors.for_field("price"), ["Price must be between 1 and 9999"]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn missing_required_fields_and_wrong_types() {
        let doc = json!({
            "_type": "product",
            "description": 42,
            "size": ["M", "M", "XXL"],
            "color": [],
            "price": "50",
            "product_inventory": 10
        });

        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(errors.for_field("productName"), ["Required"]);
        assert_eq!(errors.for_field("description"), ["Expected type \"String\""]);
        assert_eq!(
            errors.for_field("size"),
            ["Value \"XXL\" did not match any allowed values", "Can't be a duplicate"]
        );
        assert_eq!(errors.for_field("color"), ["At least one color must be selected"]);
        assert_eq!(errors.for_field("price"), ["Expected type \"Number\""]);
        assert!(!errors.contains("product_inventory"));
    }

    #[test]
    fn missing_size_is_not_required_by_the_studio() {
        let mut doc = valid_document();
        doc.as_object_mut().unwrap().remove("size");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn rejects_other_document_types() {
        let mut doc = valid_document();
        doc["_type"] = json!("category");
        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["_type"]);
    }
}
