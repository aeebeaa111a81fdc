//! Structural validation of config documents against derived schemas.
//!
//! The checks here run before the config is decoded into its resource type,
//! so unknown attributes, wrong types and missing required attributes are
//! reported with exact attribute paths instead of decoder errors.

use serde_json::Value;

use crate::datasource::diagnostics::Diagnostic;
use crate::datasource::schema::{Attribute, AttributeType, Block};

/// Check a config document against a schema block.
///
/// All findings are collected into a single vec so a caller sees every
/// structural issue of the document at once.
pub(super) fn check_document(block: &Block, config: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    match config.as_object() {
        Some(doc) => check_block(block, doc, "", &mut diagnostics),
        None => diagnostics.push(Diagnostic::error("the configuration must be a JSON object", None)),
    }
    diagnostics
}

fn check_block(block: &Block, doc: &serde_json::Map<String, Value>, path: &str, acc: &mut Vec<Diagnostic>) {
    for (name, value) in doc {
        let path = join_path(path, name);
        let attr = match block.attribute(name) {
            Some(attr) => attr,
            None => {
                acc.push(Diagnostic::error(format!("unknown attribute `{}`", name), Some(path)));
                continue;
            }
        };
        if attr.computed && !attr.required && !attr.optional {
            acc.push(Diagnostic::error(
                format!("attribute `{}` is computed and can not be set in the configuration", name),
                Some(path),
            ));
            continue;
        }
        check_value(attr, value, &path, acc);
    }
    for attr in &block.attributes {
        if attr.required && doc.get(&attr.name).map(Value::is_null).unwrap_or(true) {
            acc.push(Diagnostic::error(
                format!("missing required attribute `{}`", attr.name),
                Some(join_path(path, &attr.name)),
            ));
        }
    }
}

fn check_value(attr: &Attribute, value: &Value, path: &str, acc: &mut Vec<Diagnostic>) {
    if value.is_null() {
        return;
    }
    match attr.r#type {
        AttributeType::String => {
            if !value.is_string() {
                acc.push(type_mismatch(AttributeType::String, value, path));
            }
        }
        AttributeType::Number => {
            if !value.is_number() {
                acc.push(type_mismatch(AttributeType::Number, value, path));
            }
        }
        AttributeType::Bool => {
            if !value.is_boolean() {
                acc.push(type_mismatch(AttributeType::Bool, value, path));
            }
        }
        AttributeType::Object => match value.as_object() {
            Some(doc) => {
                if let Some(block) = &attr.block {
                    check_block(block, doc, path, acc);
                }
            }
            None => acc.push(type_mismatch(AttributeType::Object, value, path)),
        },
        AttributeType::List => match value.as_array() {
            Some(items) => {
                for (idx, item) in items.iter().enumerate() {
                    check_element(attr, item, &format!("{}.{}", path, idx), acc);
                }
            }
            None => acc.push(type_mismatch(AttributeType::List, value, path)),
        },
        AttributeType::Map => match value.as_object() {
            Some(entries) => {
                for (key, entry) in entries {
                    check_element(attr, entry, &format!("{}.{}", path, key), acc);
                }
            }
            None => acc.push(type_mismatch(AttributeType::Map, value, path)),
        },
    }
}

/// Check one element of a list or map attribute.
fn check_element(attr: &Attribute, value: &Value, path: &str, acc: &mut Vec<Diagnostic>) {
    if value.is_null() {
        return;
    }
    match attr.element {
        Some(AttributeType::String) => {
            if !value.is_string() {
                acc.push(type_mismatch(AttributeType::String, value, path));
            }
        }
        Some(AttributeType::Number) => {
            if !value.is_number() {
                acc.push(type_mismatch(AttributeType::Number, value, path));
            }
        }
        Some(AttributeType::Bool) => {
            if !value.is_boolean() {
                acc.push(type_mismatch(AttributeType::Bool, value, path));
            }
        }
        Some(AttributeType::Object) => match value.as_object() {
            Some(doc) => {
                if let Some(block) = &attr.block {
                    check_block(block, doc, path, acc);
                }
            }
            None => acc.push(type_mismatch(AttributeType::Object, value, path)),
        },
        Some(AttributeType::Map) => {
            if !value.is_object() {
                acc.push(type_mismatch(AttributeType::Map, value, path));
            }
        }
        Some(AttributeType::List) => {
            if !value.is_array() {
                acc.push(type_mismatch(AttributeType::List, value, path));
            }
        }
        None => (),
    }
}

fn type_mismatch(expected: AttributeType, value: &Value, path: &str) -> Diagnostic {
    Diagnostic::error(
        format!("value must be of type {}, got {}", expected, json_type_name(value)),
        Some(path.to_string()),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}
