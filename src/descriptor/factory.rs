//! Descriptor parsing: raw table entry in, [`RouteDescriptor`] out.

use serde_json::{Map, Value};

use crate::error::{value_kind, RegistrationError, RegistrationResult};

use super::{MethodSet, RouteDescriptor, RouteName};

/// Parse one raw table entry into a [`RouteDescriptor`].
///
/// `pattern`, `method` and `controller` are required; `value`, `assert` and
/// `name` are optional. A single method string is promoted to a one-element
/// list. Shape violations fail before any field is used, so a malformed
/// entry is rejected whole rather than partially applied.
pub fn build(raw: &Map<String, Value>) -> RegistrationResult<RouteDescriptor> {
    for field in ["pattern", "method", "controller"] {
        if present(raw, field).is_none() {
            return Err(RegistrationError::MissingField { field });
        }
    }

    let asserts = optional_map(raw, "assert")?;
    let values = optional_map(raw, "value")?;

    let pattern = required_str(raw, "pattern")?;
    if pattern.is_empty() {
        return Err(RegistrationError::InvalidFieldType {
            field: "pattern",
            expected: "a non-empty string",
            found: "an empty string".to_string(),
        });
    }

    let methods = MethodSet::new(method_tokens(raw)?)?;
    let controller = required_str(raw, "controller")?;
    let name = explicit_name(raw)?;

    Ok(RouteDescriptor::new(
        methods,
        pattern.to_string(),
        controller.to_string(),
        asserts,
        values,
        name,
    ))
}

/// A `null` field is treated as absent, never as a value.
pub(crate) fn present<'a>(raw: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !value.is_null())
}

fn required_str<'a>(
    raw: &'a Map<String, Value>,
    field: &'static str,
) -> RegistrationResult<&'a str> {
    match present(raw, field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(RegistrationError::InvalidFieldType {
            field,
            expected: "a string",
            found: value_kind(other).to_string(),
        }),
        None => Err(RegistrationError::MissingField { field }),
    }
}

/// `method` accepts a single string or a list of strings.
fn method_tokens(raw: &Map<String, Value>) -> RegistrationResult<Vec<String>> {
    let invalid = |found: &Value| RegistrationError::InvalidFieldType {
        field: "method",
        expected: "a string or a sequence of strings",
        found: value_kind(found).to_string(),
    };

    match present(raw, "method") {
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(invalid(other)),
            })
            .collect(),
        Some(other) => Err(invalid(other)),
        None => Err(RegistrationError::MissingField { field: "method" }),
    }
}

/// Present-but-malformed maps hard-fail; they are never coerced to empty.
fn optional_map(
    raw: &Map<String, Value>,
    field: &'static str,
) -> RegistrationResult<Map<String, Value>> {
    match present(raw, field) {
        None => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(other) => Err(RegistrationError::InvalidFieldType {
            field,
            expected: "a mapping",
            found: value_kind(other).to_string(),
        }),
    }
}

/// `name` accepts a string, or a number that normalizes to the empty name
/// (a sequence index leaking in as an explicit field).
fn explicit_name(raw: &Map<String, Value>) -> RegistrationResult<RouteName> {
    match present(raw, "name") {
        None => Ok(RouteName::default()),
        Some(Value::String(s)) => Ok(RouteName::new(s)),
        Some(Value::Number(n)) => Ok(RouteName::new(&n.to_string())),
        Some(other) => Err(RegistrationError::InvalidFieldType {
            field: "name",
            expected: "a string",
            found: value_kind(other).to_string(),
        }),
    }
}
