//! Error taxonomy for table validation and registration.
//!
//! # Design Decisions
//! - One enum for the whole pipeline; callers match on variants, logs get
//!   the rendered message
//! - Every failure is synchronous and fail-fast; nothing is caught or
//!   retried internally
//! - No partial-success reporting: a failed pass may have registered a
//!   prefix of the table, and callers re-run after fixing the config

use serde_json::Value;
use thiserror::Error;

use crate::descriptor::ALLOWED_METHODS;

/// Errors that can occur while validating or registering a route table.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Top-level input, or one of its entries, was not map-shaped.
    #[error("route table must be a mapping or a sequence of mappings, got {found}")]
    InvalidRouteTable { found: &'static str },

    /// A required descriptor key is absent.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A descriptor key is present but has the wrong shape.
    #[error("{field} must be {expected}, got {found}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A method token is outside the allow-list.
    #[error(
        "method \"{method}\" is not valid, only the following methods are allowed: {}",
        ALLOWED_METHODS.join(", ")
    )]
    InvalidMethod { method: String },

    /// The method list was present but empty.
    #[error("at least one method is required")]
    EmptyMethodList,

    /// The same method appeared more than once after case folding.
    #[error("method \"{method}\" is listed more than once")]
    DuplicateMethod { method: String },

    /// A middleware reference is not a `Provider::method` string.
    #[error("{value} is not a valid middleware reference, expected the form Provider::method")]
    InvalidMiddlewareSpec { value: String },

    /// A middleware reference names a provider or hook that is not registered.
    #[error("middleware \"{provider}::{method}\" is not registered")]
    MiddlewareNotFound { provider: String, method: String },

    /// A hook slot other than `before` or `after`.
    #[error("slot \"{slot}\" is not supported, use before or after")]
    UnsupportedSlot { slot: String },
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Human-readable JSON shape name for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_method_message_enumerates_the_allow_list() {
        let err = RegistrationError::InvalidMethod {
            method: "FOO".into(),
        };
        let message = err.to_string();
        for method in ALLOWED_METHODS {
            assert!(message.contains(method), "missing {method} in: {message}");
        }
    }

    #[test]
    fn value_kind_names_every_shape() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&serde_json::json!("x")), "a string");
        assert_eq!(value_kind(&serde_json::json!([1])), "a sequence");
        assert_eq!(value_kind(&serde_json::json!({})), "a mapping");
    }
}
