//! HTTP-method validation against the canonical allow-list.

use std::fmt;

use crate::error::{RegistrationError, RegistrationResult};

/// Every HTTP verb a route descriptor may carry.
///
/// Beyond the RFC 9110 methods this includes `PURGE`, which nginx and
/// Varnish use for cache invalidation.
pub const ALLOWED_METHODS: [&str; 10] = [
    "GET", "PUT", "POST", "DELETE", "OPTIONS", "HEAD", "PATCH", "PURGE", "TRACE", "CONNECT",
];

/// An ordered, validated set of uppercase HTTP methods.
///
/// Construction is the only validation point: a `MethodSet` in hand is
/// non-empty, duplicate-free and entirely inside [`ALLOWED_METHODS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet(Vec<String>);

impl MethodSet {
    /// Case-fold and validate a list of method tokens, preserving order.
    pub fn new<I>(tokens: I) -> RegistrationResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut methods: Vec<String> = Vec::new();
        for token in tokens {
            let method = token.to_ascii_uppercase();
            if !ALLOWED_METHODS.contains(&method.as_str()) {
                return Err(RegistrationError::InvalidMethod { method });
            }
            if methods.contains(&method) {
                return Err(RegistrationError::DuplicateMethod { method });
            }
            methods.push(method);
        }

        if methods.is_empty() {
            return Err(RegistrationError::EmptyMethodList);
        }

        Ok(Self(methods))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The backend wire form, e.g. `GET|POST`.
    pub fn joined(&self) -> String {
        self.0.join("|")
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn folds_case_and_preserves_order() {
        let methods = MethodSet::new(tokens(&["get", "Post", "DELETE"])).unwrap();
        assert_eq!(methods.as_slice(), ["GET", "POST", "DELETE"]);
        assert_eq!(methods.joined(), "GET|POST|DELETE");
    }

    #[test]
    fn accepts_the_entire_allow_list() {
        let methods = MethodSet::new(tokens(&ALLOWED_METHODS)).unwrap();
        assert_eq!(methods.as_slice(), ALLOWED_METHODS);
    }

    #[test]
    fn rejects_tokens_outside_the_allow_list() {
        let err = MethodSet::new(tokens(&["get", "foo"])).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::InvalidMethod { method } if method == "FOO"
        ));
    }

    #[test]
    fn rejects_duplicates_after_case_folding() {
        let err = MethodSet::new(tokens(&["get", "GET"])).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::DuplicateMethod { method } if method == "GET"
        ));
    }

    #[test]
    fn rejects_an_empty_list() {
        let err = MethodSet::new(Vec::new()).unwrap_err();
        assert!(matches!(err, RegistrationError::EmptyMethodList));
    }
}
