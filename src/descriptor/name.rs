//! Route-name derivation and sanitization.
//!
//! # Responsibilities
//! - Reject numeric table keys (sequence indices are hints, never names)
//! - Map the separator characters `/ : | -` to `_`
//! - Strip everything outside `[A-Za-z0-9_.]`
//!
//! # Design Decisions
//! - Pure and infallible: every input produces a valid (possibly empty) name
//! - The empty name is a signal, not an error: it tells the backend that no
//!   explicit name survived and that it should synthesize its own default
//! - Normalization is idempotent, so names can be re-normalized freely

use std::fmt;

/// A sanitized route identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteName(String);

impl RouteName {
    /// Normalize a raw candidate into a valid route name.
    pub fn new(raw: &str) -> Self {
        if is_numeric(raw) {
            return Self(String::new());
        }

        let name: String = raw
            .chars()
            .filter_map(|c| match c {
                '/' | ':' | '|' | '-' => Some('_'),
                c if c.is_ascii_alphanumeric() || c == '_' || c == '.' => Some(c),
                _ => None,
            })
            .collect();

        // Stripping can leave nothing but digits behind ("1#2" -> "12");
        // that is still not a usable name.
        if is_numeric(&name) {
            return Self(String::new());
        }

        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Empty or all ASCII digits. Table keys of sequence-shaped tables are
/// integer indices; they must never become route names.
fn is_numeric(raw: &str) -> bool {
    raw.is_empty() || raw.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_numeric_inputs_normalize_to_empty() {
        assert_eq!(RouteName::new("").as_str(), "");
        assert_eq!(RouteName::new("123").as_str(), "");
        assert_eq!(RouteName::new("0").as_str(), "");
    }

    #[test]
    fn separators_become_underscores() {
        assert_eq!(
            RouteName::new("foo/bar:baz|qux-zap").as_str(),
            "foo_bar_baz_qux_zap"
        );
    }

    #[test]
    fn other_special_characters_are_stripped() {
        assert_eq!(RouteName::new("api v1 (beta)!").as_str(), "apiv1beta");
        assert_eq!(RouteName::new("user.profile").as_str(), "user.profile");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["foo/bar:baz|qux-zap", "api v1 (beta)!", "1#2#3", "", "42"] {
            let once = RouteName::new(raw);
            let twice = RouteName::new(once.as_str());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn stripping_down_to_digits_still_yields_empty() {
        assert_eq!(RouteName::new("1#2#3").as_str(), "");
    }
}
