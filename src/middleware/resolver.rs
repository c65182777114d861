//! Before/after hook resolution and attachment.
//!
//! # Responsibilities
//! - Parse a raw before/after value (string or sequence of strings)
//! - Split `Provider::method` references on the first `::`
//! - Resolve references through the [`HookRegistry`]
//! - Attach resolved hooks to the route handle, in order
//!
//! # Design Decisions
//! - Hooks supplied in code (`MiddlewareSpec::Direct`) pass through
//!   untouched; only references are resolved
//! - An empty provider or method half is malformed, not silently skipped
//! - Slots are validated by name so a typo fails loudly

use std::str::FromStr;

use serde_json::Value;

use crate::error::{RegistrationError, RegistrationResult};
use crate::routing::RouteHandle;

use super::HookRegistry;

/// The two hook slots a route exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookSlot {
    Before,
    After,
}

impl HookSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl FromStr for HookSlot {
    type Err = RegistrationError;

    fn from_str(slot: &str) -> Result<Self, Self::Err> {
        match slot {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(RegistrationError::UnsupportedSlot {
                slot: other.to_string(),
            }),
        }
    }
}

/// One hook attachment, before resolution.
#[derive(Debug)]
pub enum MiddlewareSpec<H> {
    /// A hook supplied in code; passed to the backend unchanged.
    Direct(H),
    /// A `Provider::method` reference from configuration.
    Reference(String),
}

impl<H> MiddlewareSpec<H> {
    /// Parse the raw before/after value of a table entry.
    ///
    /// Configuration data can only carry references; [`Self::Direct`] enters
    /// through the programmatic API.
    pub fn parse_list(value: &Value) -> RegistrationResult<Vec<Self>> {
        let malformed = |found: &Value| RegistrationError::InvalidMiddlewareSpec {
            value: found.to_string(),
        };

        match value {
            Value::String(reference) => Ok(vec![Self::Reference(reference.clone())]),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(reference) => Ok(Self::Reference(reference.clone())),
                    other => Err(malformed(other)),
                })
                .collect(),
            other => Err(malformed(other)),
        }
    }
}

/// Resolves middleware specs against a registry and attaches them.
pub struct MiddlewareResolver<'r, H> {
    registry: Option<&'r HookRegistry<H>>,
}

impl<'r, H> MiddlewareResolver<'r, H> {
    pub fn new(registry: Option<&'r HookRegistry<H>>) -> Self {
        Self { registry }
    }

    /// Resolve one spec to a hook.
    pub fn resolve(&self, spec: MiddlewareSpec<H>) -> RegistrationResult<H> {
        match spec {
            MiddlewareSpec::Direct(hook) => Ok(hook),
            MiddlewareSpec::Reference(reference) => self.resolve_reference(&reference),
        }
    }

    fn resolve_reference(&self, reference: &str) -> RegistrationResult<H> {
        let malformed = || RegistrationError::InvalidMiddlewareSpec {
            value: reference.to_string(),
        };

        let (provider, method) = reference.split_once("::").ok_or_else(malformed)?;
        if provider.is_empty() || method.is_empty() {
            return Err(malformed());
        }

        let not_found = || RegistrationError::MiddlewareNotFound {
            provider: provider.to_string(),
            method: method.to_string(),
        };

        self.registry
            .and_then(|registry| registry.provider(provider))
            .ok_or_else(not_found)?
            .hook(method)
            .ok_or_else(not_found)
    }

    /// Parse, resolve and attach the raw before/after value of one entry.
    pub fn attach<R>(&self, handle: &mut R, slot: &str, value: &Value) -> RegistrationResult<()>
    where
        R: RouteHandle<Hook = H>,
    {
        let slot = HookSlot::from_str(slot)?;
        for spec in MiddlewareSpec::parse_list(value)? {
            let hook = self.resolve(spec)?;
            match slot {
                HookSlot::Before => handle.before(hook),
                HookSlot::After => handle.after(hook),
            }
        }
        Ok(())
    }
}
