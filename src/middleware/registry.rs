//! Hook registry: named providers, populated at startup.
//!
//! Reference strings in a route table (`"Log::audit"`) resolve against this
//! registry. The embedding application registers a provider per identifier;
//! the provider exposes its hooks by method name. Registration replaces the
//! original's runtime class lookup, so resolution is a plain map walk with
//! no type introspection.

use std::collections::HashMap;

/// Resolves a method name to a hook.
pub trait HookProvider<H> {
    fn hook(&self, method: &str) -> Option<H>;
}

/// A plain map of method name to hook works as a provider.
impl<H: Clone> HookProvider<H> for HashMap<String, H> {
    fn hook(&self, method: &str) -> Option<H> {
        self.get(method).cloned()
    }
}

/// Named hook providers, keyed by the identifier used in `Provider::method`
/// reference strings.
pub struct HookRegistry<H> {
    providers: HashMap<String, Box<dyn HookProvider<H>>>,
}

impl<H> HookRegistry<H> {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under an identifier. Registering the same
    /// identifier again replaces the earlier provider.
    pub fn register<P>(&mut self, identifier: impl Into<String>, provider: P)
    where
        P: HookProvider<H> + 'static,
    {
        self.providers.insert(identifier.into(), Box::new(provider));
    }

    pub fn provider(&self, identifier: &str) -> Option<&dyn HookProvider<H>> {
        self.providers.get(identifier).map(Box::as_ref)
    }
}

impl<H> Default for HookRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
