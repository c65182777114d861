//! Table iteration and registration orchestration.
//!
//! # Responsibilities
//! - Accept the route table (mapping or sequence of mappings)
//! - Resolve route names: explicit `name` field > table key > derived
//! - Build descriptors and drive the backend, entry by entry
//!
//! # Design Decisions
//! - The table is an explicit argument, never pulled from ambient state
//! - Fail-fast: the first invalid entry aborts the pass; entries already
//!   registered stay registered (no rollback, callers re-run after fixing
//!   the config)
//! - Sequence indices are name hints only; they normalize to the empty
//!   name and the backend falls back to its default naming

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::descriptor::{factory, RouteDescriptor, RouteName};
use crate::error::{value_kind, RegistrationError, RegistrationResult};
use crate::middleware::{HookRegistry, MiddlewareResolver};

use super::{RouteHandle, RouterBackend};

type HookOf<B> = <<B as RouterBackend>::Handle as RouteHandle>::Hook;

/// Drives a [`RouterBackend`] from a declarative route table.
///
/// The backend is exclusively borrowed for the lifetime of the registrar,
/// so a registration pass cannot race anything else that mutates it.
pub struct RouteRegistrar<'a, B: RouterBackend> {
    backend: &'a mut B,
    hooks: Option<&'a HookRegistry<HookOf<B>>>,
}

impl<'a, B: RouterBackend> RouteRegistrar<'a, B> {
    pub fn new(backend: &'a mut B) -> Self {
        Self {
            backend,
            hooks: None,
        }
    }

    /// Attach the registry that `Provider::method` references resolve
    /// against. Without one, any reference fails as unregistered.
    pub fn with_hooks(mut self, hooks: &'a HookRegistry<HookOf<B>>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Register every entry of the table, in input order.
    pub fn register(&mut self, table: &Value) -> RegistrationResult<()> {
        match table {
            Value::Object(entries) => {
                debug!(entries = entries.len(), "registering route table");
                for (key, raw) in entries {
                    self.register_route(raw, key)?;
                }
            }
            Value::Array(entries) => {
                debug!(entries = entries.len(), "registering route table");
                for (index, raw) in entries.iter().enumerate() {
                    self.register_route(raw, &index.to_string())?;
                }
            }
            other => {
                return Err(RegistrationError::InvalidRouteTable {
                    found: value_kind(other),
                })
            }
        }
        Ok(())
    }

    /// Register a single raw entry.
    ///
    /// `name_hint` is the table key (or stringified sequence index); an
    /// explicit `name` field inside the entry wins over it.
    pub fn register_route(&mut self, raw: &Value, name_hint: &str) -> RegistrationResult<()> {
        let raw = raw
            .as_object()
            .ok_or_else(|| RegistrationError::InvalidRouteTable {
                found: value_kind(raw),
            })?;

        let descriptor = factory::build(raw)?;
        let name = resolve_name(&descriptor, name_hint);

        let mut handle = self
            .backend
            .mount(descriptor.pattern(), descriptor.controller());
        handle.bind(name.as_str());
        handle.method(&descriptor.methods().joined());

        apply_values(&mut handle, &descriptor)?;
        apply_converters(&mut handle, raw)?;

        let resolver = MiddlewareResolver::new(self.hooks);
        for slot in ["before", "after"] {
            if let Some(value) = factory::present(raw, slot) {
                resolver.attach(&mut handle, slot, value)?;
            }
        }

        if raw.get("scheme").and_then(Value::as_str) == Some("https") {
            handle.require_https();
        }

        info!(
            name = %name,
            pattern = %descriptor.pattern(),
            methods = %descriptor.methods(),
            "route registered"
        );
        Ok(())
    }
}

/// Explicit `name` field > table key > derived (empty, backend default).
fn resolve_name(descriptor: &RouteDescriptor, name_hint: &str) -> RouteName {
    if descriptor.name().is_empty() {
        RouteName::new(name_hint)
    } else {
        descriptor.name().clone()
    }
}

/// Per-parameter defaults and constraints, each through its dedicated
/// handle method.
fn apply_values<H: RouteHandle>(
    handle: &mut H,
    descriptor: &RouteDescriptor,
) -> RegistrationResult<()> {
    for (param, default) in descriptor.values() {
        handle.value(param, default);
    }

    for (param, pattern) in descriptor.asserts() {
        let pattern = pattern
            .as_str()
            .ok_or_else(|| RegistrationError::InvalidFieldType {
                field: "assert",
                expected: "a mapping of parameter to pattern string",
                found: value_kind(pattern).to_string(),
            })?;
        handle.assert(param, pattern);
    }

    Ok(())
}

/// `convert` is map-only, like `value` and `assert`; a bare value is a
/// shape error, never promoted.
fn apply_converters<H: RouteHandle>(
    handle: &mut H,
    raw: &Map<String, Value>,
) -> RegistrationResult<()> {
    let Some(converters) = factory::present(raw, "convert") else {
        return Ok(());
    };

    let converters = converters
        .as_object()
        .ok_or_else(|| RegistrationError::InvalidFieldType {
            field: "convert",
            expected: "a mapping",
            found: value_kind(converters).to_string(),
        })?;

    for (param, converter) in converters {
        handle.convert(param, converter);
    }

    Ok(())
}
