//! The normalized, immutable representation of one route.

use serde_json::{Map, Value};

use super::{MethodSet, RouteName};

/// One validated route: everything the backend needs, nothing it has to
/// re-check.
///
/// Built by [`factory::build`](super::factory::build), read during a single
/// registration pass, then discarded. There is no mutation after
/// construction and no persisted store.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    methods: MethodSet,
    pattern: String,
    controller: String,
    asserts: Map<String, Value>,
    values: Map<String, Value>,
    name: RouteName,
}

impl RouteDescriptor {
    pub(crate) fn new(
        methods: MethodSet,
        pattern: String,
        controller: String,
        asserts: Map<String, Value>,
        values: Map<String, Value>,
        name: RouteName,
    ) -> Self {
        Self {
            methods,
            pattern,
            controller,
            asserts,
            values,
            name,
        }
    }

    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    /// The URL pattern, e.g. `/users/{id}`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The callable target the backend should dispatch to.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Constraint patterns keyed by path-parameter name.
    pub fn asserts(&self) -> &Map<String, Value> {
        &self.asserts
    }

    /// Default values keyed by path-parameter name.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// The explicit route name; empty when the caller must derive one.
    pub fn name(&self) -> &RouteName {
        &self.name
    }
}
