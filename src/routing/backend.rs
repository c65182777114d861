//! Backend traits: the routing engine registrations are driven against.
//!
//! This crate validates and translates; the engine that matches URLs at
//! request time lives in the embedding application and is consumed through
//! these two traits only.

use serde_json::Value;

/// A live registration handle for one route.
///
/// The backend retains whatever state the handle mutates; the registrar
/// drives the calls and drops the handle once the route is fully attached.
pub trait RouteHandle {
    /// The backend's middleware hook representation.
    type Hook;

    /// Bind the route's name. An empty name asks the backend to synthesize
    /// its own default, conventionally `<METHODS_JOINED>_<pattern-derived>`.
    fn bind(&mut self, name: &str);

    /// Restrict the route to a `|`-joined uppercase method string.
    fn method(&mut self, methods: &str);

    /// Default value for a path parameter absent from the matched URL.
    fn value(&mut self, param: &str, default: &Value);

    /// Constraint pattern a path parameter's value must match.
    fn assert(&mut self, param: &str, pattern: &str);

    /// Converter applied to a path parameter after matching.
    fn convert(&mut self, param: &str, converter: &Value);

    /// Hook invoked before the controller action.
    fn before(&mut self, hook: Self::Hook);

    /// Hook invoked after the controller action.
    fn after(&mut self, hook: Self::Hook);

    /// Restrict the route to HTTPS.
    fn require_https(&mut self);
}

/// The routing engine itself.
pub trait RouterBackend {
    type Handle: RouteHandle;

    /// Register a pattern and controller pair, returning the handle the
    /// remaining attachment calls are made against.
    fn mount(&mut self, pattern: &str, controller: &str) -> Self::Handle;
}
