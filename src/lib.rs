//! Declarative route-table registration.
//!
//! Translates a data-driven route table (an ordered mapping of route
//! identifiers to route descriptors) into live registrations against an
//! HTTP routing engine. The engine itself is external and consumed through
//! the [`RouterBackend`] / [`RouteHandle`] traits; this crate owns the
//! validation and normalization pipeline in between.
//!
//! # Architecture Overview
//!
//! ```text
//! route table (serde_json::Value, parsed by the app's config layer)
//!     │
//!     ▼
//! ┌────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │    routing     │───▶│    descriptor    │───▶│  RouteDescriptor │
//! │ RouteRegistrar │    │ factory/methods/ │    │   (immutable)    │
//! │  (iteration,   │    │      name        │    └────────┬─────────┘
//! │   precedence)  │    └──────────────────┘             │
//! └───────┬────────┘                                     │
//!         │           ┌──────────────────┐               │
//!         │           │    middleware    │               ▼
//!         └──────────▶│ registry/resolver│──▶ backend.mount(...)
//!                     │ (Provider::method│    handle.bind/method/value/
//!                     │     lookup)      │    assert/convert/before/
//!                     └──────────────────┘    after/require_https
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let table = serde_json::json!({
//!     "user_detail": {
//!         "pattern": "/users/{id}",
//!         "method": ["get", "head"],
//!         "controller": "UserController::detail",
//!         "assert": { "id": "\\d+" },
//!         "scheme": "https"
//!     }
//! });
//!
//! let mut registrar = RouteRegistrar::new(&mut my_router).with_hooks(&hooks);
//! registrar.register(&table)?;
//! ```
//!
//! Registration is synchronous, single-threaded and fail-fast: the first
//! invalid entry aborts the pass, and routes registered before the failure
//! stay registered. Route tables are loaded once at startup, so callers
//! simply fix the configuration and re-run.

pub mod descriptor;
pub mod error;
pub mod middleware;
pub mod routing;

pub use descriptor::{MethodSet, RouteDescriptor, RouteName, ALLOWED_METHODS};
pub use error::{RegistrationError, RegistrationResult};
pub use middleware::{HookProvider, HookRegistry, HookSlot, MiddlewareResolver, MiddlewareSpec};
pub use routing::{RouteHandle, RouteRegistrar, RouterBackend};
