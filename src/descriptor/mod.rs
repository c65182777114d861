//! Route-descriptor validation and normalization.
//!
//! # Data Flow
//! ```text
//! raw table entry (serde_json object)
//!     → factory.rs (required keys, shape checks, method promotion)
//!     → methods.rs (allow-list validation, case folding)
//!     → name.rs (identifier sanitization)
//!     → RouteDescriptor (validated, immutable)
//!     → consumed by routing::RouteRegistrar
//! ```
//!
//! # Design Decisions
//! - Descriptors are immutable once built; accessors only
//! - Either a complete descriptor or an error, never partial results
//! - Malformed `value`/`assert` shapes hard-fail instead of coercing to
//!   empty, so broken configuration is caught rather than silently dropped

pub mod factory;
pub mod methods;
pub mod name;
pub mod route;

pub use methods::{MethodSet, ALLOWED_METHODS};
pub use name::RouteName;
pub use route::RouteDescriptor;
