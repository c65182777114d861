//! Middleware resolution subsystem.
//!
//! # Data Flow
//! ```text
//! before/after value (string | sequence, from the table entry)
//!     → resolver.rs (parse into MiddlewareSpec list)
//!     → registry.rs (Provider::method lookup)
//!     → resolved hook → RouteHandle::before / ::after
//! ```
//!
//! # Design Decisions
//! - Hooks resolve through an explicit registry the application populates
//!   at startup; there is no runtime type lookup
//! - The hook type is the backend's own (`RouteHandle::Hook`); this crate
//!   never invokes a hook, it only routes it to the right slot

pub mod registry;
pub mod resolver;

pub use registry::{HookProvider, HookRegistry};
pub use resolver::{HookSlot, MiddlewareResolver, MiddlewareSpec};
