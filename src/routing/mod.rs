//! Routing subsystem: orchestration against the backend traits.
//!
//! # Data Flow
//! ```text
//! route table (serde_json::Value)
//!     → registrar.rs (iteration, name precedence, fail-fast)
//!     → descriptor::factory (per-entry validation)
//!     → backend.rs traits (mount, bind, method, attachments)
//! ```
//!
//! # Design Decisions
//! - One linear traversal per pass; registration order is input order
//! - The backend is `&mut`-borrowed for the whole pass, so exclusive
//!   access is enforced by the compiler, not by convention
//! - Route handles live only for the duration of one entry's attachment
//!   calls; the backend retains the registered routes

pub mod backend;
pub mod registrar;

pub use backend::{RouteHandle, RouterBackend};
pub use registrar::RouteRegistrar;
