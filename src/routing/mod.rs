//! Dispatch of URIs to callbacks.
//!
//! # Data Flow
//! ```text
//! Incoming URI
//!     → router.rs (try each route in registration order)
//!     → RouteCapture::exec (anchored match + parameter map)
//!     → callback(params, uri), or explicit no-match
//!
//! Route registration (at setup):
//!     add(name, pattern, groups) → compile → append
//!     set_default(map)           → overlay on the last route
//! ```
//!
//! # Design Decisions
//! - Two explicit entry points: `Route` for one pattern, `RouteTable` for many
//! - Compilation errors surface at registration, never at dispatch
//! - Deterministic: same input always matches same route

pub mod route;
pub mod router;

pub use route::Route;
pub use router::{RouteError, RouteMatch, RouteTable};
