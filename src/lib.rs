//! URI pattern routing.
//!
//! Compiles a small pattern language into anchored regular expressions and
//! extracts named parameters from matching URIs.
//!
//! # Architecture Overview
//!
//! ```text
//!   pattern "/<foo>(/<bar>)"        ┌──────────────┐
//!   + group fragments  ────────────▶│   capture    │  CompiledPattern
//!                                   │   compiler   │  (regex + names)
//!                                   └──────┬───────┘
//!                                          │
//!   candidate URI ─────────────────────────▼────────────────┐
//!                                   ┌──────────────┐        │
//!                                   │   capture    │ Params │
//!                                   │   matcher    │◀─ defaults
//!                                   └──────┬───────┘        │
//!                                          ▼                │
//!                                   ┌──────────────┐        │
//!                                   │   routing    │ first match wins
//!                                   │ Route/Table  │──▶ callback(params, uri)
//!                                   └──────────────┘
//! ```
//!
//! ```
//! use uri_route::RouteCapture;
//!
//! let capture = RouteCapture::new("/<foo>(/<bar>)").unwrap();
//! let params = capture.exec("/named").unwrap();
//! assert_eq!(params.get("foo"), Some("named"));
//! assert_eq!(params.value("bar"), Some(&None));
//! ```

// Core
pub mod capture;
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use capture::{
    compile, CaptureError, CompiledPattern, Defaults, Params, RouteCapture, SubPatterns,
};
pub use config::RouteFileConfig;
pub use routing::{Route, RouteError, RouteMatch, RouteTable};
