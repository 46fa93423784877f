//! Pattern compilation and parameter extraction.
//!
//! # Data Flow
//! ```text
//! pattern "/<controller>(/<action>)" + per-group fragments
//!     → compiler.rs (escape, optional sections, named groups, anchors)
//!     → CompiledPattern (regex + ordered names)
//!
//! candidate URI
//!     → matcher.rs (anchored match)
//!     → Params: absent marker ← defaults ← captures
//! ```
//!
//! # Pattern Language
//! - `<name>`: named capture, `name` matches `[-a-zA-Z0-9_ ]+`
//! - `(...)`: optional section, may nest
//! - `. * + ? ^ $`: literal characters

pub mod compiler;
pub mod error;
pub mod matcher;
pub mod params;

pub use compiler::{compile, CompiledPattern, SubPatterns, DEFAULT_GROUP_FRAGMENT};
pub use error::{CaptureError, CaptureResult};
pub use matcher::RouteCapture;
pub use params::{Defaults, Params};
