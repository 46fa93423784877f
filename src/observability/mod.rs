//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! capture / routing / config
//!     → tracing events (debug: compiled patterns, registered routes;
//!                       trace: per-URI match attempts;
//!                       warn: ignored configuration)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
