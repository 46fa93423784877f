//! Route definition files.
//!
//! # Data Flow
//! ```text
//! routes file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks, every pattern compiled once)
//!     → RouteFileConfig (validated)
//!     → RouteTable::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - Route order in the file is registration order

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RouteConfig, RouteFileConfig};
pub use validation::{validate_config, ValidationError};
