//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from route files.

use serde::{Deserialize, Serialize};

use crate::capture::{Defaults, SubPatterns};

/// Root of a route definition file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteFileConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Routes, tried in the order listed.
    pub routes: Vec<RouteConfig>,
}

/// One named route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier, unique within the file.
    pub name: String,

    /// Pattern in the route language, e.g. `/<controller>(/<action>)`.
    pub pattern: String,

    /// Regex fragments overriding the default for individual groups.
    #[serde(default)]
    pub groups: SubPatterns,

    /// Default overlay applied to every match of this route.
    #[serde(default)]
    pub defaults: Defaults,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
