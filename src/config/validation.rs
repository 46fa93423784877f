//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty names and patterns, and duplicate route names
//! - Compile every pattern so bad groups are reported before use
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteFileConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::capture::compile;
use crate::config::schema::RouteFileConfig;

/// A single semantic problem in a route file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route `{route}` has an empty pattern")]
    EmptyPattern { route: String },

    #[error("route `{route}` is defined more than once")]
    DuplicateRoute { route: String },

    #[error("route `{route}` has an invalid pattern: {reason}")]
    InvalidPattern { route: String, reason: String },
}

pub fn validate_config(config: &RouteFileConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRoute {
                route: route.name.clone(),
            });
        }

        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern {
                route: route.name.clone(),
            });
            continue;
        }

        if let Err(e) = compile(&route.pattern, &route.groups) {
            errors.push(ValidationError::InvalidPattern {
                route: route.name.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
