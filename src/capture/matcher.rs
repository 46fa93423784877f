//! Matching URIs against a compiled pattern.
//!
//! # Responsibilities
//! - Run the anchored regex against the whole candidate string
//! - Build the parameter map: absent marker, then defaults, then captures
//!
//! # Design Decisions
//! - A miss is `None`, not an error
//! - Each call builds a fresh `Params`; nothing is shared between calls
//! - The default overlay is replaced wholesale, never merged

use crate::capture::compiler::{compile, CompiledPattern, SubPatterns};
use crate::capture::error::CaptureResult;
use crate::capture::params::{Defaults, Params};

/// A compiled pattern plus its default overlay.
#[derive(Debug, Clone)]
pub struct RouteCapture {
    compiled: CompiledPattern,
    defaults: Defaults,
}

impl RouteCapture {
    /// Compile a pattern using the default fragment for every group.
    pub fn new(pattern: &str) -> CaptureResult<Self> {
        Self::with_groups(pattern, &SubPatterns::new())
    }

    /// Compile a pattern with per-group fragments.
    pub fn with_groups(pattern: &str, groups: &SubPatterns) -> CaptureResult<Self> {
        Ok(Self {
            compiled: compile(pattern, groups)?,
            defaults: Defaults::new(),
        })
    }

    /// Replace the default overlay.
    pub fn set_default(&mut self, defaults: Defaults) {
        self.defaults = defaults;
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn pattern(&self) -> &str {
        self.compiled.pattern()
    }

    /// The generated regular expression source.
    pub fn as_str(&self) -> &str {
        self.compiled.as_str()
    }

    pub fn names(&self) -> &[String] {
        self.compiled.names()
    }

    pub fn is_match(&self, uri: &str) -> bool {
        self.compiled.regex().is_match(uri)
    }

    /// Match `uri` and extract its parameters.
    pub fn exec(&self, uri: &str) -> Option<Params> {
        let Some(caps) = self.compiled.regex().captures(uri) else {
            tracing::trace!(pattern = self.pattern(), uri, "No match");
            return None;
        };

        let mut params = Params::new();
        for name in self.names() {
            params.insert(name.as_str(), None);
        }
        for (key, value) in &self.defaults {
            params.insert(key.as_str(), Some(value.clone()));
        }
        for (i, name) in self.names().iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                params.insert(name.as_str(), Some(m.as_str().to_string()));
            }
        }

        tracing::trace!(pattern = self.pattern(), uri, "Matched");
        Some(params)
    }
}
