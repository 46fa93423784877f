//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes under unique names
//! - Look up the first route matching a URI
//! - Hand the extracted parameters to the callback
//!
//! # Design Decisions
//! - Routes are appended only; registration order is match order
//! - First match wins, no scoring
//! - `set_default` targets the most recently added route
//! - Explicit no-match (`None` / `false`) rather than an error

use std::fmt;

use thiserror::Error;

use crate::capture::{CaptureError, Defaults, Params, RouteCapture, SubPatterns};
use crate::config::RouteConfig;

/// Errors raised while building a route table.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("uri-route: empty pattern for route `{0}`")]
    EmptyPattern(String),

    #[error("uri-route: route name `{0}` already exists")]
    DuplicateRoute(String),

    #[error("uri-route: route `{route}`: {source}")]
    Compile {
        route: String,
        #[source]
        source: CaptureError,
    },
}

/// A successful lookup: which route matched and what it extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a str,
    pub params: Params,
}

#[derive(Debug)]
struct NamedRoute {
    name: String,
    capture: RouteCapture,
}

/// Ordered set of named routes sharing one callback.
///
/// ```
/// use uri_route::RouteTable;
///
/// let mut table = RouteTable::new(|params, uri| println!("{uri}: {params:?}"));
/// table
///     .add("foobar", "/foo/bar")?
///     .add("default", "/(<controller>(/<action>(/<param>)))")?;
///
/// assert_eq!(table.resolve("/foo/bar").unwrap().route, "foobar");
/// assert!(table.submit("/blog/view"));
/// # Ok::<(), uri_route::RouteError>(())
/// ```
pub struct RouteTable<F> {
    routes: Vec<NamedRoute>,
    callback: F,
}

impl<F> RouteTable<F>
where
    F: Fn(&Params, &str),
{
    pub fn new(callback: F) -> Self {
        Self {
            routes: Vec::new(),
            callback,
        }
    }

    /// Build a table from route definitions, in order.
    pub fn from_config(routes: &[RouteConfig], callback: F) -> Result<Self, RouteError> {
        let mut table = Self::new(callback);
        for route in routes {
            table
                .add_with(&route.name, &route.pattern, &route.groups)?
                .set_default(route.defaults.clone());
        }
        Ok(table)
    }

    /// Compile `pattern` and append it under `name`.
    pub fn add(&mut self, name: impl Into<String>, pattern: &str) -> Result<&mut Self, RouteError> {
        self.add_with(name, pattern, &SubPatterns::new())
    }

    /// Like [`add`](Self::add), with per-group regex fragments.
    pub fn add_with(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
        groups: &SubPatterns,
    ) -> Result<&mut Self, RouteError> {
        let name = name.into();
        if pattern.is_empty() {
            return Err(RouteError::EmptyPattern(name));
        }
        if self.get(&name).is_some() {
            return Err(RouteError::DuplicateRoute(name));
        }

        let capture = RouteCapture::with_groups(pattern, groups).map_err(|source| RouteError::Compile {
            route: name.clone(),
            source,
        })?;

        tracing::debug!(route = %name, pattern, regex = capture.as_str(), "Route registered");
        self.routes.push(NamedRoute { name, capture });
        Ok(self)
    }

    /// Replace the default overlay of the most recently added route.
    pub fn set_default(&mut self, defaults: Defaults) -> &mut Self {
        match self.routes.last_mut() {
            Some(route) => route.capture.set_default(defaults),
            None => tracing::warn!("set_default called before any route was added, ignoring"),
        }
        self
    }

    /// Find the first route matching `uri` without invoking the callback.
    pub fn resolve(&self, uri: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route.capture.exec(uri).map(|params| RouteMatch {
                route: route.name.as_str(),
                params,
            })
        })
    }

    /// Dispatch `uri` to the callback through the first matching route.
    pub fn submit(&self, uri: &str) -> bool {
        match self.resolve(uri) {
            Some(found) => {
                tracing::debug!(route = found.route, uri, "Route matched");
                (self.callback)(&found.params, uri);
                true
            }
            None => {
                tracing::debug!(uri, "No route matched");
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RouteCapture> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .map(|route| &route.capture)
    }

    /// Route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<F> fmt::Debug for RouteTable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &Params, _: &str) {}

    #[test]
    fn test_first_match_wins() {
        let mut table = RouteTable::new(noop);
        table
            .add("foobar", "/foo/bar")
            .unwrap()
            .add("default", "/(<controller>(/<action>(/<param>)))")
            .unwrap();

        let found = table.resolve("/foo/bar").unwrap();
        assert_eq!(found.route, "foobar");
        assert!(found.params.is_empty());

        let found = table.resolve("/blog").unwrap();
        assert_eq!(found.route, "default");
        assert_eq!(found.params.get("controller"), Some("blog"));
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let mut table = RouteTable::new(noop);
        table.add("a", "/a").unwrap();
        let err = table.add("a", "/b").unwrap_err();
        assert!(matches!(err, RouteError::DuplicateRoute(ref name) if name == "a"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut table = RouteTable::new(noop);
        let err = table.add("a", "").unwrap_err();
        assert!(matches!(err, RouteError::EmptyPattern(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_compile_error_wrapped() {
        let mut table = RouteTable::new(noop);
        let err = table.add("twice", "/<id>/<id>").unwrap_err();
        assert!(matches!(
            err,
            RouteError::Compile { ref route, source: CaptureError::DuplicateGroup(_) } if route == "twice"
        ));
    }

    #[test]
    fn test_set_default_targets_last_route() {
        let mut table = RouteTable::new(noop);
        table
            .add("first", "/first")
            .unwrap()
            .add("second", "/second")
            .unwrap()
            .set_default(Defaults::from([("k".to_string(), "v".to_string())]));

        assert!(table.get("first").unwrap().defaults().is_empty());
        assert_eq!(table.get("second").unwrap().defaults()["k"], "v");
    }

    #[test]
    fn test_set_default_without_routes_is_noop() {
        let mut table = RouteTable::new(noop);
        table.set_default(Defaults::from([("k".to_string(), "v".to_string())]));
        assert!(table.is_empty());
        assert!(!table.submit(""));
    }

    #[test]
    fn test_names_in_order() {
        let mut table = RouteTable::new(noop);
        table.add("b", "/b").unwrap().add("a", "/a").unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), ["b", "a"]);
    }
}
