//! Single-pattern dispatcher.

use std::fmt;

use crate::capture::{CaptureResult, Defaults, Params, RouteCapture, SubPatterns};

/// One compiled pattern bound to a callback.
///
/// ```
/// use uri_route::Route;
///
/// let route = Route::new("/<group1>/<group2>", |params, uri| {
///     println!("{uri}: {:?}", params.get("group1"));
/// })
/// .unwrap();
/// assert!(route.submit("/foo/bar"));
/// assert!(!route.submit("/route/fail/"));
/// ```
pub struct Route<F> {
    capture: RouteCapture,
    callback: F,
}

impl<F> Route<F>
where
    F: Fn(&Params, &str),
{
    pub fn new(pattern: &str, callback: F) -> CaptureResult<Self> {
        Self::with_groups(pattern, &SubPatterns::new(), callback)
    }

    pub fn with_groups(pattern: &str, groups: &SubPatterns, callback: F) -> CaptureResult<Self> {
        Ok(Self {
            capture: RouteCapture::with_groups(pattern, groups)?,
            callback,
        })
    }

    /// Replace the default overlay of the route.
    pub fn set_default(&mut self, defaults: Defaults) -> &mut Self {
        self.capture.set_default(defaults);
        self
    }

    pub fn capture(&self) -> &RouteCapture {
        &self.capture
    }

    /// Match `uri`, invoking the callback on success.
    pub fn submit(&self, uri: &str) -> bool {
        match self.capture.exec(uri) {
            Some(params) => {
                (self.callback)(&params, uri);
                true
            }
            None => false,
        }
    }
}

impl<F> fmt::Debug for Route<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}
