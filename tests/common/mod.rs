//! Shared utilities for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use uri_route::{Defaults, Params, SubPatterns};

/// Records every callback invocation of a route or route table.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<(Params, String)>>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends `(params, uri)` to this recorder.
    pub fn callback(&self) -> impl Fn(&Params, &str) {
        let calls = Rc::clone(&self.calls);
        move |params: &Params, uri: &str| {
            calls.borrow_mut().push((params.clone(), uri.to_string()));
        }
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Arguments of the most recent call.
    pub fn last(&self) -> Option<(Params, String)> {
        self.calls.borrow().last().cloned()
    }
}

/// Build expected params from `(name, value)` pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, Option<&str>)]) -> Params {
    pairs.iter().copied().collect()
}

#[allow(dead_code)]
pub fn defaults(pairs: &[(&str, &str)]) -> Defaults {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn groups(pairs: &[(&str, &str)]) -> SubPatterns {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
