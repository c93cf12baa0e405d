//! Pending-navigation capability.
//!
//! DESIGN
//! ======
//! Non-view code (the response interceptor) cannot reach the router, so it
//! records a pending target here and an app-level effect drains it into the
//! real navigate closure. Guards redirect through their own injected
//! closure instead; only transport recovery flows through this hop.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use leptos::prelude::*;

/// Capability for requesting a route change from outside view code.
#[derive(Clone, Copy)]
pub struct Navigator {
    pending: RwSignal<Option<String>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Request a navigation to `path`, replacing any not-yet-drained target.
    pub fn request(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }

    /// Signal the app-level drain effect watches.
    pub fn pending(&self) -> RwSignal<Option<String>> {
        self.pending
    }

    /// Take the pending target, leaving none behind.
    pub fn take(&self) -> Option<String> {
        self.pending.try_update(Option::take).flatten()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
