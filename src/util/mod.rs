//! Capability helpers injected into the access layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Notifications and navigation requests are passed around as explicit
//! capabilities so interceptors and guards stay free of UI framework
//! globals and remain unit-testable off-browser.

pub mod navigate;
pub mod notify;
