//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the per-browser-session credential and profile pair that
//! the net interceptors and the route guard consult.

pub mod session;
