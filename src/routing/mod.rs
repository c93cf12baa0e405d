//! Routing modules: the static route table and the pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` is the immutable inventory of navigable views; `guard` decides,
//! before a transition commits, whether the session may enter the target.

pub mod guard;
pub mod routes;
