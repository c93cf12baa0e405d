//! Networking modules for the HTTP access layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns transport dispatch, `interceptor` the credential and recovery
//! middleware, `auth` the service's sign-in endpoints, and `types` the wire
//! schema shared between them.

pub mod api;
pub mod auth;
pub mod interceptor;
pub mod types;
