//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The real data views belong to the host application; the only chrome this
//! layer ships is the banner surfacing guard and interceptor notices.

pub mod notice_banner;
