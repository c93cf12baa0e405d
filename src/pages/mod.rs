//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages stay thin: they wire the access layer (guard installs, session
//! writes, API calls) and leave real rendering to the host views.

pub mod console;
pub mod login;
pub mod register;
pub mod section;
