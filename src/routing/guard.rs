//! Pre-navigation access checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages install a guard evaluation before their content mounts; redirect
//! decisions come out of the same synchronous pass that reads the session,
//! so a denied target never gets to do any data work. Authentication-expiry
//! recovery lives in the response interceptor, not here; the guard only
//! reacts to what is in the store at evaluation time.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::routes::{HOME_PATH, LOGIN_PATH, REGISTER_PATH, RouteMeta};
use crate::state::session::{Session, SessionStore};
use crate::util::notify::Notifier;

/// Outcome of one guard evaluation. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Commit the transition.
    Allow,
    /// Abandon the transition and go to the login view.
    RedirectLogin,
    /// Abandon the transition and go to the authenticated landing view.
    RedirectHome,
}

impl GuardOutcome {
    /// Redirect target, if the transition was rejected.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectHome => Some(HOME_PATH),
        }
    }
}

/// Tunable guard behavior, fixed at application start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Reject navigation to protected routes when no session exists at all.
    ///
    /// The deployed behavior ships with this off: only malformed sessions
    /// and missing roles redirect, and a bare unauthenticated visit renders
    /// the target view (which then has no data to show). Flipping this on
    /// turns such visits into login redirects as well.
    pub require_session: bool,
}

/// Role and session checks evaluated before each route transition commits.
#[derive(Clone)]
pub struct NavigationGuard {
    session: SessionStore,
    notifier: Notifier,
    policy: GuardPolicy,
}

impl NavigationGuard {
    pub fn new(session: SessionStore, notifier: Notifier, policy: GuardPolicy) -> Self {
        Self {
            session,
            notifier,
            policy,
        }
    }

    /// Decide a transition to `path` with `meta`, synchronously.
    ///
    /// A malformed stored profile is recovered here: both session keys are
    /// cleared in the same pass that resolves the redirect, so no later
    /// evaluation can observe the broken value.
    pub fn evaluate(&self, path: &str, meta: RouteMeta) -> GuardOutcome {
        if path == LOGIN_PATH || path == REGISTER_PATH {
            return GuardOutcome::Allow;
        }

        let session = match self.session.get() {
            Ok(session) => session,
            Err(e) => {
                log::warn!("could not read stored session: {e}");
                return self.reject_invalid_session();
            }
        };

        if self.policy.require_session
            && (session.token.is_none() || session.user.is_none())
        {
            self.notifier.warning("Please log in first.");
            return GuardOutcome::RedirectLogin;
        }

        if meta.requires_admin {
            return self.evaluate_admin(&session);
        }

        GuardOutcome::Allow
    }

    fn evaluate_admin(&self, session: &Session) -> GuardOutcome {
        match &session.user {
            // No profile to check a role on: same recovery as a corrupt one.
            None => self.reject_invalid_session(),
            Some(user) if !user.is_admin() => {
                self.notifier
                    .error("You do not have permission to access this page.");
                GuardOutcome::RedirectHome
            }
            Some(_) => GuardOutcome::Allow,
        }
    }

    fn reject_invalid_session(&self) -> GuardOutcome {
        self.session.clear();
        self.notifier.error("Session invalid, please log in again.");
        GuardOutcome::RedirectLogin
    }
}

/// Run a guard evaluation when the target view mounts, redirecting through
/// `navigate` when the transition is rejected.
pub fn install_route_guard<F>(
    guard: NavigationGuard,
    path: &'static str,
    meta: RouteMeta,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard.evaluate(path, meta).redirect_target() {
            navigate(target, NavigateOptions::default());
        }
    });
}
