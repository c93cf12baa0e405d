//! Request/response interceptor pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outgoing call runs [`prepare`] before dispatch and [`settle`] on
//! its outcome. `settle` is the only place authentication-expiry recovery is
//! triggered; the navigation guard never reacts to transport signals.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use crate::net::types::{ApiFailure, RequestContext, ResponseOutcome};
use crate::routing::routes::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;
use crate::util::notify::Notifier;

/// Header carrying the bearer credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Credential header value for `token`.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Request interceptor: attach the stored credential, if any.
///
/// Never blocks or rejects a call for lack of a credential; enforcement is
/// the navigation guard's job, not the transport's.
pub fn prepare(mut ctx: RequestContext, session: &SessionStore) -> RequestContext {
    if let Some(token) = session.token() {
        ctx.headers
            .push((AUTHORIZATION_HEADER.to_owned(), bearer_value(&token)));
    }
    log::debug!(
        "sending request: {} {} {:?}",
        ctx.method.as_str(),
        ctx.url,
        ctx.body
    );
    ctx
}

/// Response interceptor: pass successes through, recover locally on 401,
/// and propagate every failure to the caller.
pub fn settle(
    outcome: ResponseOutcome,
    session: &SessionStore,
    navigator: Navigator,
    notifier: Notifier,
) -> Result<serde_json::Value, ApiFailure> {
    match outcome {
        ResponseOutcome::Success { url, status, body } => {
            log::debug!("received response: {url} status={status}");
            Ok(body)
        }
        ResponseOutcome::Failure {
            url,
            status: Some(401),
            ..
        } => {
            session.remove_user();
            navigator.request(LOGIN_PATH);
            notifier.error("Session expired, please log in again.");
            log::warn!("authentication expired: {url}");
            Err(ApiFailure::AuthenticationExpired { url })
        }
        ResponseOutcome::Failure {
            url,
            status: Some(status),
            message,
        } => {
            log::error!("request failed: {url} status={status} {message}");
            Err(ApiFailure::Rejected {
                url,
                status,
                message,
            })
        }
        ResponseOutcome::Failure {
            url,
            status: None,
            message,
        } => {
            log::error!("request failed: {url} {message}");
            Err(ApiFailure::Transport { url, message })
        }
    }
}
