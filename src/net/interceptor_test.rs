use std::rc::Rc;

use super::*;
use crate::net::types::Method;
use crate::state::session::{MemoryStorage, Session, SessionStore, TOKEN_KEY, USER_KEY};

fn session_with_token(token: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    store.set(&Session {
        token: Some(token.to_owned()),
        user: None,
    });
    store
}

// =============================================================
// prepare
// =============================================================

#[test]
fn prepare_attaches_bearer_header_when_token_present() {
    let session = session_with_token("abc");
    let ctx = prepare(RequestContext::get("/user/check-token"), &session);
    assert_eq!(ctx.header(AUTHORIZATION_HEADER), Some("Bearer abc"));
}

#[test]
fn prepare_leaves_headers_untouched_without_token() {
    let session = SessionStore::in_memory();
    let ctx = prepare(RequestContext::get("/user/check-token"), &session);
    assert!(ctx.headers.is_empty());
}

#[test]
fn prepare_forwards_the_rest_of_the_context_unchanged() {
    let session = session_with_token("abc");
    let body = serde_json::json!({ "email": "a@b.c" });
    let ctx = prepare(RequestContext::post("/user/login", body.clone()), &session);
    assert_eq!(ctx.method, Method::Post);
    assert_eq!(ctx.url, "/user/login");
    assert_eq!(ctx.body, Some(body));
}

#[test]
fn prepare_never_rejects_a_credentialless_request() {
    let session = SessionStore::in_memory();
    let ctx = prepare(
        RequestContext::post("/user/login", serde_json::json!({})),
        &session,
    );
    assert_eq!(ctx.url, "/user/login");
}

// =============================================================
// settle: success and plain failures
// =============================================================

#[test]
fn settle_passes_success_bodies_through() {
    let session = SessionStore::in_memory();
    let body = serde_json::json!({ "code": 200 });
    let result = settle(
        ResponseOutcome::Success {
            url: "/x".to_owned(),
            status: 200,
            body: body.clone(),
        },
        &session,
        Navigator::new(),
        Notifier::new(),
    );
    assert_eq!(result, Ok(body));
}

#[test]
fn settle_propagates_transport_failures_unchanged() {
    let session = session_with_token("abc");
    let navigator = Navigator::new();
    let notifier = Notifier::new();
    let result = settle(
        ResponseOutcome::Failure {
            url: "/x".to_owned(),
            status: None,
            message: "timed out after 10000ms".to_owned(),
        },
        &session,
        navigator,
        notifier,
    );
    assert_eq!(
        result,
        Err(ApiFailure::Transport {
            url: "/x".to_owned(),
            message: "timed out after 10000ms".to_owned(),
        })
    );
    // No recovery on a non-401 failure.
    assert_eq!(session.token(), Some("abc".to_owned()));
    assert_eq!(navigator.take(), None);
    assert_eq!(notifier.latest(), None);
}

#[test]
fn settle_propagates_non_401_statuses_as_rejections() {
    let session = SessionStore::in_memory();
    let navigator = Navigator::new();
    let result = settle(
        ResponseOutcome::Failure {
            url: "/x".to_owned(),
            status: Some(500),
            message: "boom".to_owned(),
        },
        &session,
        navigator,
        Notifier::new(),
    );
    assert_eq!(
        result,
        Err(ApiFailure::Rejected {
            url: "/x".to_owned(),
            status: 500,
            message: "boom".to_owned(),
        })
    );
    assert_eq!(navigator.take(), None);
}

// =============================================================
// settle: 401 recovery
// =============================================================

#[test]
fn settle_401_clears_profile_requests_login_and_still_fails() {
    let backend = Rc::new(MemoryStorage::default());
    let session = SessionStore::new(backend.clone());
    backend.set_item(TOKEN_KEY, "abc");
    backend.set_item(USER_KEY, r#"{"userType": 0}"#);

    let navigator = Navigator::new();
    let notifier = Notifier::new();
    let result = settle(
        ResponseOutcome::Failure {
            url: "/user/check-token".to_owned(),
            status: Some(401),
            message: "invalid token".to_owned(),
        },
        &session,
        navigator,
        notifier,
    );

    assert_eq!(
        result,
        Err(ApiFailure::AuthenticationExpired {
            url: "/user/check-token".to_owned(),
        })
    );
    // Only the profile key is removed; credential removal is implied.
    assert_eq!(backend.get_item(USER_KEY), None);
    assert_eq!(backend.get_item(TOKEN_KEY), Some("abc".to_owned()));
    assert_eq!(navigator.take(), Some("/login".to_owned()));
}

#[test]
fn settle_401_emits_exactly_one_notice() {
    let session = SessionStore::in_memory();
    let notifier = Notifier::new();
    let _ = settle(
        ResponseOutcome::Failure {
            url: "/x".to_owned(),
            status: Some(401),
            message: "expired".to_owned(),
        },
        &session,
        Navigator::new(),
        notifier,
    );
    let notices = notifier.snapshot();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text, "Session expired, please log in again.");
}

#[test]
fn bearer_value_renders_the_scheme_prefix() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
}
