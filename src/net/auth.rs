//! Sign-in endpoints of the warehouse service.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs; a 401 on these calls flows through the same
//! response-interceptor recovery as any other request. Storing the session
//! pair on a successful login is the login page's job, not this module's.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiClient;
use crate::net::types::{ApiFailure, decode_envelope};
use crate::state::session::{UserProfile, UserType};

const LOGIN_ENDPOINT: &str = "/user/login";
const REGISTER_ENDPOINT: &str = "/user/register";
const CHECK_TOKEN_ENDPOINT: &str = "/user/check-token";

/// Credentials submitted to `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Optional expected role; the service rejects a mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

/// Successful login payload: the signed-in user and their bearer credential.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Registration form submitted to `POST /user/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

/// Sign in and return the session payload to store.
///
/// # Errors
///
/// Returns an [`ApiFailure`] when the call fails or the response envelope
/// carries no login payload.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiFailure> {
    let body = api.post(LOGIN_ENDPOINT, request).await?;
    decode_login(body)
}

/// Create an account. The caller sends the user to the login view afterwards.
///
/// # Errors
///
/// Returns an [`ApiFailure`] when the call fails or the service rejects the
/// registration.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<(), ApiFailure> {
    let body = api.post(REGISTER_ENDPOINT, request).await?;
    decode_envelope(REGISTER_ENDPOINT, body).map(|_| ())
}

/// Revalidate a stored credential against the service.
///
/// A stale credential comes back as a 401 and flows through the response
/// interceptor's recovery before this returns.
///
/// # Errors
///
/// Returns an [`ApiFailure`] when the call fails or the token is rejected.
pub async fn check_token(api: &ApiClient, token: &str) -> Result<(), ApiFailure> {
    let path = check_token_path(token);
    let body = api.get(&path).await?;
    decode_envelope(CHECK_TOKEN_ENDPOINT, body).map(|_| ())
}

fn check_token_path(token: &str) -> String {
    format!("{CHECK_TOKEN_ENDPOINT}?token={token}")
}

fn decode_login(body: serde_json::Value) -> Result<LoginResponse, ApiFailure> {
    let envelope = decode_envelope(LOGIN_ENDPOINT, body)?;
    let data = envelope.data.ok_or_else(|| ApiFailure::Transport {
        url: LOGIN_ENDPOINT.to_owned(),
        message: "login response carried no payload".to_owned(),
    })?;
    serde_json::from_value(data).map_err(|e| ApiFailure::Transport {
        url: LOGIN_ENDPOINT.to_owned(),
        message: format!("invalid login payload: {e}"),
    })
}
