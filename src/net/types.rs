//! Wire model for the HTTP access layer.
//!
//! DESIGN
//! ======
//! Requests and responses flow through the interceptor pair as plain data so
//! recovery decisions stay type-checkable and unit-testable off-browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP method for an outgoing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// An outgoing call before dispatch: target, payload, and headers.
///
/// The request interceptor mutates this exactly once (credential header
/// push); the transport sends it unmodified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestContext {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
            headers: Vec::new(),
        }
    }

    /// Value of the first header named `name`, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A completed or failed call as seen by the response interceptor.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseOutcome {
    /// 2xx response with a decoded JSON body.
    Success {
        url: String,
        status: u16,
        body: serde_json::Value,
    },
    /// Transport error (no response at all, or a timeout) when `status` is
    /// `None`; an HTTP error status otherwise.
    Failure {
        url: String,
        status: Option<u16>,
        message: String,
    },
}

/// Failures surfaced to request call sites.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// Network or timeout error with no usable response.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The service answered 401. The session was recovered locally and the
    /// failure is still delivered so the call site can react too.
    #[error("authentication expired for {url}")]
    AuthenticationExpired { url: String },
    /// Any non-401 error status.
    #[error("request to {url} rejected with status {status}: {message}")]
    Rejected {
        url: String,
        status: u16,
        message: String,
    },
}

/// Standard `{code, message, data}` envelope the service wraps payloads in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Decode an envelope body, surfacing non-200 envelope codes as rejections.
pub fn decode_envelope(url: &str, body: serde_json::Value) -> Result<Envelope, ApiFailure> {
    let envelope: Envelope = serde_json::from_value(body).map_err(|e| ApiFailure::Transport {
        url: url.to_owned(),
        message: format!("invalid response envelope: {e}"),
    })?;
    if envelope.code != 200 {
        return Err(ApiFailure::Rejected {
            url: url.to_owned(),
            status: u16::try_from(envelope.code).unwrap_or(500),
            message: envelope.message,
        });
    }
    Ok(envelope)
}
