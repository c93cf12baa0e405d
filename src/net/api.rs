//! HTTP client for the warehouse service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against the
//! configured timeout. Native builds get stub transport failures since the
//! network is only meaningful in the browser; the interceptor pair still
//! runs on both sides.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use crate::net::interceptor;
use crate::net::types::{ApiFailure, RequestContext, ResponseOutcome};
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;
use crate::util::notify::Notifier;

#[cfg(feature = "hydrate")]
use crate::net::types::Method;

/// One-time endpoint configuration, fixed at application start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    /// Origin every request path is joined onto.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u32,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9090".to_owned(),
            timeout_ms: 10_000,
        }
    }
}

/// Join `path` onto the configured origin.
fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Issues requests through the interceptor pair.
#[derive(Clone)]
pub struct ApiClient {
    config: NetConfig,
    session: SessionStore,
    navigator: Navigator,
    notifier: Notifier,
}

impl ApiClient {
    pub fn new(
        config: NetConfig,
        session: SessionStore,
        navigator: Navigator,
        notifier: Notifier,
    ) -> Self {
        Self {
            config,
            session,
            navigator,
            notifier,
        }
    }

    /// GET `path` and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiFailure`] on transport errors, timeouts, or error
    /// statuses; a 401 additionally triggers session recovery before the
    /// failure is returned.
    pub async fn get(&self, path: &str) -> Result<serde_json::Value, ApiFailure> {
        let url = join_url(&self.config.base_url, path);
        self.dispatch(RequestContext::get(url)).await
    }

    /// POST `body` as JSON to `path` and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiFailure`] on transport errors, timeouts, or error
    /// statuses; a 401 additionally triggers session recovery before the
    /// failure is returned.
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<serde_json::Value, ApiFailure> {
        let url = join_url(&self.config.base_url, path);
        let body = serde_json::to_value(body).map_err(|e| ApiFailure::Transport {
            url: url.clone(),
            message: format!("could not encode request body: {e}"),
        })?;
        self.dispatch(RequestContext::post(url, body)).await
    }

    async fn dispatch(&self, ctx: RequestContext) -> Result<serde_json::Value, ApiFailure> {
        let ctx = interceptor::prepare(ctx, &self.session);
        let outcome = self.transport(ctx).await;
        interceptor::settle(outcome, &self.session, self.navigator, self.notifier)
    }

    #[cfg(feature = "hydrate")]
    async fn transport(&self, ctx: RequestContext) -> ResponseOutcome {
        use futures::future::{Either, select};

        let url = ctx.url.clone();
        let request = Box::pin(send_browser_request(ctx));
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(
            self.config.timeout_ms,
        ));
        match select(request, timeout).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => ResponseOutcome::Failure {
                url,
                status: None,
                message: format!("timed out after {}ms", self.config.timeout_ms),
            },
        }
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    async fn transport(&self, ctx: RequestContext) -> ResponseOutcome {
        ResponseOutcome::Failure {
            url: ctx.url,
            status: None,
            message: "transport not available off-browser".to_owned(),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser_request(ctx: RequestContext) -> ResponseOutcome {
    let mut builder = match ctx.method {
        Method::Get => gloo_net::http::Request::get(&ctx.url),
        Method::Post => gloo_net::http::Request::post(&ctx.url),
    };
    for (name, value) in &ctx.headers {
        builder = builder.header(name, value);
    }

    let request = match &ctx.body {
        Some(body) => match builder.json(body) {
            Ok(request) => request,
            Err(e) => {
                return ResponseOutcome::Failure {
                    url: ctx.url,
                    status: None,
                    message: e.to_string(),
                };
            }
        },
        None => match builder.build() {
            Ok(request) => request,
            Err(e) => {
                return ResponseOutcome::Failure {
                    url: ctx.url,
                    status: None,
                    message: e.to_string(),
                };
            }
        },
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            return ResponseOutcome::Failure {
                url: ctx.url,
                status: None,
                message: e.to_string(),
            };
        }
    };

    let status = response.status();
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return ResponseOutcome::Failure {
            url: ctx.url,
            status: Some(status),
            message,
        };
    }

    match response.json::<serde_json::Value>().await {
        Ok(body) => ResponseOutcome::Success {
            url: ctx.url,
            status,
            body,
        },
        Err(e) => ResponseOutcome::Failure {
            url: ctx.url,
            status: Some(status),
            message: e.to_string(),
        },
    }
}
