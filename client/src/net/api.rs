//! REST client for the remote authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls fail with
//! [`AuthError::Unavailable`] since the endpoints are only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`AuthError`] value. Pages turn them into toasts and
//! return the form to an idle, retryable state; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginReply, LoginRequest, SignupRequest};

pub const LOGIN_ENDPOINT: &str = "/login";
pub const SIGNUP_ENDPOINT: &str = "/post";

/// Failure taxonomy for calls to the remote service and for session storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response (offline, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser storage rejected a read or write.
    #[error("session storage failed: {0}")]
    Storage(String),

    /// HTTP is not available in this build (SSR / native).
    #[error("not available on server")]
    Unavailable,
}

/// Operations the login and signup pages need from the remote service.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Issue `POST /login` once.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or a
    /// 200 body cannot be decoded.
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, AuthError>;

    /// Issue `POST /post` once. The response body is returned for logging only.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    async fn register(&self, request: &SignupRequest) -> Result<serde_json::Value, AuthError>;
}

/// [`AuthApi`] backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Client pointed at the compiled-in API base URL.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Map a `POST /login` status before the body is read.
///
/// `Ok(None)` means 200 and the body should be decoded. Any other 2xx is a
/// completed but unexpected reply; everything outside 2xx is an error.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn classify_login_status(status: u16) -> Result<Option<LoginReply>, AuthError> {
    match status {
        200 => Ok(None),
        201..=299 => Ok(Some(LoginReply::Unexpected { status })),
        _ => Err(AuthError::Status { status }),
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_ENDPOINT))
                .json(request)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if let Some(reply) = classify_login_status(resp.status())? {
                return Ok(reply);
            }
            let body = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            Ok(LoginReply::Accepted(body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(LOGIN_ENDPOINT), request);
            Err(AuthError::Unavailable)
        }
    }

    async fn register(&self, request: &SignupRequest) -> Result<serde_json::Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(SIGNUP_ENDPOINT))
                .json(request)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Status { status: resp.status() });
            }
            // Body shape is not part of the contract; an empty body is still a success.
            Ok(resp.json().await.unwrap_or(serde_json::Value::Null))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(SIGNUP_ENDPOINT), request);
            Err(AuthError::Unavailable)
        }
    }
}
