//! Scripted [`AuthApi`] for flow tests.

use std::cell::{Cell, RefCell};

use super::api::{AuthApi, AuthError};
use super::types::{LoginReply, LoginRequest, SignupRequest};

/// Replies with canned results and records every request it receives.
pub(crate) struct MockAuthApi {
    login_reply: Result<LoginReply, AuthError>,
    register_reply: Result<serde_json::Value, AuthError>,
    pub(crate) login_calls: RefCell<Vec<LoginRequest>>,
    pub(crate) register_calls: RefCell<Vec<SignupRequest>>,
    calls: Cell<usize>,
}

impl MockAuthApi {
    pub(crate) fn new() -> Self {
        Self {
            login_reply: Err(AuthError::Unavailable),
            register_reply: Ok(serde_json::json!({ "ok": true })),
            login_calls: RefCell::new(Vec::new()),
            register_calls: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    pub(crate) fn with_login(mut self, reply: Result<LoginReply, AuthError>) -> Self {
        self.login_reply = reply;
        self
    }

    pub(crate) fn with_register(mut self, reply: Result<serde_json::Value, AuthError>) -> Self {
        self.register_reply = reply;
        self
    }

    /// Total requests across both endpoints.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, AuthError> {
        self.calls.set(self.calls.get() + 1);
        self.login_calls.borrow_mut().push(request.clone());
        self.login_reply.clone()
    }

    async fn register(&self, request: &SignupRequest) -> Result<serde_json::Value, AuthError> {
        self.calls.set(self.calls.get() + 1);
        self.register_calls.borrow_mut().push(request.clone());
        self.register_reply.clone()
    }
}
