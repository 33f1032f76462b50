//! Login form state and the `Idle -> Submitting -> {Authenticated, Failed}` flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` keeps a [`LoginState`] in a signal. A submit runs in three
//! steps so the signal is never held across an `await`:
//!
//! 1. [`LoginState::begin_submit`] validates and flips to `Submitting`,
//!    handing back the request to send (or `None` to stop here).
//! 2. [`send_login`] talks to the [`AuthApi`] and saves the session.
//! 3. [`LoginState::finish`] folds the outcome back in and says where to go
//!    and what to tell the user.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::{AuthApi, AuthError};
use crate::net::types::{LoginReply, LoginRequest, Role};
use crate::state::effect::SubmitEffect;
use crate::state::session::{Session, SessionStore, load_or_clear};
use crate::state::toast::Toast;
use crate::util::routes::destination_for;
use crate::util::validation::{ValidationErrors, validate_login};

pub const LOGIN_REJECTED_MESSAGE: &str = "Login failed. Please try again.";
pub const LOGIN_ERROR_TOAST: &str = "Check email and password...?";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginForm {
    fn request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }

    /// Clear the credentials, keeping the visibility toggle.
    fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

/// Where the login page is in its submit cycle.
///
/// `Failed` renders like `Idle`: the form is back and another attempt is
/// allowed. It only records that the last completed attempt was rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated(Role),
    Failed,
}

/// What came back from one login attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Authenticated(Session),
    /// The server answered, but not with 200.
    Rejected { status: u16 },
    /// Transport, decode, or storage failure.
    Failed(AuthError),
}

#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub form: LoginForm,
    pub errors: ValidationErrors,
    /// Summary line under the form: joined validation errors or the rejection notice.
    pub message: Option<String>,
    pub phase: LoginPhase,
}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns `None` while a request is already in flight or when the form
    /// has errors; in the latter case the errors are recorded for display.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_submitting() {
            return None;
        }
        self.errors = validate_login(&self.form);
        if !self.errors.is_empty() {
            self.message = Some(self.errors.summary());
            return None;
        }
        self.message = None;
        self.phase = LoginPhase::Submitting;
        Some(self.form.request())
    }

    /// Apply the outcome of a request started by [`Self::begin_submit`].
    pub fn finish(&mut self, outcome: LoginOutcome) -> SubmitEffect {
        match outcome {
            LoginOutcome::Authenticated(session) => {
                let role = session.role();
                self.form.reset();
                self.phase = LoginPhase::Authenticated(role);
                SubmitEffect::redirect(destination_for(role))
            }
            LoginOutcome::Rejected { .. } => {
                self.form.reset();
                self.message = Some(LOGIN_REJECTED_MESSAGE.to_owned());
                self.phase = LoginPhase::Failed;
                SubmitEffect::default()
            }
            LoginOutcome::Failed(_) => {
                self.phase = LoginPhase::Idle;
                SubmitEffect::toast(Toast::error(LOGIN_ERROR_TOAST))
            }
        }
    }
}

/// Send one login request and persist the session on success.
pub async fn send_login<A: AuthApi>(api: &A, store: &dyn SessionStore, request: &LoginRequest) -> LoginOutcome {
    match api.login(request).await {
        Ok(LoginReply::Accepted(resp)) => {
            let session = Session::from(resp);
            if let Err(e) = store.save(&session) {
                leptos::logging::error!("login succeeded but session save failed: {e}");
                return LoginOutcome::Failed(e);
            }
            LoginOutcome::Authenticated(session)
        }
        Ok(LoginReply::Unexpected { status }) => {
            leptos::logging::warn!("login failed: status {status}");
            LoginOutcome::Rejected { status }
        }
        Err(e) => {
            leptos::logging::error!("login error: {e}");
            LoginOutcome::Failed(e)
        }
    }
}

/// Redirect target for a visitor who already has a stored session.
///
/// The stored role is trusted as-is; the token is not revalidated.
pub fn resume_session(store: &dyn SessionStore) -> Option<&'static str> {
    load_or_clear(store).map(|session| destination_for(session.role()))
}
