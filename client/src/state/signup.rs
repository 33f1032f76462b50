//! Signup form state and the single-shot registration flow.
//!
//! Same three-step shape as the login flow: `begin_submit` validates and
//! builds the request, [`send_signup`] issues it, `finish` applies the result.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::api::{AuthApi, AuthError};
use crate::net::types::{Role, SignupRequest};
use crate::state::effect::SubmitEffect;
use crate::state::toast::Toast;
use crate::util::routes::LOGIN_PATH;
use crate::util::validation::{ValidationErrors, validate_signup};

pub const SIGNUP_SUCCESS_TOAST: &str = "Signup successful!";
pub const SIGNUP_FAILURE_TOAST: &str = "Signup failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    pub terms: bool,
    /// `None` when the role selector holds something unrecognised.
    pub role: Option<Role>,
    pub admin_token: String,
    pub show_password: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            mobile_number: String::new(),
            terms: false,
            role: Some(Role::User),
            admin_token: String::new(),
            show_password: false,
        }
    }
}

impl SignupForm {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Request body; the admin token is only sent for admin signups.
    fn request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            mobile_number: self.mobile_number.clone(),
            role: self.role.unwrap_or_default(),
            admin_token: self.is_admin().then(|| self.admin_token.clone()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignupState {
    pub form: SignupForm,
    pub errors: ValidationErrors,
    pub submitting: bool,
}

impl SignupState {
    /// Validate and mark the request in flight.
    ///
    /// Returns `None` while a request is already in flight or when the form
    /// has errors.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.submitting {
            return None;
        }
        self.errors = validate_signup(&self.form);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(self.form.request())
    }

    /// Apply the result of a request started by [`Self::begin_submit`].
    pub fn finish(&mut self, result: Result<(), AuthError>) -> SubmitEffect {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = SignupForm::default();
                SubmitEffect::toast(Toast::success(SIGNUP_SUCCESS_TOAST)).then_redirect(LOGIN_PATH)
            }
            Err(_) => SubmitEffect::toast(Toast::error(SIGNUP_FAILURE_TOAST)),
        }
    }
}

/// Send one registration request. No retries.
///
/// # Errors
///
/// Returns whatever the [`AuthApi`] reported.
pub async fn send_signup<A: AuthApi>(api: &A, request: &SignupRequest) -> Result<(), AuthError> {
    match api.register(request).await {
        Ok(body) => {
            leptos::logging::log!("signup successful: {body}");
            Ok(())
        }
        Err(e) => {
            leptos::logging::error!("signup error: {e}");
            Err(e)
        }
    }
}
