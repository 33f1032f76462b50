use futures::executor::block_on;

use super::*;
use crate::net::mock_api::MockAuthApi;
use crate::net::types::LoginResponse;
use crate::state::session::{MemorySessionStore, TOKEN_KEY, USER_DATA_KEY};
use crate::state::toast::ToastKind;
use crate::util::validation::Field;

fn filled(email: &str, password: &str) -> LoginState {
    LoginState {
        form: LoginForm { email: email.to_owned(), password: password.to_owned(), show_password: false },
        ..LoginState::default()
    }
}

fn accepted(role: &str) -> Result<LoginReply, AuthError> {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({ "token": "t1", "user": { "role": role, "name": "Ada" } }))
            .unwrap();
    Ok(LoginReply::Accepted(resp))
}

/// Drive one submit the way `LoginPage` does.
fn submit(state: &mut LoginState, api: &MockAuthApi, store: &MemorySessionStore) -> Option<SubmitEffect> {
    let request = state.begin_submit()?;
    let outcome = block_on(send_login(api, store, &request));
    Some(state.finish(outcome))
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn login_state_default_is_idle_and_empty() {
    let state = LoginState::default();
    assert_eq!(state.phase, LoginPhase::Idle);
    assert_eq!(state.form, LoginForm::default());
    assert!(state.errors.is_empty());
    assert!(state.message.is_none());
}

// =============================================================
// Success
// =============================================================

#[test]
fn admin_login_persists_session_and_redirects_to_admin_dashboard() {
    let api = MockAuthApi::new().with_login(accepted("admin"));
    let store = MemorySessionStore::new();
    let mut state = filled("a@b.com", "x");

    let effect = submit(&mut state, &api, &store).unwrap();

    assert_eq!(effect.redirect, Some("/AdminDashboard"));
    assert!(effect.toast.is_none());
    assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("t1"));
    let user: serde_json::Value = serde_json::from_str(&store.get_item(USER_DATA_KEY).unwrap()).unwrap();
    assert_eq!(user["role"], "admin");
    assert_eq!(state.phase, LoginPhase::Authenticated(Role::Admin));
    assert_eq!(state.form.email, "");
    assert_eq!(state.form.password, "");
}

#[test]
fn user_login_redirects_to_user_dashboard() {
    let api = MockAuthApi::new().with_login(accepted("user"));
    let store = MemorySessionStore::new();
    let mut state = filled("a@b.com", "x");

    let effect = submit(&mut state, &api, &store).unwrap();
    assert_eq!(effect.redirect, Some("/UserDashboard"));
}

#[test]
fn login_sends_email_and_password() {
    let api = MockAuthApi::new().with_login(accepted("user"));
    let store = MemorySessionStore::new();
    let mut state = filled("a@b.com", "pw");
    submit(&mut state, &api, &store);

    let calls = api.login_calls.borrow();
    assert_eq!(calls.as_slice(), &[LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() }]);
}

// =============================================================
// Validation gate
// =============================================================

#[test]
fn malformed_email_never_reaches_the_network() {
    for email in ["ab.com", "a@b", "a@", ""] {
        let api = MockAuthApi::new().with_login(accepted("user"));
        let store = MemorySessionStore::new();
        let mut state = filled(email, "x");

        assert!(submit(&mut state, &api, &store).is_none());
        assert_eq!(api.calls(), 0, "{email:?}");
        assert!(state.errors.get(Field::Email).is_some());
        assert_eq!(state.phase, LoginPhase::Idle);
        assert!(state.message.is_some());
    }
}

#[test]
fn validation_is_recomputed_on_every_attempt() {
    let mut state = filled("bad", "");
    assert!(state.begin_submit().is_none());
    assert_eq!(state.errors.len(), 2);

    state.form.email = "a@b.com".to_owned();
    state.form.password = "x".to_owned();
    assert!(state.begin_submit().is_some());
    assert!(state.errors.is_empty());
    assert!(state.message.is_none());
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut state = filled("a@b.com", "x");
    assert!(state.begin_submit().is_some());
    assert!(state.is_submitting());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.phase, LoginPhase::Submitting);
}

// =============================================================
// Failure paths
// =============================================================

#[test]
fn non_200_response_sets_message_and_clears_form() {
    let api = MockAuthApi::new().with_login(Ok(LoginReply::Unexpected { status: 204 }));
    let store = MemorySessionStore::new();
    let mut state = filled("a@b.com", "x");

    let effect = submit(&mut state, &api, &store).unwrap();

    assert_eq!(effect, SubmitEffect::default());
    assert_eq!(state.message.as_deref(), Some(LOGIN_REJECTED_MESSAGE));
    assert_eq!(state.form.email, "");
    assert_eq!(state.phase, LoginPhase::Failed);
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn network_failure_keeps_form_and_returns_to_idle() {
    let api = MockAuthApi::new().with_login(Err(AuthError::Network("timeout".to_owned())));
    let store = MemorySessionStore::new();
    let mut state = filled("a@b.com", "x");

    let effect = submit(&mut state, &api, &store).unwrap();

    let toast = effect.toast.unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, LOGIN_ERROR_TOAST);
    assert_eq!(effect.redirect, None);
    assert_eq!(state.phase, LoginPhase::Idle);
    assert_eq!(state.form.email, "a@b.com");
    assert_eq!(state.form.password, "x");
    assert!(state.begin_submit().is_some());
}

#[test]
fn server_error_status_is_a_failure_not_a_rejection() {
    let api = MockAuthApi::new().with_login(Err(AuthError::Status { status: 401 }));
    let store = MemorySessionStore::new();
    let mut state = filled("a@b.com", "x");

    let effect = submit(&mut state, &api, &store).unwrap();
    assert!(effect.toast.is_some());
    assert_eq!(state.phase, LoginPhase::Idle);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn session_save_failure_is_reported_as_failure() {
    let api = MockAuthApi::new().with_login(accepted("admin"));
    let store = crate::state::session::LocalStorageSessionStore;
    let outcome = block_on(send_login(&api, &store, &LoginRequest { email: "a@b.com".to_owned(), password: "x".to_owned() }));
    assert_eq!(outcome, LoginOutcome::Failed(AuthError::Unavailable));
}

// =============================================================
// Resume
// =============================================================

#[test]
fn resume_session_redirects_by_stored_role() {
    let store = MemorySessionStore::new();
    assert_eq!(resume_session(&store), None);

    store.set_item(TOKEN_KEY, "t1");
    store.set_item(USER_DATA_KEY, r#"{"role":"admin"}"#);
    assert_eq!(resume_session(&store), Some("/AdminDashboard"));

    store.set_item(USER_DATA_KEY, r#"{"role":"user"}"#);
    assert_eq!(resume_session(&store), Some("/UserDashboard"));
}

#[test]
fn resume_session_ignores_corrupt_storage() {
    let store = MemorySessionStore::new();
    store.set_item(TOKEN_KEY, "t1");
    store.set_item(USER_DATA_KEY, "null");
    assert_eq!(resume_session(&store), None);
    assert_eq!(store.get_item(TOKEN_KEY), None);
}
