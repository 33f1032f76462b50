//! Login page: email + password against the remote auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors who already hold a stored session are sent straight to their
//! dashboard on mount. Otherwise the form runs the flow in `state::login`
//! and, once the request settles, hands the resulting redirect/toast to an
//! effect that performs it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::components::toast::dispatch_effect;
use crate::state::effect::SubmitEffect;
use crate::state::login::{LoginState, resume_session};
use crate::state::session::SharedSessionStore;
use crate::state::toast::ToastState;
use crate::util::routes::SIGNUP_PATH;
use crate::util::validation::Field;

/// `type` attribute for a password input with a show/hide toggle.
pub(crate) fn password_input_type(show: bool) -> &'static str {
    if show { "text" } else { "password" }
}

/// Label for the show/hide toggle.
pub(crate) fn visibility_label(show: bool) -> &'static str {
    if show { "Hide" } else { "Show" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = StoredValue::new(expect_context::<SharedSessionStore>());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let login = RwSignal::new(LoginState::default());
    let pending = RwSignal::new(None::<SubmitEffect>);

    // Trust-on-read: a stored token skips the form without asking the server.
    let navigate_resume = navigate.clone();
    Effect::new(move || {
        if let Some(path) = resume_session(session.get_value().as_ref()) {
            navigate_resume(path, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let Some(effect) = pending.get() else {
            return;
        };
        pending.set(None);
        dispatch_effect(effect, toasts, &navigate);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = login.try_update(LoginState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let store = session.get_value();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpAuthApi::from_config();
                let outcome = crate::state::login::send_login(&api, store.as_ref(), &request).await;
                if let Some(effect) = login.try_update(|s| s.finish(outcome)) {
                    pending.set(Some(effect));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let errors = Signal::derive(move || login.with(|s| s.errors.clone()));
    let show_password = move || login.with(|s| s.form.show_password);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show
                    when=move || !login.with(LoginState::is_submitting)
                    fallback=|| view! { <div class="auth-loading">"Loading..."</div> }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <div class="auth-field">
                            <input
                                class="auth-input"
                                type="email"
                                name="email"
                                placeholder="Email"
                                prop:value=move || login.with(|s| s.form.email.clone())
                                on:input=move |ev| login.update(|s| s.form.email = event_target_value(&ev))
                            />
                            <FieldError errors=errors field=Field::Email/>
                        </div>
                        <div class="auth-field auth-field--password">
                            <input
                                class="auth-input"
                                type=move || password_input_type(show_password())
                                name="password"
                                placeholder="Password"
                                prop:value=move || login.with(|s| s.form.password.clone())
                                on:input=move |ev| login.update(|s| s.form.password = event_target_value(&ev))
                            />
                            <span
                                class="auth-toggle"
                                on:click=move |_| login.update(|s| s.form.show_password = !s.form.show_password)
                            >
                                {move || visibility_label(show_password())}
                            </span>
                            <FieldError errors=errors field=Field::Password/>
                        </div>
                        <Show when=move || login.with(|s| s.message.is_some())>
                            <p class="auth-message">{move || login.with(|s| s.message.clone().unwrap_or_default())}</p>
                        </Show>
                        <button class="auth-button" type="submit">"Login"</button>
                        <p class="auth-card__footer">
                            "Create an account "
                            <a class="auth-link" href=SIGNUP_PATH>"Signup"</a>
                        </p>
                    </form>
                </Show>
            </div>
        </div>
    }
}
