//! Signup page: account registration with an optional admin token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::components::toast::dispatch_effect;
use crate::net::types::Role;
use crate::pages::login::{password_input_type, visibility_label};
use crate::state::effect::SubmitEffect;
use crate::state::signup::SignupState;
use crate::state::toast::ToastState;
use crate::util::routes::LOGIN_PATH;
use crate::util::validation::{Field, sanitize_mobile_input};

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let signup = RwSignal::new(SignupState::default());
    let pending = RwSignal::new(None::<SubmitEffect>);

    Effect::new(move || {
        let Some(effect) = pending.get() else {
            return;
        };
        pending.set(None);
        dispatch_effect(effect, toasts, &navigate);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = signup.try_update(SignupState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::from_config();
            let result = crate::state::signup::send_signup(&api, &request).await;
            if let Some(effect) = signup.try_update(|s| s.finish(result)) {
                pending.set(Some(effect));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let errors = Signal::derive(move || signup.with(|s| s.errors.clone()));
    let show_password = move || signup.with(|s| s.form.show_password);
    let selected_role = move || signup.with(|s| s.form.role.map_or_else(String::new, |r| r.as_str().to_owned()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Signup"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="text"
                            name="name"
                            placeholder="Full Name"
                            autocomplete="off"
                            prop:value=move || signup.with(|s| s.form.name.clone())
                            on:input=move |ev| signup.update(|s| s.form.name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Name/>
                    </div>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="email"
                            name="email"
                            placeholder="Email"
                            prop:value=move || signup.with(|s| s.form.email.clone())
                            on:input=move |ev| signup.update(|s| s.form.email = event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Email/>
                    </div>
                    <div class="auth-field auth-field--password">
                        <input
                            class="auth-input"
                            type=move || password_input_type(show_password())
                            name="password"
                            placeholder="Password"
                            prop:value=move || signup.with(|s| s.form.password.clone())
                            on:input=move |ev| signup.update(|s| s.form.password = event_target_value(&ev))
                        />
                        <span
                            class="auth-toggle"
                            on:click=move |_| signup.update(|s| s.form.show_password = !s.form.show_password)
                        >
                            {move || visibility_label(show_password())}
                        </span>
                        <FieldError errors=errors field=Field::Password/>
                    </div>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="tel"
                            name="mobile_number"
                            placeholder="Mobile Number"
                            prop:value=move || signup.with(|s| s.form.mobile_number.clone())
                            on:input=move |ev| {
                                let digits = sanitize_mobile_input(&event_target_value(&ev));
                                signup.update(|s| s.form.mobile_number = digits);
                            }
                        />
                        <FieldError errors=errors field=Field::MobileNumber/>
                    </div>
                    <div class="auth-field">
                        <label class="auth-label" for="role">"Role"</label>
                        <select
                            class="auth-input"
                            id="role"
                            name="role"
                            prop:value=selected_role
                            on:change=move |ev| {
                                let role = event_target_value(&ev).parse::<Role>().ok();
                                signup.update(|s| s.form.role = role);
                            }
                        >
                            <option value="user">"User"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                        <FieldError errors=errors field=Field::Role/>
                    </div>
                    <Show when=move || signup.with(|s| s.form.is_admin())>
                        <div class="auth-field">
                            <input
                                class="auth-input"
                                type=move || password_input_type(show_password())
                                name="adminToken"
                                placeholder="Admin Token"
                                autocomplete="off"
                                prop:value=move || signup.with(|s| s.form.admin_token.clone())
                                on:input=move |ev| signup.update(|s| s.form.admin_token = event_target_value(&ev))
                            />
                            <FieldError errors=errors field=Field::AdminToken/>
                        </div>
                    </Show>
                    <div class="auth-field auth-field--checkbox">
                        <input
                            type="checkbox"
                            id="terms"
                            name="terms"
                            prop:checked=move || signup.with(|s| s.form.terms)
                            on:change=move |ev| signup.update(|s| s.form.terms = event_target_checked(&ev))
                        />
                        <label for="terms">"I agree to the terms and conditions"</label>
                        <FieldError errors=errors field=Field::Terms/>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || signup.with(|s| s.submitting)>
                        "Signup"
                    </button>
                    <p class="auth-card__footer">
                        "Already have an account? "
                        <a class="auth-link" href=LOGIN_PATH>"Login"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
