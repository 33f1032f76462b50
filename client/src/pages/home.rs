//! Landing page linking to the login and signup forms.

use leptos::prelude::*;

use crate::util::routes::{LOGIN_PATH, SIGNUP_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Kaun Banega Crorepati"</h1>
                <p class="auth-card__subtitle">"Sign in to play, or create an account."</p>
                <a class="auth-button" href=LOGIN_PATH>"Login"</a>
                <a class="auth-button auth-button--secondary" href=SIGNUP_PATH>"Signup"</a>
            </div>
        </div>
    }
}
