//! Top navigation bar shared by every route.

use leptos::prelude::*;

use crate::util::routes::{HOME_PATH, LOGIN_PATH, SIGNUP_PATH};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"KBC"</span>
            <div class="nav-bar__links">
                <a class="nav-bar__link" href=HOME_PATH>"Home"</a>
                <a class="nav-bar__link" href=LOGIN_PATH>"Login"</a>
                <a class="nav-bar__link" href=SIGNUP_PATH>"Signup"</a>
            </div>
        </nav>
    }
}
