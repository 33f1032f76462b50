//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast::ToastHost;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::session::{LocalStorageSessionStore, SharedSessionStore};
use crate::state::toast::ToastState;
use crate::util::routes::{HOME_PATH, LOGIN_PATH, SIGNUP_PATH, segment};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and toast queue, mounts the navigation bar,
/// and maps `/Home`, `/Login`, and `/Signup` to their pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SharedSessionStore = Arc::new(LocalStorageSessionStore);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/kbc-portal.css"/>
        <Title text="KBC"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment(segment(HOME_PATH)) view=HomePage/>
                    <Route path=StaticSegment(segment(LOGIN_PATH)) view=LoginPage/>
                    <Route path=StaticSegment(segment(SIGNUP_PATH)) view=SignupPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
