//! Toast host and the helper pages use to act on a finished submit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::effect::SubmitEffect;
use crate::state::toast::{Toast, ToastState};

/// Renders queued toasts in a fixed corner stack. Click to dismiss.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|(id, toast)| {
                        view! {
                            <div
                                class=toast.kind.css_class()
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Queue `toast` and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, toast: Toast) {
    let Some(id) = toasts.try_update(|s| s.push(toast)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
        toasts.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Show the effect's toast, then follow its redirect.
pub fn dispatch_effect<F>(effect: SubmitEffect, toasts: RwSignal<ToastState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(toast) = effect.toast {
        notify(toasts, toast);
    }
    if let Some(path) = effect.redirect {
        navigate(path, NavigateOptions::default());
    }
}
