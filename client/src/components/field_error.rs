//! Inline per-field validation message.

use leptos::prelude::*;

use crate::util::validation::{Field, ValidationErrors};

/// Renders the message recorded for `field`, if any.
#[component]
pub fn FieldError(errors: Signal<ValidationErrors>, field: Field) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field));

    view! {
        <Show when=move || message().is_some()>
            <div class="form-error" data-field=field.key()>
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
