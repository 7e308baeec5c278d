//! Inline validation message under a form field.

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// Renders the message for `field`, or nothing when it is valid.
#[component]
pub fn FieldMessage(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_owned))
            .map(|message| view! { <p class="field__error">{message}</p> })
    }
}
