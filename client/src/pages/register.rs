//! Registration page: create an account and sign straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use validator::Validate;

use crate::net::submission::{Outcome, SubmissionState, run, submit};
use crate::net::types::{ApiError, AuthResponse, RegistrationInput};
use crate::routes::LOGIN_PATH;
use crate::state::session::SessionState;
use crate::state::toast::{GENERIC_ERROR_MESSAGE, ToastLevel, ToastQueue, notify};
use crate::util::auth::handle_auth_outcome;

pub const REGISTER_REQUIRED_MESSAGE: &str = "All fields are required";
pub const REGISTER_SUCCESS_MESSAGE: &str = "User Created Successfully";

/// Check captured registration fields before any request is issued.
///
/// # Errors
///
/// Returns the warning to show when any field is empty.
pub fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationInput, &'static str> {
    let input = RegistrationInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    input.validate().map_err(|_| REGISTER_REQUIRED_MESSAGE)?;
    Ok(input)
}

/// Validate the captured fields and prepare one registration attempt.
///
/// Returns `None` without calling `request` while an attempt is pending or
/// when any field is empty; the latter pushes a warning toast.
pub fn start_registration<F, Fut>(
    (name, email, password): (String, String, String),
    submission: RwSignal<SubmissionState>,
    toasts: RwSignal<ToastQueue>,
    request: F,
) -> Option<impl Future<Output = Outcome<AuthResponse, ApiError>>>
where
    F: FnOnce(RegistrationInput) -> Fut,
    Fut: Future<Output = Result<AuthResponse, ApiError>>,
{
    if submission.with_untracked(SubmissionState::is_pending) {
        return None;
    }
    let input = match validate_registration_input(&name, &email, &password) {
        Ok(input) => input,
        Err(message) => {
            notify(toasts, ToastLevel::Warning, message);
            return None;
        }
    };
    Some(async move { run(&submission, move || request(input)).await })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submission = RwSignal::new(SubmissionState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = (name.get_untracked(), email.get_untracked(), password.get_untracked());
        let Some(attempt) = start_registration(fields, submission, toasts, crate::net::api::register) else {
            return;
        };
        let navigate = navigate.clone();
        submit(attempt, move |outcome| {
            handle_auth_outcome(outcome, session, toasts, &navigate, REGISTER_SUCCESS_MESSAGE);
        });
    };

    view! {
        <section class="auth-page">
            <div class="card auth-card">
                <div class="card__header">
                    <h1 class="card__title">"Sign Up"</h1>
                    <p class="card__description">
                        "Enter your information to create an account."
                        <Show when=move || submission.with(SubmissionState::is_error)>
                            <span class="form-banner form-banner--error">{GENERIC_ERROR_MESSAGE}</span>
                        </Show>
                    </p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="field__input"
                            id="name"
                            placeholder="Max"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            id="email"
                            type="email"
                            placeholder="m@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary btn--block"
                        type="submit"
                        disabled=move || submission.with(SubmissionState::is_pending)
                    >
                        <Show when=move || submission.with(SubmissionState::is_pending)>
                            <span class="spinner"></span>
                        </Show>
                        <span>"Create an account"</span>
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </section>
    }
}
