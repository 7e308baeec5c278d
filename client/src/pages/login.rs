//! Login page: email + password sign-in against the catalog API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use validator::Validate;

use crate::net::submission::{Outcome, SubmissionState, run, submit};
use crate::net::types::{ApiError, AuthResponse, Credentials};
use crate::routes::{REGISTER_PATH, ROOT_PATH};
use crate::state::session::SessionState;
use crate::state::toast::{GENERIC_ERROR_MESSAGE, ToastLevel, ToastQueue, notify};
use crate::util::auth::handle_auth_outcome;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Email and Password is required";
pub const LOGIN_SUCCESS_MESSAGE: &str = "User login Successfully";

/// Check captured login fields before any request is issued.
///
/// # Errors
///
/// Returns the warning to show when either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
    credentials.validate().map_err(|_| LOGIN_REQUIRED_MESSAGE)?;
    Ok(credentials)
}

/// Validate the captured fields and prepare one login attempt.
///
/// Returns `None` without calling `request` while an attempt is pending or
/// when a field is empty; the latter pushes a warning toast.
pub fn start_login<F, Fut>(
    email: String,
    password: String,
    submission: RwSignal<SubmissionState>,
    toasts: RwSignal<ToastQueue>,
    request: F,
) -> Option<impl Future<Output = Outcome<AuthResponse, ApiError>>>
where
    F: FnOnce(Credentials) -> Fut,
    Fut: Future<Output = Result<AuthResponse, ApiError>>,
{
    if submission.with_untracked(SubmissionState::is_pending) {
        return None;
    }
    let credentials = match validate_login_input(&email, &password) {
        Ok(credentials) => credentials,
        Err(message) => {
            notify(toasts, ToastLevel::Warning, message);
            return None;
        }
    };
    Some(async move { run(&submission, move || request(credentials)).await })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submission = RwSignal::new(SubmissionState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let attempt = start_login(
            email.get_untracked(),
            password.get_untracked(),
            submission,
            toasts,
            crate::net::api::login,
        );
        let Some(attempt) = attempt else {
            return;
        };
        let navigate = navigate.clone();
        submit(attempt, move |outcome| {
            handle_auth_outcome(outcome, session, toasts, &navigate, LOGIN_SUCCESS_MESSAGE);
        });
    };

    view! {
        <section class="auth-page">
            <div class="card auth-card">
                <div class="card__header">
                    <h1 class="card__title">"Login"</h1>
                    <p class="card__description">
                        "Enter your email below to login to your account."
                        <Show when=move || submission.with(SubmissionState::is_error)>
                            <span class="form-banner form-banner--error">{GENERIC_ERROR_MESSAGE}</span>
                        </Show>
                    </p>
                </div>
                <form class="auth-form" on:submit=on_submit>
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
                        <span class="field__label">
                            "Password"
                            <a href=ROOT_PATH class="field__aside">"Forgot your password?"</a>
                        </span>
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
                        <span>"Login"</span>
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=REGISTER_PATH>"Sign up"</a>
                </p>
            </div>
        </section>
    }
}
