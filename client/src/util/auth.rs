//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both layout shells apply the same redirect rules, and both auth pages
//! finish a successful sign-in the same way: store the token, persist it,
//! announce it, and land on the dashboard home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::submission::Outcome;
use crate::net::types::{ApiError, AuthResponse};
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::books::BooksState;
use crate::state::session::{SESSION_STORAGE_KEY, SessionState};
use crate::state::toast::{ToastLevel, ToastQueue, notify, notify_failure};
use crate::util::storage;

/// Dashboard screens bounce to login once restore finished without a token.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.restoring && !state.is_authenticated()
}

/// Auth screens bounce to the dashboard once a token is present.
pub fn should_redirect_authed(state: &SessionState) -> bool {
    !state.restoring && state.is_authenticated()
}

/// Read the persisted session back once the app is running in the browser.
pub fn install_session_restore(session: RwSignal<SessionState>) {
    Effect::new(move || {
        if session.with_untracked(|s| s.restoring) {
            let stored = storage::load_json::<SessionState>(SESSION_STORAGE_KEY);
            session.set(SessionState::restored(stored));
        }
    });
}

/// Redirect to the login screen whenever the session has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard home whenever the session already has a token.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&session.get()) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}

/// Store `token` in the session and mirror it to browser storage.
pub fn store_token(session: RwSignal<SessionState>, token: String) {
    session.update(|s| s.set_token(token));
    session.with_untracked(|s| storage::save_json(SESSION_STORAGE_KEY, s));
}

/// Drop the token from memory and storage, along with the cached catalog
/// fetched under it.
pub fn sign_out(session: RwSignal<SessionState>, books: RwSignal<BooksState>) {
    session.update(SessionState::clear);
    storage::remove(SESSION_STORAGE_KEY);
    books.set(BooksState::default());
}

/// Common success path of login and registration.
pub fn finish_sign_in<F>(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastQueue>,
    navigate: &F,
    token: String,
    message: &'static str,
) where
    F: Fn(&str, NavigateOptions),
{
    notify(toasts, ToastLevel::Success, message);
    store_token(session, token);
    navigate(HOME_PATH, NavigateOptions::default());
}

/// Route a settled login/registration attempt to its side effects.
pub fn handle_auth_outcome<F>(
    outcome: Outcome<AuthResponse, ApiError>,
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastQueue>,
    navigate: &F,
    success_message: &'static str,
) where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        Outcome::Succeeded(resp) => finish_sign_in(session, toasts, navigate, resp.access_token, success_message),
        Outcome::Failed(error) => notify_failure(toasts, &error),
        Outcome::Skipped | Outcome::Abandoned => {}
    }
}
