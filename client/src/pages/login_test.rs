use super::*;

use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use leptos::reactive::owner::Owner;
use leptos_router::NavigateOptions;

use crate::net::submission::{Outcome, SubmissionPhase, run};
use crate::net::types::{ApiError, AuthResponse};
use crate::routes::HOME_PATH;

#[test]
fn validate_login_input_accepts_filled_fields() {
    assert_eq!(
        validate_login_input("a@b.com", "secret1"),
        Ok(Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("", "secret1"), Err(LOGIN_REQUIRED_MESSAGE));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err(LOGIN_REQUIRED_MESSAGE));
    assert_eq!(validate_login_input("", ""), Err("Email and Password is required"));
}

#[test]
fn validate_login_input_has_no_password_length_floor() {
    assert!(validate_login_input("a@b.com", "x").is_ok());
}

#[test]
fn empty_password_warns_and_skips_request() {
    let owner = Owner::new();
    owner.with(|| {
        let submission = RwSignal::new(SubmissionState::default());
        let toasts = RwSignal::new(ToastQueue::default());
        let calls = Cell::new(0);

        let attempt = start_login("a@b.com".to_owned(), String::new(), submission, toasts, |_| {
            calls.set(calls.get() + 1);
            async { Err::<AuthResponse, _>(ApiError::Unavailable) }
        });

        assert!(attempt.is_none());
        assert_eq!(calls.get(), 0);
        assert_eq!(submission.get_untracked().phase(), SubmissionPhase::Idle);
        let queue = toasts.get_untracked();
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].level, ToastLevel::Warning);
        assert_eq!(queue.visible()[0].message, "Email and Password is required");
    });
}

#[test]
fn login_is_ignored_while_pending() {
    let owner = Owner::new();
    owner.with(|| {
        let submission = RwSignal::new(SubmissionState::default());
        submission.update(|s| {
            s.begin();
        });
        let toasts = RwSignal::new(ToastQueue::default());
        let calls = Cell::new(0);

        let attempt = start_login("a@b.com".to_owned(), "secret1".to_owned(), submission, toasts, |_| {
            calls.set(calls.get() + 1);
            async { Err::<AuthResponse, _>(ApiError::Unavailable) }
        });

        assert!(attempt.is_none());
        assert_eq!(calls.get(), 0);
        assert!(toasts.get_untracked().visible().is_empty());
        assert!(submission.get_untracked().is_pending());
    });
}

#[test]
fn start_login_sends_validated_credentials() {
    let owner = Owner::new();
    owner.with(|| {
        let submission = RwSignal::new(SubmissionState::default());
        let toasts = RwSignal::new(ToastQueue::default());
        let sent = RefCell::new(Vec::new());

        let attempt = start_login("a@b.com".to_owned(), "secret1".to_owned(), submission, toasts, |creds| {
            sent.borrow_mut().push(creds);
            async { Ok::<_, ApiError>(AuthResponse { access_token: "tok-1".to_owned() }) }
        })
        .unwrap();
        assert_eq!(submission.get_untracked().phase(), SubmissionPhase::Idle);

        let outcome = block_on(attempt);
        assert_eq!(outcome, Outcome::Succeeded(AuthResponse { access_token: "tok-1".to_owned() }));
        assert_eq!(submission.get_untracked().phase(), SubmissionPhase::Succeeded);
        assert_eq!(
            *sent.borrow(),
            vec![Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() }]
        );
    });
}

#[test]
fn successful_login_stores_token_and_lands_on_home() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        let toasts = RwSignal::new(ToastQueue::default());
        let submission = RwSignal::new(SubmissionState::default());
        let visited = RefCell::new(Vec::new());
        let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());
        let calls = Cell::new(0);

        let credentials = validate_login_input("a@b.com", "secret1").unwrap();
        let outcome = block_on(run(&submission, || {
            calls.set(calls.get() + 1);
            assert_eq!(submission.get_untracked().phase(), SubmissionPhase::Pending);
            async move {
                assert_eq!(credentials.email, "a@b.com");
                Ok::<_, ApiError>(AuthResponse { access_token: "tok-1".to_owned() })
            }
        }));
        handle_auth_outcome(outcome, session, toasts, &navigate, LOGIN_SUCCESS_MESSAGE);

        assert_eq!(calls.get(), 1);
        assert_eq!(submission.get_untracked().phase(), SubmissionPhase::Succeeded);
        assert_eq!(session.get_untracked().token(), Some("tok-1"));
        assert_eq!(*visited.borrow(), vec![HOME_PATH.to_owned()]);
        let queue = toasts.get_untracked();
        assert_eq!(queue.visible()[0].level, ToastLevel::Success);
        assert_eq!(queue.visible()[0].message, "User login Successfully");
    });
}

#[test]
fn failed_login_shows_error_and_keeps_session_empty() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        let toasts = RwSignal::new(ToastQueue::default());
        let submission = RwSignal::new(SubmissionState::default());
        let visited = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        let outcome = block_on(run(&submission, || async {
            Err::<AuthResponse, _>(ApiError::Status(401))
        }));
        assert_eq!(outcome, Outcome::Failed(ApiError::Status(401)));
        handle_auth_outcome(outcome, session, toasts, &navigate, LOGIN_SUCCESS_MESSAGE);

        assert!(submission.get_untracked().is_error());
        assert!(!session.get_untracked().is_authenticated());
        assert!(visited.borrow().is_empty());
        assert_eq!(toasts.get_untracked().visible()[0].message, GENERIC_ERROR_MESSAGE);
    });
}
