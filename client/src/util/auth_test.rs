use super::*;
use leptos::reactive::owner::Owner;
use std::cell::RefCell;

fn signed_in() -> SessionState {
    let mut state = SessionState::default();
    state.set_token("tok-1".to_owned());
    state
}

#[test]
fn should_redirect_unauth_when_restored_without_token() {
    assert!(should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_while_restoring() {
    let state = SessionState::restoring();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_unauth_when_token_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn should_redirect_authed_only_with_token() {
    assert!(should_redirect_authed(&signed_in()));
    assert!(!should_redirect_authed(&SessionState::default()));
}

#[test]
fn finish_sign_in_stores_token_toasts_and_navigates_home() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        let toasts = RwSignal::new(ToastQueue::default());
        let visited = RefCell::new(Vec::new());
        let navigate = |path: &str, _: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        finish_sign_in(session, toasts, &navigate, "tok-1".to_owned(), "User login Successfully");

        assert_eq!(session.get_untracked().token(), Some("tok-1"));
        let queue = toasts.get_untracked();
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].level, ToastLevel::Success);
        assert_eq!(queue.visible()[0].message, "User login Successfully");
        assert_eq!(*visited.borrow(), vec![HOME_PATH.to_owned()]);
    });
}

#[test]
fn sign_out_clears_token() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(signed_in());
        let books = RwSignal::new(BooksState::default());
        sign_out(session, books);
        assert!(!session.get_untracked().is_authenticated());
    });
}

#[test]
fn sign_out_drops_cached_catalog() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(signed_in());
        let books = RwSignal::new(BooksState::default());
        books.update(|b| {
            b.begin_fetch();
            b.finish_fetch(Ok(vec![crate::net::types::Book { id: "b1".to_owned(), ..Default::default() }]));
        });
        assert!(!books.get_untracked().needs_fetch());

        sign_out(session, books);

        let cleared = books.get_untracked();
        assert!(cleared.items.is_empty());
        assert!(cleared.needs_fetch());
    });
}
