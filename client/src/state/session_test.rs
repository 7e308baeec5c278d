use super::*;

#[test]
fn default_session_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.restoring);
    assert_eq!(state.token(), None);
}

#[test]
fn restoring_session_has_no_token() {
    let state = SessionState::restoring();
    assert!(state.restoring);
    assert!(!state.is_authenticated());
}

#[test]
fn set_token_authenticates() {
    let mut state = SessionState::default();
    state.set_token("tok-1".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("tok-1"));
}

#[test]
fn set_empty_token_signs_out() {
    let mut state = SessionState::default();
    state.set_token("tok-1".to_owned());
    state.set_token(String::new());
    assert!(!state.is_authenticated());
}

#[test]
fn clear_removes_token() {
    let mut state = SessionState::default();
    state.set_token("tok-1".to_owned());
    state.clear();
    assert_eq!(state.token(), None);
}

#[test]
fn restored_keeps_stored_token_and_finishes_restoring() {
    let mut stored = SessionState::default();
    stored.set_token("tok-9".to_owned());
    let state = SessionState::restored(Some(stored));
    assert!(!state.restoring);
    assert_eq!(state.token(), Some("tok-9"));

    let empty = SessionState::restored(None);
    assert!(!empty.restoring);
    assert!(!empty.is_authenticated());
}

#[test]
fn serialized_session_omits_restore_flag() {
    let mut state = SessionState::restoring();
    state.set_token("tok-1".to_owned());
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json, serde_json::json!({ "token": "tok-1" }));

    let back: SessionState = serde_json::from_value(json).unwrap();
    assert!(!back.restoring);
    assert_eq!(back.token(), Some("tok-1"));
}
