use super::*;
use crate::net::types::UserType;

fn diver() -> User {
    User {
        id: "u-1".to_owned(),
        email: "ana@reef.example".to_owned(),
        display_name: "Ana".to_owned(),
        avatar_url: None,
        user_type: UserType::Consumer,
        is_approved: false,
    }
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_is_loading_without_user() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_holds_user_and_is_resolved() {
    let state = AuthState::signed_in(diver());
    assert!(!state.loading);
    assert_eq!(state.user, Some(diver()));
}

// =============================================================
// Lookup folding
// =============================================================

#[test]
fn resolved_with_user_is_signed_in() {
    assert_eq!(AuthState::resolved(Ok(Some(diver()))), AuthState::signed_in(diver()));
}

#[test]
fn resolved_anonymous_is_signed_out() {
    assert_eq!(AuthState::resolved(Ok(None)), AuthState::signed_out());
}

#[test]
fn resolved_failure_is_signed_out() {
    assert_eq!(AuthState::resolved(Err(ApiError::Status(500))), AuthState::signed_out());
    assert_eq!(
        AuthState::resolved(Err(ApiError::Transport("offline".to_owned()))),
        AuthState::signed_out()
    );
}

