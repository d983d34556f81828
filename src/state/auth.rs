//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider installed by [`provide_auth`] is the only writer of the
//! session. Route guards and user-aware components read it from context and
//! never mutate it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Session at application start, before the lookup has answered.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Resolved session for a signed-in user.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Resolved session with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Fold a session lookup into a resolved state.
    ///
    /// Lookup failures resolve to the signed-out session so they take the
    /// same redirect path as an anonymous visitor.
    #[must_use]
    pub fn resolved(lookup: Result<Option<User>, ApiError>) -> Self {
        match lookup {
            Ok(Some(user)) => Self::signed_in(user),
            Ok(None) | Err(_) => Self::signed_out(),
        }
    }
}

/// Install the session signal in context and start resolving it.
///
/// The returned signal starts as [`AuthState::resolving`]. In the browser the
/// current user is fetched once; on the server the session stays unresolved so
/// guarded views render their pending state.
pub fn provide_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::resolving());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let lookup = crate::net::api::fetch_current_user().await;
        if let Err(e) = &lookup {
            leptos::logging::warn!("session lookup failed: {e}");
        }
        auth.set(AuthState::resolved(lookup));
    });

    auth
}

/// End the session on the server and clear the local user.
///
/// The local session is cleared even when the logout call fails; the server
/// cookie then expires on its own.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::sign_out().await {
            leptos::logging::warn!("sign-out failed: {e}");
        }
        auth.set(AuthState::signed_out());
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::signed_out());
}
