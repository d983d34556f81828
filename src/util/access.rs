//! Route access decisions for guarded views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same redirect policy. The decision is a
//! pure function of the session and the view's requirement so it can be
//! recomputed on every session change; [`RedirectLatch`] turns the stream of
//! decisions into at most one navigation per distinct redirect.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::consts::{APPROVAL_PENDING_ROUTE, AUTH_ROUTE, DASHBOARD_ROUTE};
use crate::net::types::UserType;
use crate::state::auth::AuthState;

/// What a guarded view requires of the signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    pub required_user_type: Option<UserType>,
    pub require_approval: bool,
}

impl AccessRequirement {
    /// Any signed-in user.
    #[must_use]
    pub fn any_user() -> Self {
        Self::default()
    }

    /// Signed-in user of the given type.
    #[must_use]
    pub fn user_type(user_type: UserType) -> Self {
        Self { required_user_type: Some(user_type), require_approval: false }
    }

    /// Approved user of the given type.
    #[must_use]
    pub fn approved(user_type: UserType) -> Self {
        Self { required_user_type: Some(user_type), require_approval: true }
    }
}

/// Outcome of evaluating a session against a requirement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Show the guarded content.
    Render,
    /// Leave for the given path; nothing is shown meanwhile.
    Redirect(&'static str),
    /// Session still resolving; show the loading indicator.
    Pending,
}

impl Decision {
    /// Redirect target, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Redirect(target) => Some(*target),
            Self::Render | Self::Pending => None,
        }
    }
}

/// Decide whether a guarded view may render for this session.
#[must_use]
pub fn guard(session: &AuthState, requirement: &AccessRequirement) -> Decision {
    if session.loading {
        return Decision::Pending;
    }
    let Some(user) = session.user.as_ref() else {
        return Decision::Redirect(AUTH_ROUTE);
    };
    if let Some(required) = requirement.required_user_type
        && user.user_type != required
    {
        return Decision::Redirect(DASHBOARD_ROUTE);
    }
    if requirement.require_approval && !user.is_approved {
        return Decision::Redirect(APPROVAL_PENDING_ROUTE);
    }
    Decision::Render
}

/// Remembers the last decision so a redirect navigates only once.
///
/// Re-evaluating an unchanged redirect yields nothing. Leaving the redirect
/// (pending, render, or another target) re-arms the latch.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch {
    last: Option<Decision>,
}

impl RedirectLatch {
    /// Record `decision` and return the path to navigate to, if any.
    pub fn observe(&mut self, decision: &Decision) -> Option<&'static str> {
        if self.last.as_ref() == Some(decision) {
            return None;
        }
        self.last = Some(decision.clone());
        decision.redirect_target()
    }
}
