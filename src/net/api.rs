//! REST helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call reports [`ApiError::Unavailable`] since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The auth provider folds any
//! failure into the signed-out session so hydration never crashes on a bad
//! response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

/// Failure modes of the session endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with an unexpected status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The credentials were rejected.
    #[error("invalid email or password")]
    Rejected,
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

/// How a `/api/auth/me` status should be interpreted.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionStatus {
    /// Body holds the signed-in user.
    SignedIn,
    /// No session cookie, or it expired.
    Anonymous,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_session_status(status: u16) -> Result<SessionStatus, ApiError> {
    match status {
        200..=299 => Ok(SessionStatus::SignedIn),
        401 | 403 => Ok(SessionStatus::Anonymous),
        other => Err(ApiError::Status(other)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_sign_in_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        400 | 401 | 403 => Err(ApiError::Rejected),
        other => Err(ApiError::Status(other)),
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// Returns `Ok(None)` when the visitor has no session.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers with an
/// unexpected status, or the body is not a [`User`].
pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(crate::consts::SESSION_ME_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        match classify_session_status(resp.status())? {
            SessionStatus::Anonymous => Ok(None),
            SessionStatus::SignedIn => resp.json::<User>().await.map(Some).map_err(decode),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for bad credentials, or another
/// [`ApiError`] if the request or body decoding fails.
pub async fn sign_in(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(crate::consts::SESSION_LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        classify_sign_in_status(resp.status())?;
        resp.json::<User>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is not acknowledged.
pub async fn sign_out() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(crate::consts::SESSION_LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
