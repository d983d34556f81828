//! Signed-in landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any signed-in user may open the dashboard. Guarded portals send users here
//! when their account type does not match, and append
//! `?message=approval-pending` when the profile still awaits approval.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::protected_route::ProtectedRoute;
use crate::consts::APPROVAL_PENDING_MESSAGE;
use crate::net::types::UserType;
use crate::state::auth::{AuthState, sign_out};

/// User-facing notice for the dashboard `message` query parameter.
pub(crate) fn dashboard_notice(message: Option<&str>) -> Option<&'static str> {
    match message? {
        APPROVAL_PENDING_MESSAGE => {
            Some("Your profile is awaiting approval. We'll email you as soon as it's live.")
        }
        _ => None,
    }
}

/// Portal route for a user type, if it has one.
pub(crate) fn portal_route(user_type: UserType) -> Option<&'static str> {
    match user_type {
        UserType::Consumer => None,
        UserType::Instructor => Some("/instructor"),
        UserType::Resort => Some("/resort"),
        UserType::Admin => Some("/admin"),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardContent/>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let notice = move || query.with(|q| dashboard_notice(q.get("message").as_deref()));

    let label = move || auth.with(|s| s.user.as_ref().map(|u| u.label().to_owned()).unwrap_or_default());
    let user_type = move || auth.with(|s| s.user.as_ref().map(|u| u.user_type));
    let portal = move || user_type().and_then(portal_route);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{move || format!("Hello, {}", label())}</h1>
                <button class="dashboard-header__signout" on:click=move |_| sign_out(auth)>
                    "Sign out"
                </button>
            </header>
            {move || notice().map(|text| view! { <p class="dashboard-notice" role="status">{text}</p> })}
            <section class="dashboard-summary">
                <p>
                    "Account type: "
                    <strong>{move || user_type().map(|t| t.to_string()).unwrap_or_default()}</strong>
                </p>
                {move || {
                    portal()
                        .map(|href| {
                            view! {
                                <a class="dashboard-summary__portal" href=href>
                                    "Open your portal"
                                </a>
                            }
                        })
                }}
            </section>
        </div>
    }
}
