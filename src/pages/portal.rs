//! Portals for instructors, resorts and administrators.
//!
//! Instructor and resort portals require an approved profile of the matching
//! type. The admin console only requires the admin type.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::UserType;
use crate::state::auth::AuthState;

#[component]
fn PortalBody(title: &'static str, blurb: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|s| s.user.as_ref().map(|u| u.label().to_owned()).unwrap_or_default());

    view! {
        <div class="portal-page">
            <h1>{title}</h1>
            <p class="portal-page__user">{name}</p>
            <p class="portal-page__blurb">{blurb}</p>
            <a class="portal-page__back" href=crate::consts::DASHBOARD_ROUTE>
                "Back to dashboard"
            </a>
        </div>
    }
}

#[component]
pub fn InstructorPortal() -> impl IntoView {
    view! {
        <ProtectedRoute required_user_type=UserType::Instructor require_approval=true>
            <PortalBody
                title="Instructor portal"
                blurb="Update your certifications, languages and availability."
            />
        </ProtectedRoute>
    }
}

#[component]
pub fn ResortPortal() -> impl IntoView {
    view! {
        <ProtectedRoute required_user_type=UserType::Resort require_approval=true>
            <PortalBody title="Resort portal" blurb="Manage dive sites, packages and photo galleries."/>
        </ProtectedRoute>
    }
}

#[component]
pub fn AdminConsole() -> impl IntoView {
    view! {
        <ProtectedRoute required_user_type=UserType::Admin>
            <PortalBody title="Admin console" blurb="Review pending instructor and resort profiles."/>
        </ProtectedRoute>
    }
}
