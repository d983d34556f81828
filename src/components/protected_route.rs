//! Route gate for views that need a signed-in (and possibly approved) user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session from context, recomputes the access decision on every
//! session change, and navigates at most once per distinct redirect. Guarded
//! children are only mounted while the decision is `Render`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserType;
use crate::state::auth::AuthState;
use crate::util::access::{AccessRequirement, Decision, RedirectLatch, guard};

/// Render `children` only when the session satisfies the requirement.
///
/// Shows a loading indicator while the session resolves and nothing while a
/// redirect is in flight.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] required_user_type: Option<UserType>,
    #[prop(optional)] require_approval: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let requirement = AccessRequirement { required_user_type, require_approval };
    let decision = Memo::new(move |_| auth.with(|session| guard(session, &requirement)));

    let navigate = use_navigate();
    let mut latch = RedirectLatch::default();
    Effect::new(move || {
        let current = decision.get();
        if let Some(target) = latch.observe(&current) {
            leptos::logging::log!("access guard: redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Decision::Render
            fallback=move || {
                (decision.get() == Decision::Pending)
                    .then(|| {
                        view! {
                            <div class="guard-loading" role="status" aria-live="polite">
                                <span class="guard-loading__spinner" aria-hidden="true"></span>
                                <span class="guard-loading__label">"Checking your session..."</span>
                            </div>
                        }
                    })
            }
        >
            {children()}
        </Show>
    }
}
