//! Sign-in page for email + password accounts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Trim and check the sign-in form fields.
pub(crate) fn validate_sign_in(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(user) => {
                        auth.set(AuthState::signed_in(user));
                        navigate(crate::consts::DASHBOARD_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign-in failed: {e}");
                        info.set(format!("Sign-in failed: {e}"));
                        password.set(String::new());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your dive profile"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
