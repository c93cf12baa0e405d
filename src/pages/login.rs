//! Login page storing the session pair on success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::net::api::ApiClient;
use crate::state::session::SessionStore;

#[cfg(feature = "hydrate")]
use crate::routing::routes::HOME_PATH;

/// Trim and require both fields before a sign-in attempt.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter email and password first.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::auth::LoginRequest {
                    email: email_value,
                    password: password_value,
                    user_type: None,
                };
                match crate::net::auth::login(&api, &request).await {
                    Ok(response) => {
                        session.set(&crate::state::session::Session {
                            token: Some(response.token),
                            user: Some(response.user),
                        });
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, &navigate, email_value, password_value);
            info.set("Sign-in is only available in the browser.".to_owned());
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ChemStore"</h1>
                <p class="login-card__subtitle">"Hazardous Chemical Warehouse"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href="/register">
                    "No account yet? Register"
                </a>
            </div>
        </div>
    }
}
