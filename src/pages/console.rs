//! Console page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the warehouse sections and revalidates the stored credential once
//! on entry; a stale credential flows through the response interceptor's
//! 401 recovery rather than any page-level handling.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::routing::guard::{GuardPolicy, NavigationGuard, install_route_guard};
use crate::routing::routes::{self, CONSOLE};
use crate::state::session::SessionStore;
use crate::util::notify::Notifier;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let policy = use_context::<GuardPolicy>().unwrap_or_default();
    let navigate = use_navigate();

    install_route_guard(
        NavigationGuard::new(session.clone(), notifier, policy),
        CONSOLE.path,
        CONSOLE.meta,
        navigate,
    );

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.token() {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::net::auth::check_token(&api, &token).await;
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;

    let greeting = move || {
        session
            .get()
            .ok()
            .and_then(|current| current.user)
            .map_or("Welcome.".to_owned(), |user| {
                format!("Welcome, {}.", user.name)
            })
    };

    view! {
        <Title text=CONSOLE.meta.title/>
        <div class="console-page">
            <h1>{CONSOLE.meta.title}</h1>
            <p class="console-page__greeting">{greeting}</p>
            <nav class="console-page__sections">
                <ul>
                    {routes::section_routes()
                        .map(|route| {
                            view! {
                                <li>
                                    <a href=route.path>{route.meta.title}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </div>
    }
}
