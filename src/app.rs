//! Root application component with routing, context providers, and the
//! recovery wiring between the response interceptor and the router.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, StaticSegment};

use crate::components::notice_banner::NoticeBanner;
use crate::net::api::{ApiClient, NetConfig};
use crate::pages::console::ConsolePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::section::SectionPage;
use crate::routing::guard::GuardPolicy;
use crate::routing::routes;
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;
use crate::util::notify::Notifier;

#[cfg(feature = "hydrate")]
fn session_store() -> SessionStore {
    SessionStore::browser()
}

#[cfg(not(feature = "hydrate"))]
fn session_store() -> SessionStore {
    SessionStore::in_memory()
}

/// Root application component.
///
/// Builds the one-time endpoint configuration, the session store, and the
/// notifier/navigator capabilities, provides them via context, and sets up
/// client-side routing over the static route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = session_store();
    let notifier = Notifier::new();
    let navigator = Navigator::new();
    let api = ApiClient::new(NetConfig::default(), session.clone(), navigator, notifier);

    provide_context(session);
    provide_context(notifier);
    provide_context(navigator);
    provide_context(api);
    provide_context(GuardPolicy::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/chemstore-client.css"/>
        <Title text="ChemStore"/>

        <Router>
            <NavigationDrain/>
            <NoticeBanner/>
            <main class="app-shell">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RootRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("console") view=ConsolePage/>
                    <Route
                        path=StaticSegment("man")
                        view=|| view! { <SectionPage route=routes::MAN/> }
                    />
                    <Route
                        path=StaticSegment("chemical")
                        view=|| view! { <SectionPage route=routes::CHEMICAL/> }
                    />
                    <Route
                        path=StaticSegment("inventory")
                        view=|| view! { <SectionPage route=routes::INVENTORY/> }
                    />
                    <Route
                        path=StaticSegment("storage")
                        view=|| view! { <SectionPage route=routes::STORAGE/> }
                    />
                    <Route
                        path=StaticSegment("outbound")
                        view=|| view! { <SectionPage route=routes::OUTBOUND/> }
                    />
                    <Route
                        path=StaticSegment("warning")
                        view=|| view! { <SectionPage route=routes::WARNING/> }
                    />
                    <Route
                        path=StaticSegment("UseRecord")
                        view=|| view! { <SectionPage route=routes::USE_RECORD/> }
                    />
                    <Route
                        path=StaticSegment("permission")
                        view=|| view! { <SectionPage route=routes::PERMISSION/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// `/` mirrors the original router's unconditional redirect to the login
/// screen.
#[component]
fn RootRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(routes::LOGIN_PATH, NavigateOptions::default());
    });
}

/// Drains pending navigation requests recorded by the response interceptor
/// into the router.
#[component]
fn NavigationDrain() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let navigate = use_navigate();

    Effect::new(move || {
        if navigator.pending().get().is_some() {
            if let Some(path) = navigator.take() {
                navigate(&path, NavigateOptions::default());
            }
        }
    });
}
