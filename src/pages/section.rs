//! Generic guarded screen for the warehouse sections.
//!
//! The real data views (staff, chemicals, inventory, ...) belong to the host
//! application; this page carries their route identity so admin gating and
//! titles behave exactly as in the full product.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::routing::guard::{GuardPolicy, NavigationGuard, install_route_guard};
use crate::routing::routes::RouteDescriptor;
use crate::state::session::SessionStore;
use crate::util::notify::Notifier;

#[component]
pub fn SectionPage(route: RouteDescriptor) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let policy = use_context::<GuardPolicy>().unwrap_or_default();
    let navigate = use_navigate();

    install_route_guard(
        NavigationGuard::new(session, notifier, policy),
        route.path,
        route.meta,
        navigate,
    );

    view! {
        <Title text=route.meta.title/>
        <section class="section-page">
            <h1>{route.meta.title}</h1>
            <a class="section-page__back" href="/console">
                "Back to console"
            </a>
        </section>
    }
}
