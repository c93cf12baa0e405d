//! Banner rendering the latest user-visible notice.

use leptos::prelude::*;

use crate::util::notify::{NoticeLevel, Notifier};

/// Shows the most recent notice from the shared channel, if any.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    let text = move || notifier.latest().map(|notice| notice.text).unwrap_or_default();
    let class = move || match notifier.latest().map(|notice| notice.level) {
        Some(NoticeLevel::Warning) => "notice-banner notice-banner--warning",
        _ => "notice-banner notice-banner--error",
    };

    view! {
        <Show when=move || notifier.latest().is_some()>
            <div class=class role="alert">
                {text}
            </div>
        </Show>
    }
}
