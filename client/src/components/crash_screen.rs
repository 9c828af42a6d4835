//! Fallback view for the top-level error boundary.

use leptos::prelude::*;

use crate::util::{browser, response};

/// Full-page crash message listing the captured errors.
#[component]
pub fn CrashScreen(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    response::set_status(response::INTERNAL_SERVER_ERROR);
    #[cfg(feature = "hydrate")]
    log::error!("critical uncaught error: {}", messages.get_untracked().join("; "));

    view! {
        <div class="crash-screen" role="alert">
            <h1 class="crash-screen__title">"SYSTEM CRASH"</h1>
            <p class="crash-screen__message">"An unexpected error has occurred."</p>
            <pre class="crash-screen__detail">{move || messages.get().join("\n")}</pre>
            <button
                class="btn btn--danger crash-screen__reload"
                on:click=move |_| {
                    browser::reload_home();
                }
            >
                "RELOAD SYSTEM"
            </button>
        </div>
    }
}
