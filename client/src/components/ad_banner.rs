//! Static advertisement placeholder.

use leptos::prelude::*;

#[component]
pub fn AdBanner() -> impl IntoView {
    view! {
        <div class="ad-banner" aria-hidden="true">
            <span class="ad-banner__label">"Advertisement Space"</span>
            <span class="ad-banner__note">"Content Filtered for School Safety"</span>
        </div>
    }
}
