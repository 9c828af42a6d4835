//! Catch-all route for paths outside the route table.

use leptos::prelude::*;

use crate::util::response;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    response::set_status(response::NOT_FOUND);

    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__title">"404 - LOST IN THE GRID"</h1>
            <a class="not-found-page__home" href="/">"RETURN HOME"</a>
        </div>
    }
}
