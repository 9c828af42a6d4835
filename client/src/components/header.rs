//! Sticky site header: brand, search form and nav.
//!
//! The search form is a plain `GET /?q=...` submit. It needs no client code
//! to work; the home page reads the same parameter to filter its grid.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::search::{QUERY_PARAM, SearchQuery};

const CONTACT_URL: &str = "https://github.com";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let query = use_query_map();
    let current = move || SearchQuery::from_param(query.read().get(QUERY_PARAM).as_deref());

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    "PAPER.IO "
                    <span class="site-header__brand-accent">"UNBLOCKED"</span>
                </a>

                <form class="site-header__search" method="get" action="/" role="search">
                    <input
                        class="site-header__search-input"
                        type="text"
                        name=QUERY_PARAM
                        placeholder="Search games..."
                        value=move || current().term().to_owned()
                        prop:value=move || current().term().to_owned()
                    />
                    <button class="btn site-header__search-submit" type="submit">
                        "SEARCH"
                    </button>
                </form>

                <nav class="site-header__nav">
                    <a class="site-header__nav-link" href="/">"HOME"</a>
                    <a class="site-header__nav-link" href=CONTACT_URL target="_blank" rel="noopener noreferrer">
                        "CONTACT"
                    </a>
                </nav>
            </div>
        </header>
    }
}
