//! Home page: hero, catalog grid and about copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The grid is the full catalog unless the header
//! search submitted a `q` parameter, in which case it shows the matches.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::catalog;
use crate::components::ad_banner::AdBanner;
use crate::components::game_card::GameCard;
use crate::state::search::{QUERY_PARAM, SearchQuery};

fn grid_heading(search: &SearchQuery) -> String {
    if search.is_active() {
        format!("Results for \"{}\"", search.term())
    } else {
        "Featured Games".to_owned()
    }
}

fn featured_href() -> String {
    format!("/game/{}", catalog::FEATURED_GAME_ID)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let search = Memo::new(move |_| SearchQuery::from_param(query.read().get(QUERY_PARAM).as_deref()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let current = search.get();
        if current.is_active() {
            log::info!("searching for: {}", current.term());
        }
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1 class="home-page__hero-title">"Paper.io 2025 Edition"</h1>
                <p class="home-page__hero-text">
                    "The #1 unblocked territory conquest game optimized for school networks. No lag, no crashes, pure competition."
                </p>
                <a class="btn btn--primary home-page__hero-play" href=featured_href()>
                    "PLAY PAPER.IO NOW"
                </a>
            </section>

            <AdBanner/>

            <h2 class="home-page__grid-title">{move || grid_heading(&search.get())}</h2>
            <Show
                when=move || !search.get().results().is_empty()
                fallback=move || {
                    view! {
                        <div class="home-page__empty">
                            <p>{move || format!("No games match \"{}\".", search.get().term())}</p>
                            <a class="home-page__clear" href="/">"SHOW ALL GAMES"</a>
                        </div>
                    }
                }
            >
                <div class="home-page__grid">
                    {move || {
                        search
                            .get()
                            .results()
                            .into_iter()
                            .map(|game| view! { <GameCard game=game/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <section class="home-page__about">
                <h2 class="home-page__about-title">"About Paper.io Unblocked 2025"</h2>
                <p>
                    "Welcome to the definitive source for "
                    <strong>"Paper.io unblocked"</strong>
                    ". We know that schools often block gaming websites, which is why this site is kept as lightweight and stable as possible. Games load directly from their own hosts without unnecessary middleware."
                </p>
                <p>
                    <strong>"How to play:"</strong>
                    " Use your mouse or arrow keys to control your block. Move outside your territory to create a trail. Return to your color to claim the area. If someone hits your trail while you are outside, you lose! Similarly, hit other players' trails to eliminate them."
                </p>
            </section>
        </div>
    }
}
