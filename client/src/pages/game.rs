//! Player page: one catalog entry embedded in an iframe.
//!
//! ARCHITECTURE
//! ============
//! The route `id` is resolved against the static catalog on every param
//! change. A miss renders the not-found state in place (and a 404 under
//! SSR); it is not routed through the error boundary.
//!
//! Fullscreen is local view state. `GamePlayer` is rebuilt whenever the
//! resolved entry changes, so each game starts framed.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::{self, GameEntry};
use crate::components::ad_banner::AdBanner;
use crate::state::player::PlayerState;
use crate::util::{embed, response};

const NOT_FOUND_HEADING: &str = "Game Not Found";

const CONTROLS: [(&str, &str); 4] = [
    ("Mouse:", "Drag to steer your block"),
    ("Arrow Keys:", "Change direction (Up, Down, Left, Right)"),
    ("WASD:", "Alternative movement keys"),
    ("P:", "Pause game"),
];

const PRO_TIPS: [&str; 4] = [
    "Don't be too greedy early on. Build a solid base first.",
    "Watch the corners! Other players love to surprise you from the edges.",
    "Killing someone yields more territory than just drawing circles.",
    "Always keep your tail short when an enemy is nearby.",
];

/// What the player route renders for a given `id` param.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlayerView {
    Playing(&'static GameEntry),
    NotFound(String),
}

impl PlayerView {
    pub(crate) fn from_route(id: Option<&str>) -> Self {
        let id = id.unwrap_or_default();
        catalog::resolve(id).map_or_else(|_| Self::NotFound(id.to_owned()), Self::Playing)
    }

    pub(crate) fn heading(&self) -> String {
        match self {
            Self::Playing(game) => format!("PLAYING: {}", game.title),
            Self::NotFound(_) => NOT_FOUND_HEADING.to_owned(),
        }
    }
}

#[component]
pub fn GamePage() -> impl IntoView {
    let params = use_params_map();
    let view_state = Memo::new(move |_| PlayerView::from_route(params.read().get("id").as_deref()));

    move || match view_state.get() {
        PlayerView::Playing(game) => view! { <GamePlayer game=game/> }.into_any(),
        PlayerView::NotFound(id) => view! { <GameNotFound id=id/> }.into_any(),
    }
}

#[component]
fn GameNotFound(id: String) -> impl IntoView {
    response::set_status(response::NOT_FOUND);
    #[cfg(feature = "hydrate")]
    log::warn!("unknown game id: {id}");
    let heading = PlayerView::NotFound(id.clone()).heading();

    view! {
        <div class="game-page game-page--missing" data-game-id=id>
            <h1 class="game-page__missing-title">{heading}</h1>
            <p class="game-page__missing-text">"The requested game ID does not exist in our system."</p>
            <a class="btn game-page__home" href="/">"BACK TO HOME"</a>
        </div>
    }
}

#[component]
fn GamePlayer(game: &'static GameEntry) -> impl IntoView {
    let player = RwSignal::new(PlayerState::default());
    let framed = move || player.get().shows_chrome();

    view! {
        <div class="game-page" class:game-page--fullscreen=move || !framed()>
            <div class="game-page__bar">
                <h1 class="game-page__title">{PlayerView::Playing(game).heading()}</h1>
                <div class="game-page__actions">
                    <button
                        class="btn game-page__fullscreen"
                        on:click=move |_| player.update(PlayerState::toggle_fullscreen)
                    >
                        {move || player.get().toggle_label()}
                    </button>
                    <Show when=framed>
                        <a class="btn game-page__back" href="/">"BACK"</a>
                    </Show>
                </div>
            </div>

            <div class="game-page__frame">
                {embed::embed_src(game)
                    .map(|src| {
                        view! {
                            <iframe
                                class="game-page__iframe"
                                src=src
                                title=game.title
                                allowfullscreen=true
                            ></iframe>
                        }
                    })}
            </div>

            <Show when=framed>
                <AdBanner/>
                <GameDetails game=game/>
            </Show>
        </div>
    }
}

#[component]
fn GameDetails(game: &'static GameEntry) -> impl IntoView {
    view! {
        <div class="game-page__details">
            <div class="game-page__about">
                <h2>"Description"</h2>
                <p class="game-page__description">{game.description}</p>

                <h2>"Game Controls"</h2>
                <ul class="game-page__controls">
                    {CONTROLS
                        .iter()
                        .map(|(key, action)| {
                            view! {
                                <li>
                                    <strong>{*key}</strong>
                                    " "
                                    {*action}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <aside class="game-page__tips">
                <h2>"Pro Tips"</h2>
                {PRO_TIPS
                    .iter()
                    .enumerate()
                    .map(|(i, tip)| view! { <p>{format!("{}. {tip}", i + 1)}</p> })
                    .collect::<Vec<_>>()}
            </aside>
        </div>
    }
}
