//! Catalog card linking to a game's player page.
//!
//! DESIGN
//! ======
//! The whole card is one anchor so the router intercepts the click after
//! hydration and the link still works as plain HTML before it.

use leptos::prelude::*;

use crate::catalog::GameEntry;

/// A clickable card representing one catalog entry.
#[component]
pub fn GameCard(game: &'static GameEntry) -> impl IntoView {
    view! {
        <article class="game-card">
            <a class="game-card__link" href=game.href()>
                <div class="game-card__thumb">
                    <img class="game-card__image" src=game.thumbnail alt=game.title loading="lazy"/>
                    <div class="game-card__overlay">
                        <span class="game-card__play">"PLAY NOW"</span>
                    </div>
                </div>
                <div class="game-card__body">
                    <h3 class="game-card__title">{game.title}</h3>
                    <p class="game-card__description">{game.description}</p>
                    <div class="game-card__tags">
                        {game
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="game-card__tag">{*tag}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </a>
        </article>
    }
}
