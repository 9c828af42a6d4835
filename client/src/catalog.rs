//! Static game catalog.
//!
//! DESIGN
//! ======
//! The catalog is a compile-time `'static` slice. Nothing mutates it, so
//! lookups hand out `&'static GameEntry` and views never clone entries.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::error::AppError;

/// Id the home page hero links to.
pub const FEATURED_GAME_ID: &str = "paper-io-2";

/// One embeddable third-party game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameEntry {
    /// Unique routing key used in `/game/{id}`.
    pub id: &'static str,
    pub title: &'static str,
    /// External page loaded into the player iframe. Opaque to this crate.
    pub url: &'static str,
    pub thumbnail: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

impl GameEntry {
    /// Route path of this entry's player page.
    pub fn href(&self) -> String {
        format!("/game/{}", self.id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

static GAMES: &[GameEntry] = &[
    GameEntry {
        id: "paper-io-2",
        title: "Paper.io 2",
        url: "https://unblocked-games.s3.amazonaws.com/paper-io-2.html",
        thumbnail: "https://picsum.photos/seed/paperio/400/300",
        description: "The addictive multiplayer territory game. Conquer the map and become the largest area owner!",
        tags: &["IO", "Multiplayer", "Strategy"],
    },
    GameEntry {
        id: "paper-io-classic",
        title: "Paper.io Classic",
        url: "https://unblocked-games.s3.amazonaws.com/paper-io.html",
        thumbnail: "https://picsum.photos/seed/paperioclassic/400/300",
        description: "The original version that started it all. Simple, clean, and extremely competitive.",
        tags: &["IO", "Classic"],
    },
    GameEntry {
        id: "slither-io",
        title: "Slither.io",
        url: "https://slither.io",
        thumbnail: "https://picsum.photos/seed/slither/400/300",
        description: "Grow your snake by eating glowing orbs while avoiding other players.",
        tags: &["IO", "Snake"],
    },
];

/// All games in declaration order.
pub fn all() -> &'static [GameEntry] {
    GAMES
}

/// Look up a game by exact id.
pub fn find(id: &str) -> Option<&'static GameEntry> {
    GAMES.iter().find(|game| game.id == id)
}

/// Like [`find`], but reports a miss as [`AppError::UnknownGame`].
///
/// # Errors
///
/// Returns `AppError::UnknownGame` when no entry has the given id.
pub fn resolve(id: &str) -> Result<&'static GameEntry, AppError> {
    find(id).ok_or_else(|| AppError::UnknownGame(id.to_owned()))
}

/// Case-insensitive substring search over title, description and tags.
///
/// A blank query returns every game.
pub fn search(query: &str) -> Vec<&'static GameEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return GAMES.iter().collect();
    }
    GAMES.iter().filter(|game| game.matches(&needle)).collect()
}
