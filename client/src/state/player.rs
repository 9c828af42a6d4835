//! Player page view state (fullscreen toggle).

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

/// Layout of the player page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerLayout {
    /// Centered frame with description, controls and tips below it.
    #[default]
    Framed,
    /// Frame covers the viewport; surrounding chrome is hidden.
    Fullscreen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub fullscreen: bool,
}

impl PlayerState {
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn layout(self) -> PlayerLayout {
        if self.fullscreen { PlayerLayout::Fullscreen } else { PlayerLayout::Framed }
    }

    /// Label for the toggle button in the current state.
    pub fn toggle_label(self) -> &'static str {
        match self.layout() {
            PlayerLayout::Framed => "GO FULLSCREEN",
            PlayerLayout::Fullscreen => "EXIT FULLSCREEN",
        }
    }

    /// Whether the back link, ad slot and game details are rendered.
    pub fn shows_chrome(self) -> bool {
        self.layout() == PlayerLayout::Framed
    }
}
