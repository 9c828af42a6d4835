//! Client error taxonomy.
//!
//! `UnknownGame` is an expected outcome and renders the not-found state.
//! `Render` is anything else that stops a view from rendering; it surfaces
//! through the top-level `ErrorBoundary` as the crash screen.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// No catalog entry has this id.
    #[error("unknown game id: {0}")]
    UnknownGame(String),

    /// A view could not be rendered.
    #[error("render failed: {0}")]
    Render(String),
}
