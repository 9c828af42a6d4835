//! Shared application state.
//!
//! DESIGN
//! ======
//! The catalog is compiled into the client crate, so the server holds no
//! domain data. `AppState` only carries process metadata for the health probe.

use std::time::{Duration, Instant};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { started_at: Instant::now() }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
