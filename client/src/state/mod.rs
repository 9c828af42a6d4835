//! Client-side view state.
//!
//! DESIGN
//! ======
//! Plain structs with pure transitions. Pages wrap them in signals; the
//! models themselves stay testable without a reactive runtime.

pub mod player;
pub mod search;
