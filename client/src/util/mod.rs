//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and server-response concerns from page
//! and component logic so those stay renderable in every build.

pub mod browser;
pub mod embed;
pub mod response;
