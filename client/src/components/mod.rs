//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog presentation. They take their
//! data as props or read the current route; none of them own shared state.

pub mod ad_banner;
pub mod crash_screen;
pub mod footer;
pub mod game_card;
pub mod header;
