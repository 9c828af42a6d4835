//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, query, local view
//! state) and delegates rendering details to `components`.

pub mod game;
pub mod home;
pub mod not_found;
