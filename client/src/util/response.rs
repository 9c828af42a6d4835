//! Server response hooks for SSR renders.
//!
//! Outside the `ssr` build there is no response to decorate, so these
//! are no-ops.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

pub const NOT_FOUND: u16 = 404;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Set the status code of the in-flight SSR response.
///
/// Returns `true` when a response was available to update.
pub fn set_status(code: u16) -> bool {
    #[cfg(feature = "ssr")]
    {
        let Ok(status) = http::StatusCode::from_u16(code) else {
            return false;
        };
        let Some(response) = leptos::prelude::use_context::<leptos_axum::ResponseOptions>() else {
            return false;
        };
        response.set_status(status);
        true
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = code;
        false
    }
}
