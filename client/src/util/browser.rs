//! Browser navigation helpers.
//!
//! Requires a browser environment. SSR and native test builds no-op so the
//! calling components render identically everywhere.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Where the crash screen sends the user.
pub const RELOAD_TARGET: &str = "/";

/// Hard-navigate to [`RELOAD_TARGET`], discarding all in-page state.
///
/// Returns `true` when a navigation was issued.
pub fn reload_home() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.location().set_href(RELOAD_TARGET) {
            Ok(()) => true,
            Err(err) => {
                log::error!("reload failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
