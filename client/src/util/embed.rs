//! Validation of third-party URLs before they reach an iframe.

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

use crate::catalog::GameEntry;
use crate::error::AppError;

/// Return the iframe `src` for `game`.
///
/// # Errors
///
/// Returns `AppError::Render` unless the url is an absolute `http(s)` URL
/// with a host.
pub fn embed_src(game: &GameEntry) -> Result<&'static str, AppError> {
    let url = game.url;
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| AppError::Render(format!("{}: unsupported embed url {url:?}", game.id)))?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(AppError::Render(format!("{}: embed url has no host", game.id)));
    }
    Ok(url)
}
