use super::*;
use crate::catalog;

fn entry(url: &'static str) -> GameEntry {
    GameEntry { id: "test", title: "Test", url, thumbnail: "", description: "", tags: &[] }
}

#[test]
fn every_catalog_entry_is_embeddable() {
    for game in catalog::all() {
        assert_eq!(embed_src(game), Ok(game.url));
    }
}

#[test]
fn http_url_is_accepted() {
    assert_eq!(embed_src(&entry("http://example.com/game")), Ok("http://example.com/game"));
}

#[test]
fn javascript_scheme_is_rejected() {
    let err = embed_src(&entry("javascript:alert(1)")).unwrap_err();
    assert!(matches!(err, AppError::Render(_)));
}

#[test]
fn relative_url_is_rejected() {
    assert!(embed_src(&entry("/local/game.html")).is_err());
}

#[test]
fn missing_host_is_rejected() {
    let err = embed_src(&entry("https:///path")).unwrap_err();
    assert_eq!(err, AppError::Render("test: embed url has no host".to_owned()));
}
