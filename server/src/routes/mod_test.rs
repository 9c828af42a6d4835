use super::*;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_reports_ok_and_catalog_size() {
    let (status, body) = get_json(api_routes(AppState::new()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["games"], arcade_client::catalog::all().len());
    assert!(body["uptime_secs"].is_u64());
}

#[tokio::test]
async fn api_routes_do_not_claim_other_paths() {
    let (status, _) = get_json(api_routes(AppState::new()), "/api/games").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================
// Leptos SSR routes
// =============================================================

async fn get_html(uri: &str) -> (StatusCode, String) {
    let router = app(AppState::new()).unwrap();
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn game_route_renders_title_for_every_catalog_id() {
    for game in arcade_client::catalog::all() {
        let (status, html) = get_html(&game.href()).await;
        assert_eq!(status, StatusCode::OK, "{}", game.id);
        assert!(html.contains(&format!("PLAYING: {}", game.title)), "{} heading missing", game.id);
        assert!(html.contains(game.url), "{} iframe src missing", game.id);
    }
}

#[tokio::test]
async fn unknown_game_id_renders_not_found_with_404() {
    let (status, html) = get_html("/game/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Game Not Found"));
    assert!(!html.contains("PLAYING:"));
}

#[tokio::test]
async fn unknown_path_renders_catch_all_with_404() {
    let (status, html) = get_html("/no/such/path").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("LOST IN THE GRID"));
}

#[tokio::test]
async fn search_query_filters_grid_and_prefills_field() {
    let (status, html) = get_html("/?q=snake").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"value="snake""#));
    assert!(html.contains("Slither.io"));
    assert!(!html.contains("Paper.io Classic"));
}
