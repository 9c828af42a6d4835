use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub games: usize,
    pub uptime_secs: u64,
}

pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        games: arcade_client::catalog::all().len(),
        uptime_secs: state.uptime().as_secs(),
    })
}
