use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of items currently held in memory.
    pub items: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = state.service.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        items: service.store().len(),
    })
}
