use crate::AppState;
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON, including whether an API base URL is saved
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "status": "healthy",
      "api_base_url_configured": state.frontend.base_url().is_some(),
      "timestamp": Utc::now().timestamp()
    }))
}
