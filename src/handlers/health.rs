use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;

use crate::app::AppState;
use crate::error::{AppError, StorageContext};

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Healthy only while the database answers.
async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state
        .schema
        .ping()
        .await
        .storage_context("Database unavailable")?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "reachable"
    })))
}
