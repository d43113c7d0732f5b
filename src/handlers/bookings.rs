use axum::{extract::State, response::Json, routing::post, Router};
use serde_json::json;

use crate::app::AppState;
use crate::constants::API_NAME;
use crate::error::{AppError, StorageContext};
use crate::extract::ValidatedJson;
use crate::models::NewBooking;

pub fn router() -> Router<AppState> {
    Router::new().route("/bookings", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(booking): ValidatedJson<NewBooking>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = state
        .bookings
        .create(&booking)
        .await
        .storage_context("Failed to create booking")?;

    tracing::info!(
        "{} Created booking {} for car {} ({})",
        API_NAME,
        id,
        booking.car_id,
        booking.car_name
    );

    Ok(Json(json!({
        "success": true,
        "id": id
    })))
}
