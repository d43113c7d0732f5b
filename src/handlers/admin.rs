use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::json;

use crate::app::AppState;
use crate::auth::require_admin;
use crate::constants::API_NAME;
use crate::error::{AppError, StorageContext};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::models::{Booking, CarUpdate, NewCar};

/// Routes behind the admin guard, nested under `/admin`.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings))
        .route("/cars", post(create_car))
        .route("/cars/:id", put(update_car).delete(delete_car))
        .route("/reset", post(reset_schema))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .bookings
        .list_recent()
        .await
        .storage_context("Failed to fetch bookings")?;
    Ok(Json(bookings))
}

async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(car): ValidatedJson<NewCar>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = state
        .cars
        .create(&car)
        .await
        .storage_context("Failed to create car")?;

    tracing::info!("{} Created car {} ({})", API_NAME, id, car.name);

    Ok(Json(json!({
        "success": true,
        "id": id
    })))
}

async fn update_car(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(car): ValidatedJson<CarUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    let rows = state
        .cars
        .update(id, &car)
        .await
        .storage_context("Failed to update car")?;

    tracing::info!("{} Updated car {} ({} rows affected)", API_NAME, id, rows);

    Ok(Json(json!({ "success": true })))
}

async fn delete_car(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let rows = state
        .cars
        .delete(id)
        .await
        .storage_context("Failed to delete car")?;

    tracing::info!("{} Deleted car {} ({} rows affected)", API_NAME, id, rows);

    Ok(Json(json!({ "success": true })))
}

async fn reset_schema(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state
        .schema
        .reset()
        .await
        .storage_context("Failed to reset database")?;

    tracing::info!("{} Database reset and reseeded", API_NAME);

    Ok(Json(json!({ "success": true })))
}
