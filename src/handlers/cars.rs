use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::app::AppState;
use crate::constants::CAR_NOT_FOUND;
use crate::error::{AppError, StorageContext};
use crate::extract::ValidatedPath;
use crate::models::Car;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars))
        .route("/cars/:id", get(get_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state
        .cars
        .list_by_price()
        .await
        .storage_context("Failed to fetch cars")?;
    Ok(Json(cars))
}

async fn get_car(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<Car>, AppError> {
    state
        .cars
        .find_by_id(id)
        .await
        .storage_context("Failed to fetch car")?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))
}
