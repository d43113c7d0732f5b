use std::path::Path;
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{admin, bookings, cars, health, login};
use crate::repository::{BookingRepository, CarRepository, SchemaRepository};

/// Shared by every handler. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub cars: CarRepository,
    pub bookings: BookingRepository,
    pub schema: SchemaRepository,
    pub admin_password: Arc<str>,
}

impl AppState {
    pub fn new(pool: SqlitePool, admin_password: &str) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            schema: SchemaRepository::new(pool),
            admin_password: Arc::from(admin_password),
        }
    }
}

/// `/api/*` with CORS; every other path is looked up under `assets_dir`.
pub fn build_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(cars::router())
        .merge(bookings::router())
        .merge(login::router())
        .nest("/admin", admin::router(state.clone()))
        .layer(CorsLayer::permissive());

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
