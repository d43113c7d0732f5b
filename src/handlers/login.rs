use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::app::AppState;
use crate::auth::secrets_match;
use crate::error::AppError;
use crate::extract::ValidatedJson;
use crate::models::{LoginRequest, LoginResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Hands the shared admin secret back as the bearer token.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    if secrets_match(&request.password, &state.admin_password) {
        return Ok((
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                token: Some(state.admin_password.to_string()),
            }),
        ));
    }

    Ok((
        StatusCode::UNAUTHORIZED,
        Json(LoginResponse {
            success: false,
            token: None,
        }),
    ))
}
