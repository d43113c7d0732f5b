use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::app::AppState;
use crate::constants::API_NAME;
use crate::error::AppError;

/// Guards the admin routes with the shared secret.
///
/// The secret is compared as-is with the bearer value; there is no session,
/// expiry or revocation behind it.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = extract_bearer(req.headers())
        .is_some_and(|token| secrets_match(token, &state.admin_password));

    if !authorized {
        tracing::warn!(
            "{} Rejected admin request: {} {}",
            API_NAME,
            req.method(),
            req.uri().path()
        );
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

pub fn secrets_match(candidate: &str, secret: &str) -> bool {
    candidate.as_bytes().ct_eq(secret.as_bytes()).into()
}
