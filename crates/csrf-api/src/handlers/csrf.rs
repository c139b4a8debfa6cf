//! CSRF token issuance and probe handlers

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::error::ApiError;
use crate::response::CsrfTokenResponse;
use crate::state::AppState;

/// Issue handler - GET /api/v1/csrf/token
///
/// Runs behind `issuer_auth_middleware`. Sets the `csrf_token` cookie and returns
/// the encrypted token together with the raw value the client must echo back.
pub async fn assign_csrf_token(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let issued = state.csrf.generate();

    let cookie = state.cookie_policy.build(issued.raw.clone());
    let set_cookie = HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| ApiError::InternalError(format!("Invalid Set-Cookie header: {}", e)))?;

    debug!("Issued CSRF token (secure cookie: {})", state.cookie_policy.secure);

    Ok((
        [(header::SET_COOKIE, set_cookie)],
        Json(CsrfTokenResponse {
            csrf_token: issued.token,
            cookie: issued.raw,
        }),
    ))
}

/// Probe handler - POST /api/v1/csrf/verify
///
/// Runs behind `csrf_middleware`; reaching it means the submitted pair was accepted.
pub async fn verify_csrf_token() -> StatusCode {
    StatusCode::NO_CONTENT
}
