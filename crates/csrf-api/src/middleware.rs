use std::borrow::Cow;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use csrf_security::CsrfError;
use csrf_shared::constants::{CSRF_RAW_HEADER, CSRF_TOKEN_HEADER};
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// CSRF gate - requires `x-csrf-token` and `x-csrf-raw` to match unless the path is excluded
pub async fn csrf_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    {
        let headers = request.headers();
        let token = header_text(headers, CSRF_TOKEN_HEADER);
        let raw = header_text(headers, CSRF_RAW_HEADER);
        state
            .gate
            .check(request.uri().path(), token.as_deref(), raw.as_deref())?;
    }

    Ok(next.run(request).await)
}

/// Issuance gate - `Authorization: <scheme> <issuer secret>`
pub async fn issuer_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = match request.headers().get(header::AUTHORIZATION) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Authorization header is not valid text");
                return Err(CsrfError::Unauthenticated.into());
            }
        },
    };

    state.issuer.authorize(authorization)?;

    Ok(next.run(request).await)
}

/// Header value as text. Undecodable values are treated as absent. Repeated
/// headers are joined with `", "`, which never verifies.
fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    let values = headers
        .get_all(name)
        .iter()
        .map(|v| v.to_str())
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match values.as_slice() {
        [] => None,
        [single] => Some(Cow::Borrowed(*single)),
        _ => Some(Cow::Owned(values.join(", "))),
    }
}
