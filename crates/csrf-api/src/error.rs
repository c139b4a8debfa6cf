use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use csrf_security::CsrfError;
use csrf_shared::constants::CODE_INTERNAL_ERROR;
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Csrf(#[from] CsrfError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Csrf(err @ CsrfError::Unauthenticated) => {
                tracing::warn!("Unauthenticated: {}", err);
                (StatusCode::UNAUTHORIZED, err.code(), err.to_string())
            }
            ApiError::Csrf(err) => {
                tracing::warn!("Forbidden: {} ({})", err, err.code());
                (StatusCode::FORBIDDEN, err.code(), err.to_string())
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, CODE_INTERNAL_ERROR, msg)
            }
        };

        let body = Json(ErrorBody {
            status: status.as_u16(),
            message,
            code,
        });

        (status, body).into_response()
    }
}
