//! Router builders for mounting the CSRF guard into an application

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::csrf;
use crate::middleware::{csrf_middleware, issuer_auth_middleware};
use crate::state::AppState;

pub const CSRF_TOKEN_PATH: &str = "/api/v1/csrf/token";
pub const CSRF_VERIFY_PATH: &str = "/api/v1/csrf/verify";

/// Issuance endpoint behind the shared-secret check.
pub fn issuance_routes(state: AppState) -> Router {
    Router::new()
        .route(CSRF_TOKEN_PATH, get(csrf::assign_csrf_token))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            issuer_auth_middleware,
        ))
        .with_state(state)
}

/// Probe endpoint behind the CSRF gate.
pub fn verify_routes(state: AppState) -> Router {
    protect(
        Router::new().route(CSRF_VERIFY_PATH, post(csrf::verify_csrf_token)),
        state,
    )
}

/// Wrap every route already on `router` in the CSRF gate. Routes added
/// afterwards are not gated; a router without routes is returned as is.
pub fn protect<S>(router: Router<S>, state: AppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !router.has_routes() {
        return router;
    }

    router.route_layer(middleware::from_fn_with_state(state, csrf_middleware))
}
