//! # CSRF API
//! 
//! Axum middleware, handlers and response bodies for the double-submit CSRF guard.

pub mod cookie_policy;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
