//! # CSRF Shared
//! 
//! Configuration, wire constants, startup errors and telemetry for the CSRF guard.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use self::config::AppConfig;
pub use error::AppError;
