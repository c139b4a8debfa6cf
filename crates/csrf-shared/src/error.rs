//! Startup error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Missing required secret: {0}")]
    MissingSecret(&'static str),
}
