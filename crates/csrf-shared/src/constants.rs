//! Wire-level constants shared by the gate, the issuance endpoint and clients

/// Header carrying the encrypted token on protected requests.
pub const CSRF_TOKEN_HEADER: &str = "x-csrf-token";
/// Header carrying the raw companion value on protected requests.
pub const CSRF_RAW_HEADER: &str = "x-csrf-raw";
/// Cookie set on issuance, holding the raw companion value.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";

pub const CSRF_RAW_LENGTH: usize = 32;

pub const CODE_CSRF_TOKEN_MISSING: &str = "CSRF_TOKEN_MISSING";
pub const CODE_INVALID_CSRF_TOKEN: &str = "INVALID_CSRF_TOKEN";
pub const CODE_UNAUTHENTICATED: &str = "UNAUTHENTICATED";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

pub const ENV_PRODUCTION: &str = "production";
pub const ENV_DEVELOPMENT: &str = "development";
