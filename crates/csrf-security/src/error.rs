//! CSRF error taxonomy

use csrf_shared::constants::{
    CODE_CSRF_TOKEN_MISSING, CODE_INVALID_CSRF_TOKEN, CODE_UNAUTHENTICATED,
};
use thiserror::Error;

/// Terminal rejection of a request by one of the gates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfError {
    #[error("CSRF token or cookie missing")]
    MissingCredentials,
    #[error("Invalid CSRF token")]
    InvalidToken,
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Invalid CSRF token")]
    Unauthorized,
}

impl CsrfError {
    /// Machine-readable code carried in the denial body.
    pub fn code(&self) -> &'static str {
        match self {
            CsrfError::MissingCredentials => CODE_CSRF_TOKEN_MISSING,
            CsrfError::InvalidToken | CsrfError::Unauthorized => CODE_INVALID_CSRF_TOKEN,
            CsrfError::Unauthenticated => CODE_UNAUTHENTICATED,
        }
    }
}

/// Why a submitted token could not be decrypted. Never leaves `CsrfService::verify`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not valid base64")]
    Encoding,
    #[error("token ciphertext has invalid length or padding")]
    Decryption,
    #[error("decrypted token is not valid UTF-8")]
    Utf8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CsrfError::MissingCredentials.code(), "CSRF_TOKEN_MISSING");
        assert_eq!(CsrfError::InvalidToken.code(), "INVALID_CSRF_TOKEN");
        assert_eq!(CsrfError::Unauthorized.code(), "INVALID_CSRF_TOKEN");
        assert_eq!(CsrfError::Unauthenticated.code(), "UNAUTHENTICATED");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CsrfError::MissingCredentials.to_string(),
            "CSRF token or cookie missing"
        );
        assert_eq!(CsrfError::InvalidToken.to_string(), "Invalid CSRF token");
    }
}
