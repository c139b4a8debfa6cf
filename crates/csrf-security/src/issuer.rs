//! Shared-secret check guarding token issuance

use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::CsrfError;

pub struct IssuerAuth {
    shared_secret: String,
}

impl IssuerAuth {
    pub fn new(shared_secret: impl Into<String>) -> Self {
        Self {
            shared_secret: shared_secret.into(),
        }
    }

    /// Check an `Authorization: <scheme> <secret>` value. The scheme word is not
    /// inspected.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<(), CsrfError> {
        let presented = authorization
            .and_then(credential)
            .ok_or(CsrfError::Unauthenticated)?;

        if !bool::from(presented.as_bytes().ct_eq(self.shared_secret.as_bytes())) {
            warn!("CSRF token requested with an invalid issuer secret");
            return Err(CsrfError::Unauthorized);
        }

        Ok(())
    }
}

impl std::fmt::Debug for IssuerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuerAuth")
            .field("shared_secret", &"<redacted>")
            .finish()
    }
}

/// Second space-separated segment of the header, if non-empty.
pub fn credential(authorization: &str) -> Option<&str> {
    authorization.split(' ').nth(1).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_extraction() {
        assert_eq!(credential("Bearer abc"), Some("abc"));
        assert_eq!(credential("Token abc def"), Some("abc"));
        assert_eq!(credential("Bearer"), None);
        assert_eq!(credential("Bearer "), None);
        assert_eq!(credential(""), None);
    }

    #[test]
    fn test_matching_secret_passes() {
        let auth = IssuerAuth::new("issuer-secret");
        assert_eq!(auth.authorize(Some("Bearer issuer-secret")), Ok(()));
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let auth = IssuerAuth::new("issuer-secret");
        assert_eq!(
            auth.authorize(Some("Bearer wrong")),
            Err(CsrfError::Unauthorized)
        );
        assert_eq!(
            auth.authorize(Some("Bearer issuer-secret-longer")),
            Err(CsrfError::Unauthorized)
        );
    }

    #[test]
    fn test_absent_or_malformed_is_unauthenticated() {
        let auth = IssuerAuth::new("issuer-secret");
        assert_eq!(auth.authorize(None), Err(CsrfError::Unauthenticated));
        assert_eq!(
            auth.authorize(Some("issuer-secret")),
            Err(CsrfError::Unauthenticated)
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let auth = IssuerAuth::new("issuer-secret");
        assert!(!format!("{:?}", auth).contains("issuer-secret"));
    }
}
