//! Attributes of the `csrf_token` cookie set on issuance

use cookie::{Cookie, SameSite};
use csrf_shared::constants::CSRF_COOKIE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
}

impl CookiePolicy {
    /// `Secure` is only set for production deployments.
    pub fn for_environment(is_production: bool) -> Self {
        Self {
            secure: is_production,
        }
    }

    pub fn build(&self, raw: String) -> Cookie<'static> {
        Cookie::build((CSRF_COOKIE_NAME, raw))
            .http_only(true)
            .same_site(SameSite::Strict)
            .path("/")
            .secure(self.secure)
            .build()
    }
}
