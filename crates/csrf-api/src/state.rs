use std::sync::Arc;

use csrf_security::{CsrfService, EncryptionKey, IssuerAuth, RequestGate};
use csrf_shared::config::AppConfig;

use crate::cookie_policy::CookiePolicy;

#[derive(Clone)]
pub struct AppState {
    pub csrf: Arc<CsrfService>,
    pub gate: Arc<RequestGate>,
    pub issuer: Arc<IssuerAuth>,
    pub cookie_policy: CookiePolicy,
}

impl AppState {
    pub fn new(
        csrf: Arc<CsrfService>,
        excluded_paths: Vec<String>,
        issuer: IssuerAuth,
        cookie_policy: CookiePolicy,
    ) -> Self {
        let gate = RequestGate::new(csrf.clone(), excluded_paths);
        Self {
            csrf,
            gate: Arc::new(gate),
            issuer: Arc::new(issuer),
            cookie_policy,
        }
    }

    /// Derives the encryption key once; it is read-only from here on.
    pub fn from_config(config: &AppConfig) -> Self {
        let key = EncryptionKey::derive(&config.csrf.token_secret);
        Self::new(
            Arc::new(CsrfService::new(key)),
            config.csrf.excluded_paths.clone(),
            IssuerAuth::new(config.csrf.issuer_secret.clone()),
            CookiePolicy::for_environment(config.app.is_production()),
        )
    }
}
