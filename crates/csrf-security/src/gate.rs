//! Request gate decision logic, independent of the HTTP framework

use std::sync::Arc;

use tracing::{debug, warn};

use crate::csrf::TokenVerifier;
use crate::error::CsrfError;

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Excluded,
    Verified,
}

#[derive(Clone)]
pub struct RequestGate {
    verifier: Arc<dyn TokenVerifier>,
    excluded_paths: Vec<String>,
}

impl RequestGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>, excluded_paths: Vec<String>) -> Self {
        Self {
            verifier,
            excluded_paths,
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded_paths.iter().any(|excluded| excluded == path)
    }

    /// Decide a protected request from its path and the two submitted values.
    /// Empty values count as absent.
    pub fn check(
        &self,
        path: &str,
        token: Option<&str>,
        raw: Option<&str>,
    ) -> Result<GateOutcome, CsrfError> {
        if self.is_excluded(path) {
            debug!("CSRF check skipped for excluded path {}", path);
            return Ok(GateOutcome::Excluded);
        }

        let (token, raw) = match (non_empty(token), non_empty(raw)) {
            (Some(token), Some(raw)) => (token, raw),
            _ => {
                warn!("CSRF token or raw value missing on {}", path);
                return Err(CsrfError::MissingCredentials);
            }
        };

        if !self.verifier.verify(token, raw) {
            warn!("Invalid CSRF token on {}", path);
            return Err(CsrfError::InvalidToken);
        }

        debug!("CSRF token verified for {}", path);
        Ok(GateOutcome::Verified)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
