//! # CSRF Security
//! 
//! Double-submit CSRF protection: key derivation, token codec, request gate and issuance gate.

pub mod key;
pub mod csrf;
pub mod error;
pub mod gate;
pub mod issuer;

pub use csrf::{CsrfService, IssuedToken, TokenVerifier};
pub use error::{CsrfError, TokenError};
pub use gate::{GateOutcome, RequestGate};
pub use issuer::IssuerAuth;
pub use key::EncryptionKey;
