//! Double-submit CSRF token codec
//!
//! A random alphanumeric value is encrypted with AES-256-ECB (PKCS#7 padding) under
//! the derived key and shipped as standard base64. The raw value travels next to it.
//! Verification decrypts the token and compares, so no issued token is ever stored.
//! The format matches crypto-js `AES.encrypt(value, sha256(secret), { mode: ECB })`.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use csrf_shared::constants::CSRF_RAW_LENGTH;
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, Key, KeyInit};
use rand::{distr::Alphanumeric, Rng};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::TokenError;
use crate::key::EncryptionKey;

type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// Token pair handed to a client on issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Base64 ciphertext, resent as `x-csrf-token`.
    pub token: String,
    /// Plain companion value, resent as `x-csrf-raw`.
    pub raw: String,
}

/// Seam between the request gate and the codec.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, expected_raw: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct CsrfService {
    key: EncryptionKey,
}

impl CsrfService {
    pub fn new(key: EncryptionKey) -> Self {
        Self { key }
    }

    pub fn from_secret(secret: &str) -> Self {
        Self::new(EncryptionKey::derive(secret))
    }

    /// Mint a fresh raw value and its encrypted token.
    pub fn generate(&self) -> IssuedToken {
        let raw = generate_raw_value();
        let token = self.encrypt(&raw);
        IssuedToken { token, raw }
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        let ciphertext = Aes256EcbEnc::new(self.cipher_key())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        STANDARD.encode(ciphertext)
    }

    pub fn decrypt(&self, token: &str) -> Result<String, TokenError> {
        let ciphertext = STANDARD.decode(token).map_err(|_| TokenError::Encoding)?;
        let plaintext = Aes256EcbDec::new(self.cipher_key())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| TokenError::Decryption)?;
        String::from_utf8(plaintext).map_err(|_| TokenError::Utf8)
    }

    /// True only when `token` decrypts to exactly `expected_raw`.
    pub fn verify(&self, token: &str, expected_raw: &str) -> bool {
        match self.decrypt(token) {
            Ok(plaintext) => plaintext.as_bytes().ct_eq(expected_raw.as_bytes()).into(),
            Err(e) => {
                debug!("CSRF token could not be decrypted: {}", e);
                false
            }
        }
    }

    fn cipher_key(&self) -> &Key<Aes256EcbEnc> {
        Key::<Aes256EcbEnc>::from_slice(self.key.as_bytes())
    }
}

impl TokenVerifier for CsrfService {
    fn verify(&self, token: &str, expected_raw: &str) -> bool {
        CsrfService::verify(self, token, expected_raw)
    }
}

/// 32 characters drawn uniformly from `A-Z a-z 0-9`.
pub fn generate_raw_value() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_RAW_LENGTH)
        .map(char::from)
        .collect()
}
