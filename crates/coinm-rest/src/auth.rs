//! Request signing for `SIGNED` endpoints.
//!
//! Binance accepts two signature schemes on the COIN-M REST API:
//!
//! 1. **HMAC-SHA256**: keyed with the API secret, hex-encoded.
//! 2. **Ed25519**: keyed with a PKCS#8 PEM private key, Base64-encoded.
//!
//! Either way the signature covers the exact URL-encoded query string and is
//! appended to it as `&signature=<sig>`.

use base64::Engine;
use coinm_core::error::CoinMError;
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute an HMAC-SHA256 signature and return it as a lowercase hex string.
pub fn hmac_sha256_sign(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Parse a PKCS#8 PEM Ed25519 private key.
pub fn load_ed25519_key(private_key_pem: &str) -> Result<SigningKey, CoinMError> {
    use ed25519_dalek::pkcs8::DecodePrivateKey;

    SigningKey::from_pkcs8_pem(private_key_pem)
        .map_err(|e| CoinMError::Signing(format!("failed to parse Ed25519 private key from PEM: {e}")))
}

/// Sign with Ed25519 and return the Base64-encoded signature.
pub fn ed25519_sign(key: &SigningKey, message: &str) -> String {
    use ed25519_dalek::Signer;

    let signature = key.sign(message.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(signature.to_bytes())
}

/// Signing scheme selected at construction.
#[derive(Clone)]
pub enum Signer {
    Hmac { secret: String },
    Ed25519 { key: SigningKey },
}

impl Signer {
    /// Raw signature over `message`.
    pub fn sign(&self, message: &str) -> String {
        match self {
            Self::Hmac { secret } => hmac_sha256_sign(secret, message),
            Self::Ed25519 { key } => ed25519_sign(key, message),
        }
    }

    /// Append `&signature=<sig>` to an encoded query string.
    pub fn sign_query(&self, query: &str) -> String {
        let signature = self.sign(query);
        if query.is_empty() {
            format!("signature={}", urlencoding::encode(&signature))
        } else {
            format!("{query}&signature={}", urlencoding::encode(&signature))
        }
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hmac { .. } => f.write_str("Signer::Hmac"),
            Self::Ed25519 { .. } => f.write_str("Signer::Ed25519"),
        }
    }
}
