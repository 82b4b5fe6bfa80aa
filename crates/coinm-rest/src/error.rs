//! Errors surfaced by the REST client.
//!
//! The client adds no interpretation of its own: every variant is either a
//! transport failure, a non-2xx status, an exchange `{code,msg}` body, or a
//! local precondition that stopped the request from being sent.

use coinm_core::error::CoinMError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestError {
    /// Connection, TLS, timeout or body read failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status with an exchange error body.
    #[error("exchange error {code} (HTTP {status}): {msg}")]
    Exchange { status: u16, code: i64, msg: String },

    /// Non-2xx status whose body is not an exchange error.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response JSON did not match the declared shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// An `ApiKey` or `Signed` endpoint was called without credentials.
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error(transparent)]
    Core(#[from] CoinMError),
}

impl RestError {
    /// Exchange error code, when the failure carried one.
    pub fn exchange_code(&self) -> Option<i64> {
        match self {
            Self::Exchange { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Exchange { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
