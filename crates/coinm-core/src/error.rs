//! Typed error definitions shared by the COIN-M crates.
//!
//! [`CoinMError`] covers failures that happen before a request ever reaches
//! the network: bad configuration, parameters that cannot be turned into a
//! query string, and signing keys that cannot be loaded. Transport-level
//! failures live in `coinm_rest::error::RestError`, which wraps this type.

use thiserror::Error;

/// Domain-specific errors for the COIN-M client.
#[derive(Debug, Error)]
pub enum CoinMError {
    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),

    /// Request parameter or response payload could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// Signing key could not be loaded or used.
    #[error("signing error: {0}")]
    Signing(String),
}
