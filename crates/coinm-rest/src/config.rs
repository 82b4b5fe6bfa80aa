//! COIN-M client configuration.
//!
//! Holds API credentials, network selection and transport tuning. Every
//! field except the credentials has a production default, so a config file
//! only needs `api_key`/`api_secret` (or nothing at all for public data).

use serde::Deserialize;

use crate::retry::RetryConfig;

/// Which `dapi` deployment a client talks to.
///
/// Fixed at construction; it selects both the base URL and the broker
/// prefix of generated client order ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiCategory {
    /// Live COIN-M futures.
    CoinM,
    /// COIN-M futures testnet.
    CoinMTest,
}

impl ApiCategory {
    pub fn from_testnet(use_testnet: bool) -> Self {
        if use_testnet { Self::CoinMTest } else { Self::CoinM }
    }

    /// REST base URL for this deployment.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::CoinM => "https://dapi.binance.com",
            Self::CoinMTest => "https://testnet.binancefuture.com",
        }
    }

    /// Broker id embedded in client order ids after the `x-` marker.
    pub fn order_id_prefix(self) -> &'static str {
        match self {
            Self::CoinM | Self::CoinMTest => "15PC4ZJy",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::CoinM => "coinm",
            Self::CoinMTest => "coinmtest",
        }
    }

    pub fn is_testnet(self) -> bool {
        matches!(self, Self::CoinMTest)
    }
}

impl std::fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration for [`CoinMClient`](crate::CoinMClient).
#[derive(Debug, Clone, Deserialize)]
pub struct RestClientOptions {
    /// API key, sent as `X-MBX-APIKEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API secret for HMAC-SHA256 signing.
    #[serde(default)]
    pub api_secret: Option<String>,

    /// PEM-encoded Ed25519 private key file. When set, signed requests use
    /// Ed25519 instead of HMAC.
    #[serde(default)]
    pub ed25519_key_path: Option<String>,

    /// Talk to the testnet instead of the live exchange.
    #[serde(default)]
    pub use_testnet: bool,

    /// Override the category's default base URL (e.g. a local proxy).
    #[serde(default)]
    pub base_url: Option<String>,

    /// `recvWindow` for signed requests (milliseconds, 0 = exchange default).
    #[serde(default = "default_recv_window")]
    pub recv_window: u64,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retry policy for read-only requests.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for RestClientOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            ed25519_key_path: None,
            use_testnet: false,
            base_url: None,
            recv_window: default_recv_window(),
            timeout_ms: default_timeout_ms(),
            retry: RetryConfig::default(),
        }
    }
}

impl RestClientOptions {
    pub fn category(&self) -> ApiCategory {
        ApiCategory::from_testnet(self.use_testnet)
    }

    /// Effective base URL, without a trailing slash.
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.category().base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Default helpers (used by serde)
// ---------------------------------------------------------------------------

fn default_recv_window() -> u64 {
    5000
}

fn default_timeout_ms() -> u64 {
    10_000
}
