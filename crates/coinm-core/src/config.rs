//! Configuration file loading.
//!
//! Every binary in the workspace reads its settings from a single JSON file.
//! The schema is owned by the caller; this module only handles the file and
//! deserialization plumbing so error messages name the offending path.
//!
//! # Example config (coinm-cli)
//!
//! ```json
//! {
//!   "log": { "level": "debug", "dir": "/tmp/log" },
//!   "client": { "api_key": "...", "api_secret": "...", "use_testnet": true }
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::error::CoinMError;

/// Load and parse a JSON config file into `T`.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&content).with_context(|| format!("invalid config file {}", path.display()))
}

/// Parse config JSON text into `T`.
pub fn parse_config<T: DeserializeOwned>(content: &str) -> Result<T, CoinMError> {
    serde_json::from_str(content).map_err(|e| CoinMError::Config(e.to_string()))
}
