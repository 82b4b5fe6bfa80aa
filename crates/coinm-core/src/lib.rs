//! # coinm-core
//!
//! Core crate for the COIN-M futures client, providing:
//!
//! - **Types** (`types`): enums, request params and response shapes for the `dapi` REST API
//! - **Configuration** (`config`): JSON config file loading
//! - **Error types** (`error`): domain-specific `CoinMError` via thiserror
//! - **Time utilities** (`time_util`): millisecond timestamps for request signing
//! - **Logging** (`logging`): tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod time_util;
pub mod types;

// Re-export types at crate root for convenience.
pub use types::*;
