//! # coinm-rest
//!
//! Typed REST client for Binance COIN-M (coin-margined) futures.
//!
//! [`CoinMClient`] maps every `dapi` endpoint to one async method. Requests
//! are flattened into a [`ParamBag`], signed by the [`SignedTransport`] and
//! decoded into the types of [`coinm_core::types`].
//!
//! ## Deployments
//!
//! | Category    | Base URL                             |
//! |-------------|--------------------------------------|
//! | `CoinM`     | `https://dapi.binance.com`           |
//! | `CoinMTest` | `https://testnet.binancefuture.com`  |
//!
//! Order submission fills in a `newClientOrderId` carrying the category's
//! broker prefix when none is given (see [`order_id`]).

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod order_id;
pub mod params;
pub mod rate_limit;
pub mod retry;
pub mod transport;

pub use client::{CoinMClient, MAX_BATCH_ORDERS};
pub use config::{ApiCategory, RestClientOptions};
pub use error::RestError;
pub use params::ParamBag;
pub use retry::RetryConfig;
pub use transport::{HttpTransport, Method, RestRequest, Security, SignedTransport};
