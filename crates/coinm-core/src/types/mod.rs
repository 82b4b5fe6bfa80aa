//! Core type definitions for the COIN-M futures REST API.
//!
//! Re-exports all public types from submodules so consumers can use
//! `coinm_core::types::*` or `coinm_core::*` directly.

pub mod account;
pub mod enums;
pub mod market;
pub mod shared;
pub mod trading;

pub use account::*;
pub use enums::*;
pub use market::*;
pub use shared::*;
pub use trading::*;
