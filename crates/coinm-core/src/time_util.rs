//! Wall-clock helpers for request timestamps.
//!
//! Signed requests carry a millisecond `timestamp` that the exchange checks
//! against its own clock, so the transport combines [`now_ms`] with a
//! server offset obtained from the server-time endpoint.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as **milliseconds** since Unix epoch.
#[inline]
pub fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

/// Local time shifted by a signed offset (server minus local), in milliseconds.
#[inline]
pub fn adjusted_now_ms(offset_ms: i64) -> u64 {
    now_ms().saturating_add_signed(offset_ms)
}
