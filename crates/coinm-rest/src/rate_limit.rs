//! Rate-limit bookkeeping from response headers.
//!
//! The exchange reports consumed request weight and order counts on every
//! response (`X-MBX-USED-WEIGHT-1M`, `X-MBX-ORDER-COUNT-1M`). The transport
//! records the latest values so callers can pace themselves; nothing here
//! throttles requests.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::header::HeaderMap;

/// Header carrying the request weight used in the current minute.
pub const USED_WEIGHT_HEADER: &str = "x-mbx-used-weight-1m";
/// Header carrying the number of orders placed in the current minute.
pub const ORDER_COUNT_HEADER: &str = "x-mbx-order-count-1m";

/// Latest values observed, `None` until a response carried the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    pub used_weight_1m: Option<u64>,
    pub order_count_1m: Option<u64>,
}

/// Lock-free store for the latest header values.
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    used_weight_1m: AtomicU64,
    order_count_1m: AtomicU64,
}

/// Sentinel for "never observed". Stored values are offset by one, so
/// `u64::MAX` reads back as `u64::MAX - 1`.
const UNSET: u64 = 0;

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whatever rate-limit headers `headers` carries.
    pub fn record(&self, headers: &HeaderMap) {
        if let Some(v) = header_u64(headers, USED_WEIGHT_HEADER) {
            self.used_weight_1m.store(v.saturating_add(1), Ordering::Relaxed);
        }
        if let Some(v) = header_u64(headers, ORDER_COUNT_HEADER) {
            self.order_count_1m.store(v.saturating_add(1), Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> RateLimitSnapshot {
        let load = |slot: &AtomicU64| match slot.load(Ordering::Relaxed) {
            UNSET => None,
            v => Some(v - 1),
        };
        RateLimitSnapshot {
            used_weight_1m: load(&self.used_weight_1m),
            order_count_1m: load(&self.order_count_1m),
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
