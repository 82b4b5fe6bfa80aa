//! Client order id generation and prefix lint.
//!
//! Orders placed through this client carry a `newClientOrderId` of the form
//! `x-<broker prefix><random tail>`. When the caller leaves the id empty one
//! is generated and written back into their params. When the caller supplies
//! an id without the prefix it is sent untouched and a warning is logged;
//! the exchange stays the only authority on whether the id is acceptable.

use tracing::warn;
use uuid::Uuid;

use crate::config::ApiCategory;

/// Longest client order id the exchange accepts.
pub const MAX_CLIENT_ORDER_ID_LEN: usize = 36;

/// Outcome of [`validate_order_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderIdCheck {
    /// The slot was empty and now holds a fresh id.
    Generated,
    /// The supplied id carries the expected prefix.
    Valid,
    /// The supplied id lacks the prefix. It was left as is and a warning
    /// was logged.
    PrefixMismatch,
}

/// `x-` followed by the category's broker prefix.
pub fn expected_prefix(category: ApiCategory) -> String {
    format!("x-{}", category.order_id_prefix())
}

/// A fresh client order id for `category`, exactly
/// [`MAX_CLIENT_ORDER_ID_LEN`] characters long.
pub fn generate_new_order_id(category: ApiCategory) -> String {
    let mut id = expected_prefix(category);
    let tail = Uuid::new_v4().simple().to_string();
    let room = MAX_CLIENT_ORDER_ID_LEN.saturating_sub(id.len());
    id.push_str(&tail[..room.min(tail.len())]);
    id
}

/// Fill an empty order id slot, or lint a supplied one.
///
/// `property` names the wire field (e.g. `newClientOrderId`) for the log.
pub fn validate_order_id(slot: &mut Option<String>, property: &str, category: ApiCategory) -> OrderIdCheck {
    match slot.as_deref() {
        None | Some("") => {
            *slot = Some(generate_new_order_id(category));
            OrderIdCheck::Generated
        }
        Some(id) => lint_order_id(id, property, category),
    }
}

/// Check a supplied id without ever modifying it.
pub fn lint_order_id(id: &str, property: &str, category: ApiCategory) -> OrderIdCheck {
    let expected = expected_prefix(category);
    if id.starts_with(&expected) {
        OrderIdCheck::Valid
    } else {
        warn!(
            property,
            order_id = id,
            expected_prefix = %expected,
            "[{category}] client order id lacks the expected prefix; the exchange may reject it"
        );
        OrderIdCheck::PrefixMismatch
    }
}
