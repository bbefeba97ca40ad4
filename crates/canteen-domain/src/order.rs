//! Order mutability window.

use chrono::{DateTime, Duration, Utc};

/// How long after creation an order may still be edited or deleted.
pub const ORDER_EDIT_WINDOW_MINUTES: i64 = 30;

pub fn order_edit_window() -> Duration {
    Duration::minutes(ORDER_EDIT_WINDOW_MINUTES)
}

/// Returns `true` while `now - created_at` is within the edit window (inclusive).
///
/// There is no background expiry: an order past its window simply stops
/// accepting edits the next time one is attempted.
pub fn is_order_mutable(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - created_at <= order_edit_window()
}
