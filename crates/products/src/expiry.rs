//! Near-expiry policy.
//!
//! A product is "near expiry" once it enters the trailing 20% of its shelf life,
//! where shelf life runs from the manufacturing date to the expiry date.
//!
//! The policy does not validate that manufacturing precedes expiry. With
//! inverted dates the shelf life is negative, so the alert window is negative
//! and the trigger point lands *after* the expiry date; the answer is still a
//! plain date comparison.

use chrono::{DateTime, TimeDelta, Utc};

/// Shelf life is divided by this to get the alert window (last 1/5 = 20%).
pub const ALERT_WINDOW_DIVISOR: i32 = 5;

/// Alert window for a given (signed) total shelf life.
pub fn alert_window(total_life: TimeDelta) -> TimeDelta {
    total_life / ALERT_WINDOW_DIVISOR
}

/// Instant after which a product counts as near expiry.
///
/// Equals `0.8 * expiry + 0.2 * manufacturing`, so it always lies between the
/// two dates (inclusive) and never leaves the representable range.
pub fn trigger_date(manufacturing_date: DateTime<Utc>, expiry_date: DateTime<Utc>) -> DateTime<Utc> {
    let window = alert_window(expiry_date.signed_duration_since(manufacturing_date));
    expiry_date - window
}

/// Is a product with these dates near expiry at `now`?
///
/// - no expiry date: never;
/// - otherwise: `now` strictly after `expiry - (expiry - manufacturing) / 5`.
pub fn is_near_expiry(
    manufacturing_date: DateTime<Utc>,
    expiry_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    expiry_date.is_some_and(|expiry_date| now > trigger_date(manufacturing_date, expiry_date))
}
