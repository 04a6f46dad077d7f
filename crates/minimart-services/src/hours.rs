//! # Opening Hours
//!
//! Time-dependent storefront behavior: is the shop trading right now, and
//! does today carry a store-wide discount?
//!
//! ## The Clock Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Reading the system clock inside business logic makes tests flaky:     │
//! │  the same test passes at noon and fails at 21:00.                       │
//! │                                                                         │
//! │    store_is_open(&SystemClock, &hours)   ← production                  │
//! │    store_is_open(&fixed_at_07_20, &hours) ← tests, any time of day     │
//! │                                                                         │
//! │  The Clock trait is the only place wall-clock time enters the crate.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use minimart_core::discounts::holiday_discount_on;
use minimart_core::types::{DiscountRate, StoreHours};

// =============================================================================
// Clock Seam
// =============================================================================

/// Source of the current local date and time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

// =============================================================================
// Storefront Queries
// =============================================================================

/// Returns true if the store is trading at the clock's current time.
pub fn store_is_open<C: Clock>(clock: &C, hours: &StoreHours) -> bool {
    let now = clock.now();
    let open = hours.is_open_at(now.time());
    debug!(time = %now.time(), open, "checked store hours");
    open
}

/// Returns the store-wide discount in effect on the clock's current date.
///
/// See [`holiday_discount_on`] for the rule itself.
pub fn holiday_discount<C: Clock>(clock: &C) -> DiscountRate {
    holiday_discount_on(clock.now().date())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    /// Test clock pinned to a fixed instant.
    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> FixedClock {
        let (y, m, d) = date;
        let (h, min) = time;
        FixedClock(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_closed_before_opening() {
        let clock = at((2025, 6, 9), (7, 20));
        assert!(!store_is_open(&clock, &StoreHours::default()));
    }

    #[test]
    fn test_closed_after_closing() {
        let clock = at((2025, 6, 9), (21, 20));
        assert!(!store_is_open(&clock, &StoreHours::default()));
    }

    #[test]
    fn test_open_during_trading_hours() {
        let clock = at((2025, 6, 9), (12, 0));
        assert!(store_is_open(&clock, &StoreHours::default()));
    }

    #[test]
    fn test_no_holiday_discount_on_ordinary_day() {
        let clock = at((2025, 11, 24), (10, 0));
        assert!(holiday_discount(&clock).is_zero());
    }

    #[test]
    fn test_holiday_discount_on_christmas() {
        let clock = at((2025, 12, 25), (10, 0));
        assert_eq!(holiday_discount(&clock).percentage(), 20.0);
    }

    #[test]
    fn test_system_clock_is_usable() {
        // Smoke test only: whatever the hour, the call must not panic.
        let _ = store_is_open(&SystemClock, &StoreHours::default());
    }
}
