//! # Discounts Module
//!
//! Coupon catalog and discount rules.
//!
//! ## Discount Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Discounts Come From                          │
//! │                                                                         │
//! │  1. Campaign coupons (active_coupons)                                  │
//! │     SAVE20NOW → 20%, DISCOUNT50OFF → 50%                               │
//! │     Redeemed by exact code, unknown codes are an error                 │
//! │                                                                         │
//! │  2. Checkout codes (discount_for_code)                                 │
//! │     SAVE10 → 10%, SAVE20 → 20%                                         │
//! │     Unknown codes fall back to no discount, checkout proceeds          │
//! │                                                                         │
//! │  3. Holiday rule (holiday_discount_on)                                 │
//! │     December 25 → 20%, every other day → none                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Coupon, DiscountRate};
use crate::validation::{validate_coupon_code, validate_price};

/// Discount granted store-wide on December 25.
pub const HOLIDAY_DISCOUNT_BPS: u32 = 2000;

// =============================================================================
// Coupon Catalog
// =============================================================================

/// Returns the currently active campaign coupons.
///
/// ## Example
/// ```rust
/// use minimart_core::discounts::active_coupons;
///
/// let coupons = active_coupons();
/// assert_eq!(coupons[0].code, "SAVE20NOW");
/// ```
pub fn active_coupons() -> Vec<Coupon> {
    vec![
        Coupon::new("SAVE20NOW", 2000),
        Coupon::new("DISCOUNT50OFF", 5000),
    ]
}

/// Redeems a campaign coupon by exact code.
///
/// ## Errors
/// [`CoreError::UnknownCoupon`] when the code is not in the active catalog.
pub fn redeem_coupon(code: &str) -> CoreResult<DiscountRate> {
    active_coupons()
        .into_iter()
        .find(|coupon| coupon.code == code)
        .map(|coupon| coupon.rate)
        .ok_or_else(|| CoreError::UnknownCoupon(code.to_string()))
}

// =============================================================================
// Checkout Discount Codes
// =============================================================================

/// Maps a checkout discount code to its rate.
///
/// Unknown codes yield a zero rate rather than an error: checkout proceeds
/// at full price, matching how the till treats a code that scans but does
/// not exist.
pub fn discount_for_code(code: &str) -> DiscountRate {
    match code {
        "SAVE10" => DiscountRate::from_bps(1000),
        "SAVE20" => DiscountRate::from_bps(2000),
        _ => DiscountRate::zero(),
    }
}

/// Calculates the price after applying a checkout discount code.
///
/// ## Rules
/// - The price must be positive
/// - The code must be well-formed (non-empty, uppercase alphanumeric)
/// - A well-formed but unknown code means full price, not a failure
///
/// ## Example
/// ```rust
/// use minimart_core::discounts::discounted_price;
/// use minimart_core::money::Money;
///
/// let total = discounted_price(Money::from_cents(100_000), "SAVE10").unwrap();
/// assert_eq!(total.cents(), 90_000);
///
/// assert!(discounted_price(Money::zero(), "SAVE10").is_err());
/// assert!(discounted_price(Money::from_cents(1000), "save10").is_err());
/// ```
pub fn discounted_price(price: Money, code: &str) -> CoreResult<Money> {
    validate_price(price)?;
    validate_coupon_code(code)?;

    Ok(price.apply_discount(discount_for_code(code)))
}

// =============================================================================
// Holiday Discount
// =============================================================================

/// Returns the store-wide discount in effect on the given date.
///
/// December 25 grants [`HOLIDAY_DISCOUNT_BPS`]; every other day grants
/// nothing.
pub fn holiday_discount_on(date: NaiveDate) -> DiscountRate {
    if date.month() == 12 && date.day() == 25 {
        DiscountRate::from_bps(HOLIDAY_DISCOUNT_BPS)
    } else {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
