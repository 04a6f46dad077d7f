//! # Domain Types
//!
//! Core domain types used throughout Minimart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │     Coupon      │   │  CountryCode    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  code           │   │  Us             │       │
//! │  │  2000 = 20%     │   │  rate           │   │  Uk             │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   StoreHours    │   open/close times, half-open interval            │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (the `SAVE20NOW` coupon)
///
/// Storing rates as integers keeps discount math exact. Floats only appear
/// at the display boundary via [`DiscountRate::percentage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A redeemable discount coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code the shopper types at checkout.
    pub code: String,

    /// Discount granted when the code is redeemed.
    pub rate: DiscountRate,
}

impl Coupon {
    /// Creates a coupon from a code and a rate in basis points.
    pub fn new(code: impl Into<String>, bps: u32) -> Self {
        Coupon {
            code: code.into(),
            rate: DiscountRate::from_bps(bps),
        }
    }
}

// =============================================================================
// Country Code
// =============================================================================

/// Countries Minimart ships to (and whose driving rules it knows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    /// United States.
    Us,
    /// United Kingdom.
    Uk,
}

impl CountryCode {
    /// Minimum legal driving age in years.
    ///
    /// US: 16, UK: 17.
    pub const fn minimum_driving_age(&self) -> i64 {
        match self {
            CountryCode::Us => 16,
            CountryCode::Uk => 17,
        }
    }

    /// All supported country codes, as they appear in input.
    pub fn allowed() -> Vec<String> {
        vec!["US".to_string(), "UK".to_string()]
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryCode::Us => write!(f, "US"),
            CountryCode::Uk => write!(f, "UK"),
        }
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(CountryCode::Us),
            "UK" => Ok(CountryCode::Uk),
            _ => Err(ValidationError::NotAllowed {
                field: "country_code".to_string(),
                allowed: CountryCode::allowed(),
            }),
        }
    }
}

// =============================================================================
// Store Hours
// =============================================================================

/// Daily opening hours as a half-open interval `[open, close)`.
///
/// A shopper arriving exactly at closing time finds the door locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    /// Time the store opens.
    pub open: NaiveTime,
    /// Time the store closes.
    pub close: NaiveTime,
}

impl StoreHours {
    /// Creates opening hours from open and close times.
    pub const fn new(open: NaiveTime, close: NaiveTime) -> Self {
        StoreHours { open, close }
    }

    /// Returns true if the store is open at the given time of day.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveTime;
    /// use minimart_core::types::StoreHours;
    ///
    /// let hours = StoreHours::default(); // 08:00 - 20:00
    /// let morning = NaiveTime::from_hms_opt(7, 20, 0).unwrap();
    /// let midday = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    ///
    /// assert!(!hours.is_open_at(morning));
    /// assert!(hours.is_open_at(midday));
    /// ```
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.open <= time && time < self.close
    }
}

/// Default trading hours: 08:00 to 20:00.
impl Default for StoreHours {
    fn default() -> Self {
        StoreHours {
            open: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"),
            close: NaiveTime::from_hms_opt(20, 0, 0).expect("20:00 is a valid time"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_conversions() {
        let rate = DiscountRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert_eq!(rate.percentage(), 20.0);

        assert_eq!(DiscountRate::from_percentage(8.25).bps(), 825);
        assert!(DiscountRate::zero().is_zero());
        assert_eq!(DiscountRate::default(), DiscountRate::zero());
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(DiscountRate::from_bps(2000).to_string(), "20%");
        assert_eq!(DiscountRate::from_bps(50).to_string(), "0.5%");
    }

    #[test]
    fn test_coupon_serialization() {
        let coupon = Coupon::new("SAVE20NOW", 2000);
        let json = serde_json::to_string(&coupon).unwrap();
        assert!(json.contains("SAVE20NOW"));
        assert!(json.contains("2000"));

        let back: Coupon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coupon);
    }

    #[test]
    fn test_country_code_parsing() {
        assert_eq!("US".parse::<CountryCode>().unwrap(), CountryCode::Us);
        assert_eq!("uk".parse::<CountryCode>().unwrap(), CountryCode::Uk);
        assert_eq!(" us ".parse::<CountryCode>().unwrap(), CountryCode::Us);

        let err = "SA".parse::<CountryCode>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_minimum_driving_age() {
        assert_eq!(CountryCode::Us.minimum_driving_age(), 16);
        assert_eq!(CountryCode::Uk.minimum_driving_age(), 17);
    }

    #[test]
    fn test_store_hours_half_open_interval() {
        let hours = StoreHours::default();

        let opening = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        let evening = NaiveTime::from_hms_opt(21, 20, 0).unwrap();

        assert!(hours.is_open_at(opening));
        assert!(!hours.is_open_at(closing));
        assert!(!hours.is_open_at(evening));
    }
}
