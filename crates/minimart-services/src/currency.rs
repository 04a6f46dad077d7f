//! # Currency Conversion
//!
//! Shows list prices in the shopper's own currency.
//!
//! The exchange-rate provider is an external feed, so it sits behind the
//! [`ExchangeRates`] trait and tests substitute fixed rate tables.

use tracing::debug;

use minimart_core::money::Money;

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Exchange Rate Seam
// =============================================================================

/// Source of currency exchange rates.
pub trait ExchangeRates {
    /// Current multiplier converting `from` into `to`, if the provider
    /// quotes that pair.
    fn rate(&self, from: &str, to: &str) -> Option<f64>;
}

// =============================================================================
// Price Conversion
// =============================================================================

/// Converts a price from the store's base currency into a target currency.
///
/// ## Errors
/// [`ServiceError::RateUnavailable`] when the provider has no rate for the
/// pair. The price is returned unconverted only when the target IS the
/// base currency.
///
/// ## Example
/// ```rust
/// use minimart_core::money::Money;
/// use minimart_services::currency::{price_in_currency, ExchangeRates};
///
/// struct OneToTen;
/// impl ExchangeRates for OneToTen {
///     fn rate(&self, _from: &str, _to: &str) -> Option<f64> {
///         Some(10.0)
///     }
/// }
///
/// let shown = price_in_currency(&OneToTen, "USD", Money::from_cents(100), "ZAR").unwrap();
/// assert_eq!(shown.cents(), 1000);
/// ```
pub fn price_in_currency<R: ExchangeRates>(
    rates: &R,
    base: &str,
    price: Money,
    target: &str,
) -> ServiceResult<Money> {
    if base == target {
        return Ok(price);
    }

    match rates.rate(base, target) {
        Some(rate) => {
            let converted = price.convert(rate);
            debug!(%price, rate, currency = target, %converted, "converted price");
            Ok(converted)
        }
        None => Err(ServiceError::RateUnavailable {
            from: base.to_string(),
            to: target.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
