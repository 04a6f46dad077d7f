//! # Shipping
//!
//! Shipping quotes and the line shown to the shopper at checkout.
//!
//! Carriers quote per destination; a destination no carrier serves is a
//! normal outcome, surfaced as a typed error rather than an empty string.

use serde::{Deserialize, Serialize};
use tracing::warn;

use minimart_core::money::Money;

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Shipping Quote
// =============================================================================

/// A carrier's quote for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// What the carrier charges.
    pub cost: Money,

    /// Door-to-door estimate in days.
    pub estimated_days: u32,
}

// =============================================================================
// Quote Seam
// =============================================================================

/// Source of shipping quotes.
pub trait ShippingQuotes {
    /// Best current quote for the destination, if any carrier serves it.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

// =============================================================================
// Checkout Line
// =============================================================================

/// Produces the shipping line shown at checkout.
///
/// ## Errors
/// [`ServiceError::ShippingUnavailable`] when no carrier serves the
/// destination; the error's description contains "unavailable" so existing
/// till displays can keep matching on it.
///
/// ## Example
/// ```rust
/// use minimart_core::money::Money;
/// use minimart_services::shipping::{shipping_info, ShippingQuote, ShippingQuotes};
///
/// struct FlatRate;
/// impl ShippingQuotes for FlatRate {
///     fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
///         Some(ShippingQuote { cost: Money::from_cents(10_000), estimated_days: 5 })
///     }
/// }
///
/// let line = shipping_info(&FlatRate, "SA").unwrap();
/// assert_eq!(line, "Shipping cost: $100.00 (5 days)");
/// ```
pub fn shipping_info<S: ShippingQuotes>(quotes: &S, destination: &str) -> ServiceResult<String> {
    match quotes.quote(destination) {
        Some(quote) => Ok(format!(
            "Shipping cost: {} ({} days)",
            quote.cost, quote.estimated_days
        )),
        None => {
            warn!(destination, "no carrier quoted shipping");
            Err(ServiceError::ShippingUnavailable {
                destination: destination.to_string(),
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Quote source stand-in with a canned answer.
    struct CannedQuotes(Option<ShippingQuote>);

    impl ShippingQuotes for CannedQuotes {
        fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
            self.0
        }
    }

    #[test]
    fn test_formats_quote_for_checkout() {
        let quotes = CannedQuotes(Some(ShippingQuote {
            cost: Money::from_cents(10_000),
            estimated_days: 5,
        }));

        let line = shipping_info(&quotes, "SA").unwrap();
        assert!(line.to_lowercase().contains("shipping cost"));
        assert!(line.contains("$100.00"));
        assert!(line.contains("5 days"));
    }

    #[test]
    fn test_unserved_destination_is_unavailable() {
        let quotes = CannedQuotes(None);

        let err = shipping_info(&quotes, "SA").unwrap_err();
        assert!(matches!(err, ServiceError::ShippingUnavailable { .. }));
        assert!(err.to_string().to_lowercase().contains("unavailable"));
    }

    #[test]
    fn test_quote_serialization() {
        let quote = ShippingQuote {
            cost: Money::from_cents(100),
            estimated_days: 5,
        };
        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("estimated_days"));

        let back: ShippingQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }
}
