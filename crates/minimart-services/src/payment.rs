//! # Payment
//!
//! Order submission through an external payment gateway.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_order(card, $10.00)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_payment_amount ── reject ──► Validation error,               │
//! │       │                                gateway never contacted         │
//! │       ▼                                                                 │
//! │  gateway.charge(card, amount)   (async, external)                      │
//! │       │                                                                 │
//! │       ├── ChargeOutcome::Failed ──► PaymentDeclined { reason }         │
//! │       │                                                                 │
//! │       └── ChargeOutcome::Success ──► OrderConfirmation { order_id }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use minimart_core::money::Money;
use minimart_core::validation::validate_payment_amount;

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Card Details
// =============================================================================

/// Card details handed to the gateway.
///
/// Never logged in full; use [`CardDetails::masked`] in log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    /// Primary account number as entered.
    pub number: String,
}

impl CardDetails {
    /// Creates card details from a card number.
    pub fn new(number: impl Into<String>) -> Self {
        CardDetails {
            number: number.into(),
        }
    }

    /// Last four digits, for receipts and logs.
    pub fn masked(&self) -> String {
        let last4: String = self
            .number
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{last4}")
    }
}

// =============================================================================
// Gateway Seam
// =============================================================================

/// What the gateway said about a charge attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChargeOutcome {
    /// The charge went through.
    Success {
        /// Gateway-side reference for reconciliation.
        reference: String,
    },
    /// The gateway declined the charge.
    Failed {
        /// Gateway-supplied decline reason.
        reason: String,
    },
}

/// External payment gateway.
///
/// A returned [`ChargeOutcome::Failed`] is a decline: the gateway answered
/// and said no. Transport-level failures are the trait impl's own
/// `ServiceResult` errors.
#[async_trait]
pub trait PaymentGateway {
    /// Attempts to charge the card for the amount.
    async fn charge(&self, card: &CardDetails, amount: Money) -> ServiceResult<ChargeOutcome>;
}

// =============================================================================
// Order Confirmation
// =============================================================================

/// Confirmation returned to the shopper after a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Identifier the shopper can quote in support requests.
    pub order_id: Uuid,

    /// Amount charged.
    pub amount: Money,

    /// Gateway reference for reconciliation.
    pub gateway_reference: String,
}

impl OrderConfirmation {
    /// Serializes the confirmation for receipt export.
    pub fn to_json(&self) -> ServiceResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Order Submission
// =============================================================================

/// Submits an order: validates the amount, charges the card, confirms.
///
/// ## Errors
/// - [`ServiceError::Validation`] for a non-positive amount; the gateway
///   is not contacted
/// - [`ServiceError::PaymentDeclined`] when the gateway refuses the charge
/// - Whatever transport error the gateway implementation raises
pub async fn submit_order<G: PaymentGateway>(
    gateway: &G,
    card: &CardDetails,
    amount: Money,
) -> ServiceResult<OrderConfirmation> {
    validate_payment_amount(amount)?;

    match gateway.charge(card, amount).await? {
        ChargeOutcome::Success { reference } => {
            let confirmation = OrderConfirmation {
                order_id: Uuid::new_v4(),
                amount,
                gateway_reference: reference,
            };
            info!(
                order_id = %confirmation.order_id,
                %amount,
                card = %card.masked(),
                "order placed"
            );
            Ok(confirmation)
        }
        ChargeOutcome::Failed { reason } => {
            warn!(%amount, card = %card.masked(), reason = %reason, "charge declined");
            Err(ServiceError::PaymentDeclined { reason })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Gateway stand-in with a canned outcome, recording every charge.
    struct CannedGateway {
        outcome: ChargeOutcome,
        calls: Mutex<Vec<(String, Money)>>,
    }

    impl CannedGateway {
        fn returning(outcome: ChargeOutcome) -> Self {
            CannedGateway {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PaymentGateway for CannedGateway {
        async fn charge(&self, card: &CardDetails, amount: Money) -> ServiceResult<ChargeOutcome> {
            self.calls
                .lock()
                .unwrap()
                .push((card.number.clone(), amount));
            Ok(self.outcome.clone())
        }
    }

    #[tokio::test]
    async fn test_successful_charge_confirms_order() {
        let gateway = CannedGateway::returning(ChargeOutcome::Success {
            reference: "ch_123".to_string(),
        });
        let card = CardDetails::new("4242424242424242");

        let confirmation = submit_order(&gateway, &card, Money::from_cents(10_000))
            .await
            .unwrap();

        assert_eq!(confirmation.amount, Money::from_cents(10_000));
        assert_eq!(confirmation.gateway_reference, "ch_123");
    }

    #[tokio::test]
    async fn test_declined_charge_fails_order() {
        let gateway = CannedGateway::returning(ChargeOutcome::Failed {
            reason: "payment_error".to_string(),
        });
        let card = CardDetails::new("4242424242424242");

        let err = submit_order(&gateway, &card, Money::from_cents(10_000))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::PaymentDeclined { .. }));
        assert!(err.to_string().contains("payment_error"));
    }

    #[tokio::test]
    async fn test_gateway_receives_card_and_amount() {
        let gateway = CannedGateway::returning(ChargeOutcome::Success {
            reference: "ch_123".to_string(),
        });
        let card = CardDetails::new("12344");

        submit_order(&gateway, &card, Money::from_cents(100))
            .await
            .unwrap();

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[("12344".to_string(), Money::from_cents(100))]);
    }

    #[tokio::test]
    async fn test_invalid_amount_never_reaches_gateway() {
        let gateway = CannedGateway::returning(ChargeOutcome::Success {
            reference: "ch_123".to_string(),
        });
        let card = CardDetails::new("4242424242424242");

        let err = submit_order(&gateway, &card, Money::zero()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(gateway.call_count(), 0);
    }

    #[test]
    fn test_card_masking() {
        assert_eq!(CardDetails::new("4242424242424242").masked(), "****4242");
        assert_eq!(CardDetails::new("123").masked(), "****123");
    }

    #[tokio::test]
    async fn test_confirmation_json_export() {
        let gateway = CannedGateway::returning(ChargeOutcome::Success {
            reference: "ch_123".to_string(),
        });
        let card = CardDetails::new("4242424242424242");

        let confirmation = submit_order(&gateway, &card, Money::from_cents(500))
            .await
            .unwrap();
        let json = confirmation.to_json().unwrap();

        assert!(json.contains("order_id"));
        assert!(json.contains("ch_123"));
    }
}
