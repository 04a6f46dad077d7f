//! # Service Error Types
//!
//! Error types for the collaborator wrappers.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Service Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Pricing      │  │    Checkout     │  │      Messaging          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  RateUnavailable│  │  PaymentDeclined│  │  InvalidEmail           │ │
//! │  │  Shipping-      │  │                 │  │  EmailDeliveryFailed    │ │
//! │  │    Unavailable  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Plus conversions: config parsing, JSON export, core validation        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use minimart_core::error::ValidationError;
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error type covering collaborator wrapper failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - Errors are categorized for different handling strategies
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Pricing Errors
    // =========================================================================
    /// The exchange-rate provider has no rate for the requested pair.
    #[error("Exchange rate unavailable for {from} -> {to}")]
    RateUnavailable { from: String, to: String },

    /// No carrier quoted shipping to the destination.
    #[error("Shipping unavailable to {destination}")]
    ShippingUnavailable { destination: String },

    // =========================================================================
    // Checkout Errors
    // =========================================================================
    /// The payment gateway declined the charge.
    #[error("Payment declined: {reason}")]
    PaymentDeclined { reason: String },

    // =========================================================================
    // Messaging Errors
    // =========================================================================
    /// The address does not look like an email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The mail transport accepted the message but could not deliver it.
    #[error("Email delivery failed: {0}")]
    EmailDeliveryFailed(String),

    // =========================================================================
    // Conversions
    // =========================================================================
    /// Store configuration could not be parsed.
    #[error("Failed to parse store config: {0}")]
    ConfigParseFailed(#[from] toml::de::Error),

    /// JSON export failed.
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    /// A core validation rule rejected the input before any collaborator
    /// was contacted.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Unit Tests
// =============================================================================
