//! # minimart-services: Collaborator Wrappers for Minimart
//!
//! Thin, typed wrappers around the external services Minimart depends on:
//! exchange rates, shipping quotes, card charging, email delivery, page-view
//! analytics, the wall clock, and the remote catalog.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  The Trait-Seam Pattern                                 │
//! │                                                                         │
//! │   caller ──► wrapper function ──► trait ──► real collaborator          │
//! │                     │                │                                  │
//! │                     │                └──► recording stand-in (tests)   │
//! │                     │                                                   │
//! │              validation, error mapping,                                │
//! │              formatting, logging                                       │
//! │                                                                         │
//! │   The wrapper owns everything testable. The trait impl owns nothing    │
//! │   but the call. Unit tests never touch a real service.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Store configuration (TOML)
//! - [`currency`] - Price conversion through an exchange-rate provider
//! - [`shipping`] - Shipping quotes and availability
//! - [`payment`] - Order submission through a payment gateway
//! - [`email`] - Address validation, welcome mail on sign-up
//! - [`otp`] - One-time login codes
//! - [`analytics`] - Page rendering with view tracking
//! - [`hours`] - Opening hours and holiday discounts against a clock seam
//! - [`catalog`] - Simulated asynchronous catalog fetch
//! - [`error`] - Service error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod email;
pub mod error;
pub mod hours;
pub mod otp;
pub mod payment;
pub mod shipping;

#[cfg(test)]
pub(crate) mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::StoreConfig;
pub use error::{ServiceError, ServiceResult};
