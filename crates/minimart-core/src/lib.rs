//! # minimart-core: Pure Business Logic for Minimart
//!
//! This crate is the **heart** of Minimart. It contains all business logic
//! as pure functions and value types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Minimart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 minimart-services (outer layer)                 │   │
//! │  │   currency • shipping • payment • email • otp • analytics      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ minimart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ discounts │  │   stack   │  │ validation│  │   │
//! │  │   │   Money   │  │  Coupon   │  │ Stack<T>  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK READS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (DiscountRate, Coupon, CountryCode, StoreHours)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`stack`] - Generic last-in-first-out container
//! - [`discounts`] - Coupon catalog and discount rules
//! - [`validation`] - Input validation rules
//! - [`kata`] - Warm-up exercises kept alongside the real logic
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use minimart_core::money::Money;
//! use minimart_core::types::DiscountRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Apply a 20% coupon
//! let rate = DiscountRate::from_bps(2000);
//! let discounted = price.apply_discount(rate);
//!
//! // $10.99 minus 20% = $8.79 (rounded)
//! assert_eq!(discounted.cents(), 879);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discounts;
pub mod error;
pub mod kata;
pub mod money;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minimart_core::Money` instead of
// `use minimart_core::money::Money`

pub use error::{CoreError, StackError, ValidationError};
pub use money::Money;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a username accepted at registration.
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum length of a username accepted at registration.
pub const MAX_USERNAME_LEN: usize = 255;

/// Minimum age (in years) required to register an account.
///
/// ## Business Reason
/// Accounts can place paid orders, so registration is limited to adults.
pub const MIN_SIGNUP_AGE: i64 = 18;

/// Upper bound on the age accepted at registration.
///
/// ## Business Reason
/// Values above this are treated as data-entry mistakes (e.g. a year
/// typed into the age field).
pub const MAX_SIGNUP_AGE: i64 = 120;

/// Display names shown on receipts must be between these lengths.
pub const MIN_DISPLAY_NAME_LEN: usize = 5;
/// See [`MIN_DISPLAY_NAME_LEN`].
pub const MAX_DISPLAY_NAME_LEN: usize = 15;

/// Maximum length of a coupon code.
pub const MAX_COUPON_CODE_LEN: usize = 30;
