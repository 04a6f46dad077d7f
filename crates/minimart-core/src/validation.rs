//! # Validation Module
//!
//! Input validation rules for Minimart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system (Rust)                                           │
//! │  ├── A Money is never a string, an age is never a float                │
//! │  └── Whole categories of bad input cannot be constructed              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - Business rule validation                       │
//! │  ├── Lengths, ranges, allowed character sets                           │
//! │  └── Typed ValidationError per failed rule                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Service wrappers                                             │
//! │  └── Collaborator-specific failures (declined charge, bad address)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minimart_core::validation::{validate_registration, can_drive};
//!
//! assert!(validate_registration("daniel", 22).is_ok());
//! assert!(validate_registration("dk", 22).is_err());
//!
//! assert!(can_drive(17, "US").unwrap());
//! assert!(!can_drive(16, "UK").unwrap());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CountryCode;
use crate::{
    MAX_COUPON_CODE_LEN, MAX_DISPLAY_NAME_LEN, MAX_SIGNUP_AGE, MAX_USERNAME_LEN,
    MIN_DISPLAY_NAME_LEN, MIN_SIGNUP_AGE, MIN_USERNAME_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Account Validators
// =============================================================================

/// Validates a username at registration.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 3 and 255 characters
///
/// ## Example
/// ```rust
/// use minimart_core::validation::validate_username;
///
/// assert!(validate_username("daniel").is_ok());
/// assert!(validate_username("dk").is_err());
/// assert!(validate_username("").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: MIN_USERNAME_LEN,
        });
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    Ok(())
}

/// Validates an age at registration.
///
/// ## Rules
/// - Must be at least 18 (accounts place paid orders)
/// - Must be at most 120 (older is treated as a data-entry mistake)
pub fn validate_age(age: i64) -> ValidationResult<()> {
    if !(MIN_SIGNUP_AGE..=MAX_SIGNUP_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_SIGNUP_AGE,
            max: MAX_SIGNUP_AGE,
        });
    }

    Ok(())
}

/// Validates a full registration: username and age together.
///
/// Fails on the first rule violated, in field order.
pub fn validate_registration(username: &str, age: i64) -> ValidationResult<()> {
    validate_username(username)?;
    validate_age(age)?;
    Ok(())
}

/// Checks whether a display name fits on a receipt.
///
/// Display names are printed in a fixed-width slot, so this is a plain
/// yes/no check rather than a field-by-field error.
pub fn is_valid_display_name(name: &str) -> bool {
    let len = name.chars().count();
    (MIN_DISPLAY_NAME_LEN..=MAX_DISPLAY_NAME_LEN).contains(&len)
}

// =============================================================================
// Driving Age
// =============================================================================

/// Checks whether a shopper of the given age may legally drive in the
/// given country.
///
/// ## Rules
/// - The country code must be one of the supported codes (US, UK)
/// - The age must not be negative
/// - US: 16 and over, UK: 17 and over
///
/// ## Example
/// ```rust
/// use minimart_core::validation::can_drive;
///
/// assert!(can_drive(16, "US").unwrap());
/// assert!(!can_drive(16, "UK").unwrap());
/// assert!(can_drive(20, "SA").is_err());
/// ```
pub fn can_drive(age: i64, country_code: &str) -> ValidationResult<bool> {
    let country: CountryCode = country_code.parse()?;

    if age < 0 {
        return Err(ValidationError::MustBePositive {
            field: "age".to_string(),
        });
    }

    Ok(age >= country.minimum_driving_age())
}

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates a coupon or discount code's format.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 30 characters
/// - Must contain only uppercase letters and digits
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "coupon code".to_string(),
        });
    }

    if code.len() > MAX_COUPON_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "coupon code".to_string(),
            max: MAX_COUPON_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidFormat {
            field: "coupon code".to_string(),
            reason: "must contain only uppercase letters and digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a list price.
///
/// ## Rules
/// - Must be strictly positive (free items are not discounted)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount.
///
/// ## Rules
/// - Must be strictly positive; zero or negative charges are rejected
///   before they reach a gateway
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("daniel").is_ok());
        assert!(validate_username("abc").is_ok());

        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("dk").is_err());
        assert!(validate_username(&"a".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(18).is_ok());
        assert!(validate_age(22).is_ok());
        assert!(validate_age(120).is_ok());

        assert!(validate_age(15).is_err());
        assert!(validate_age(17).is_err());
        assert!(validate_age(121).is_err());
        assert!(validate_age(-1).is_err());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("test", 22).is_ok());

        // Username is checked first, then age.
        let err = validate_registration("12", 25).unwrap_err();
        assert!(err.to_string().contains("username"));

        let err = validate_registration("test", 15).unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_is_valid_display_name() {
        assert!(is_valid_display_name("daniel"));
        assert!(is_valid_display_name("daniel mawasha"));

        assert!(!is_valid_display_name("dan"));
        assert!(!is_valid_display_name("a much too long display name"));
    }

    #[test]
    fn test_can_drive_by_country() {
        // (age, country, expected)
        let cases: &[(i64, &str, bool)] = &[
            (15, "US", false),
            (16, "US", true),
            (17, "US", true),
            (16, "UK", false),
            (17, "UK", true),
            (18, "UK", true),
        ];

        for &(age, country, expected) in cases {
            assert_eq!(
                can_drive(age, country).unwrap(),
                expected,
                "age {age} in {country}"
            );
        }
    }

    #[test]
    fn test_can_drive_rejects_unknown_country() {
        let err = can_drive(20, "SA").unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_can_drive_rejects_negative_age() {
        assert!(can_drive(-1, "US").is_err());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("SAVE10").is_ok());
        assert!(validate_coupon_code("DISCOUNT50OFF").is_ok());

        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("save10").is_err());
        assert!(validate_coupon_code("SAVE 10").is_err());
        assert!(validate_coupon_code(&"A".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::from_cents(1000)).is_ok());
        assert!(validate_payment_amount(Money::zero()).is_err());
        assert!(validate_payment_amount(Money::from_cents(-500)).is_err());
    }
}
