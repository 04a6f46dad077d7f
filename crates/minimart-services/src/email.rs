//! # Email
//!
//! Address validation and the welcome mail sent on sign-up.
//!
//! The mail transport is external, so it sits behind the [`Mailer`] trait
//! and tests substitute a recording stand-in.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::error::ServiceResult;

/// Body of the mail every new account receives.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

// =============================================================================
// Address Validation
// =============================================================================

/// Loose email shape: something, an @, something, a dot, something.
/// Deliverability is the transport's problem, not a regex's.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Checks whether an address looks like an email address.
///
/// ## Example
/// ```rust
/// use minimart_services::email::is_valid_email;
///
/// assert!(is_valid_email("dkmawasha@gmail.com"));
/// assert!(!is_valid_email("dd.com"));
/// ```
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

// =============================================================================
// Mailer Seam
// =============================================================================

/// External mail transport.
#[async_trait]
pub trait Mailer {
    /// Delivers `body` to `to`.
    async fn send(&self, to: &str, body: &str) -> ServiceResult<()>;
}

// =============================================================================
// Sign-Up
// =============================================================================

/// Signs a shopper up and sends the welcome mail.
///
/// Returns `Ok(false)` for an address that does not look like an email;
/// nothing is sent in that case. A malformed address at sign-up is an
/// expected user mistake, not a service failure.
///
/// ## Errors
/// Only delivery failures from the mail transport.
pub async fn sign_up<M: Mailer>(mailer: &M, email: &str) -> ServiceResult<bool> {
    if !is_valid_email(email) {
        debug!(email, "rejected sign-up with malformed address");
        return Ok(false);
    }

    mailer.send(email, WELCOME_MESSAGE).await?;
    info!(email, "welcome mail sent");
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================
