//! # One-Time Login Codes
//!
//! Password-less login: a short-lived numeric code mailed to the account
//! address.
//!
//! Code generation sits behind [`CodeIssuer`] so tests pin the code instead
//! of fishing it back out of a random number generator.

use rand::Rng;
use tracing::info;

use crate::email::{is_valid_email, Mailer};
use crate::error::{ServiceError, ServiceResult};

/// Login codes are four digits: `0000` through `9999`.
pub const LOGIN_CODE_SPAN: u32 = 10_000;

// =============================================================================
// Code Issuer Seam
// =============================================================================

/// Source of one-time login codes.
pub trait CodeIssuer {
    /// Issues a fresh code below [`LOGIN_CODE_SPAN`].
    fn issue(&self) -> u32;
}

/// Production issuer drawing from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeIssuer;

impl CodeIssuer for RandomCodeIssuer {
    fn issue(&self) -> u32 {
        rand::thread_rng().gen_range(0..LOGIN_CODE_SPAN)
    }
}

// =============================================================================
// Login
// =============================================================================

/// Issues a login code and mails it to the account address.
///
/// The mailed body is the zero-padded four-digit code, nothing else.
/// Returns the code so the caller can store its hash for verification.
///
/// ## Errors
/// - [`ServiceError::InvalidEmail`] for an address that does not look like
///   an email; no code is issued
/// - Delivery failures from the mail transport
pub async fn send_login_code<M: Mailer, C: CodeIssuer>(
    mailer: &M,
    issuer: &C,
    email: &str,
) -> ServiceResult<u32> {
    if !is_valid_email(email) {
        return Err(ServiceError::InvalidEmail(email.to_string()));
    }

    let code = issuer.issue();
    mailer.send(email, &format!("{code:04}")).await?;

    // The code itself stays out of the logs.
    info!(email, "login code mailed");
    Ok(code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingMailer;

    /// Issuer stand-in handing out a pinned code.
    struct FixedIssuer(u32);

    impl CodeIssuer for FixedIssuer {
        fn issue(&self) -> u32 {
            self.0
        }
    }

    #[tokio::test]
    async fn test_mails_the_issued_code() {
        let mailer = RecordingMailer::default();

        let code = send_login_code(&mailer, &FixedIssuer(1234), "dkmawasha@gmail.com")
            .await
            .unwrap();

        assert_eq!(code, 1234);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), &[(
            "dkmawasha@gmail.com".to_string(),
            "1234".to_string()
        )]);
    }

    #[tokio::test]
    async fn test_short_codes_are_zero_padded() {
        let mailer = RecordingMailer::default();

        send_login_code(&mailer, &FixedIssuer(7), "a@b.co")
            .await
            .unwrap();

        assert_eq!(mailer.sent.lock().unwrap()[0].1, "0007");
    }

    #[tokio::test]
    async fn test_invalid_address_gets_no_code() {
        let mailer = RecordingMailer::default();

        let err = send_login_code(&mailer, &FixedIssuer(1234), "dd.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidEmail(_)));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_random_issuer_stays_in_span() {
        let issuer = RandomCodeIssuer;
        for _ in 0..100 {
            assert!(issuer.issue() < LOGIN_CODE_SPAN);
        }
    }
}
