//! Shared test doubles.
//!
//! Manual mock implementations for unit testing. Manual mocks keep the
//! substitution explicit: each stand-in records the calls it receives and
//! returns exactly what the test configured, with no macro magic between
//! the test and the trait.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::email::Mailer;
use crate::error::ServiceResult;

/// Mail transport stand-in recording every delivery.
#[derive(Default)]
pub(crate) struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, body: &str) -> ServiceResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}
