//! Contact delivery - the transport the form hands validated details to

use std::future::Future;

use thiserror::Error;

use super::form::ContactDetails;

/// How long the simulated relay pretends to take, in milliseconds
pub const SIMULATED_DELAY_MS: u32 = 1_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Message could not be sent: {0}")]
    Rejected(String),
}

/// Something that can deliver a contact request, e.g. an email relay
pub trait ContactTransport {
    fn submit(&self, details: &ContactDetails) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in relay: re-checks the details, waits, then reports success.
/// Nothing leaves the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn submit(&self, details: &ContactDetails) -> Result<(), SubmitError> {
        if details.validate().is_err() {
            return Err(SubmitError::Rejected("incomplete contact details".into()));
        }
        log::info!(
            "simulating contact delivery for {} ({} chars)",
            details.email,
            details.message.trim().chars().count()
        );
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}
