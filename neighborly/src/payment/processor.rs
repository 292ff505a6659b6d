//! Payment processor capability and the mock implementation.

use super::{
    errors::PaymentResult,
    models::{Cents, PaymentIntent},
};
use async_trait::async_trait;
use uuid::Uuid;

/// The external payment processor boundary.
///
/// `create_intent` consumes an integer minor-unit amount, a currency code,
/// and a description, and returns a client-side confirmation handle.
/// `confirm` resolves that handle with a payment method and reports the
/// asynchronous outcome: `Ok(false)` is a decline, `Err` a processor
/// failure.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_intent(
        &self,
        amount_cents: Cents,
        currency: &str,
        description: &str,
    ) -> PaymentResult<PaymentIntent>;

    async fn confirm(&self, client_secret: &str, payment_method: &str) -> PaymentResult<bool>;
}

/// In-process processor stand-in.
///
/// Issues intents unconditionally and approves every confirmation unless
/// built with [`MockProcessor::declining`].
#[derive(Debug, Default)]
pub struct MockProcessor {
    decline_confirmations: bool,
}

impl MockProcessor {
    /// A processor that approves everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor that declines every confirmation. Useful for exercising
    /// the failure path.
    pub fn declining() -> Self {
        Self {
            decline_confirmations: true,
        }
    }
}

#[async_trait]
impl PaymentProcessor for MockProcessor {
    async fn create_intent(
        &self,
        amount_cents: Cents,
        currency: &str,
        description: &str,
    ) -> PaymentResult<PaymentIntent> {
        Ok(PaymentIntent {
            client_secret: format!("pi_{}_secret", Uuid::new_v4().simple()),
            amount_cents,
            currency: currency.to_string(),
            description: description.to_string(),
        })
    }

    async fn confirm(&self, _client_secret: &str, _payment_method: &str) -> PaymentResult<bool> {
        Ok(!self.decline_confirmations)
    }
}
