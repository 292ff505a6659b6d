//! Payment manager implementation.

use super::{
    errors::{PaymentError, PaymentResult},
    models::{
        Cents, Payment, PaymentIntent, PaymentMethod, PaymentMethodKind, PaymentPurpose,
        PaymentStatus,
    },
    processor::PaymentProcessor,
};
use crate::catalog::RequestId;
use crate::identity::UserId;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Payment manager
///
/// Thin orchestration over the external processor: creates intents,
/// confirms them, and records the outcome in an in-memory ledger. Failed
/// attempts are recorded too, with status `failed`. Session and catalog
/// state are never touched by a payment.
#[derive(Clone)]
pub struct PaymentManager {
    processor: Arc<dyn PaymentProcessor>,
    payments: Arc<RwLock<Vec<Payment>>>,
    methods: Arc<RwLock<Vec<PaymentMethod>>>,
}

impl PaymentManager {
    /// Create a payment manager over the given processor.
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self {
            processor,
            payments: Arc::new(RwLock::new(Vec::new())),
            methods: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a payment intent with the processor.
    ///
    /// The decimal amount is converted to integer minor units; the
    /// processor never sees floating point.
    ///
    /// # Errors
    ///
    /// * `PaymentError::InvalidAmount` - `amount` is not positive
    /// * `PaymentError::Rejected` - the processor refused the intent
    pub async fn create_payment_intent(
        &self,
        amount: f64,
        currency: &str,
        description: &str,
    ) -> PaymentResult<PaymentIntent> {
        let cents = to_cents(amount)?;
        self.processor
            .create_intent(cents, currency, description)
            .await
    }

    /// Resolve an intent with a payment method. `Ok(false)` is a decline.
    pub async fn confirm_payment(
        &self,
        client_secret: &str,
        payment_method: &str,
    ) -> PaymentResult<bool> {
        self.processor.confirm(client_secret, payment_method).await
    }

    /// Attach a payment-method reference.
    ///
    /// The first method attached becomes the default. Instrument details
    /// stay with the processor; only display metadata is kept here.
    pub async fn add_payment_method(&self, method_id: &str) -> PaymentMethod {
        let mut methods = self.methods.write().await;
        let method = PaymentMethod {
            id: method_id.to_string(),
            kind: PaymentMethodKind::Card,
            last4: "4242".to_string(),
            brand: Some("visa".to_string()),
            expiry_month: Some(12),
            expiry_year: Some(2030),
            is_default: methods.is_empty(),
        };
        methods.push(method.clone());
        method
    }

    /// The attached payment methods.
    pub async fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.methods.read().await.clone()
    }

    /// Run the full payment flow for a request: intent, confirmation,
    /// ledger record.
    ///
    /// # Arguments
    ///
    /// * `request_id` - The request being paid for
    /// * `amount` - Decimal amount, must be positive
    /// * `payer_id` / `receiver_id` - The two parties
    /// * `purpose` - Why money is moving
    /// * `currency` - Currency code
    ///
    /// # Errors
    ///
    /// * `PaymentError::InvalidAmount` - `amount` is not positive
    /// * `PaymentError::Rejected` - the processor declined; the attempt is
    ///   still recorded in the ledger with status `failed`
    pub async fn process_payment(
        &self,
        request_id: RequestId,
        amount: f64,
        payer_id: UserId,
        receiver_id: UserId,
        purpose: PaymentPurpose,
        currency: &str,
    ) -> PaymentResult<Payment> {
        let cents = to_cents(amount)?;
        let description = format!("{purpose} payment for request {request_id}");

        let intent = match self
            .processor
            .create_intent(cents, currency, &description)
            .await
        {
            Ok(intent) => intent,
            Err(e) => {
                warn!("payment intent creation failed for request {request_id}: {e}");
                self.record(
                    request_id,
                    amount,
                    payer_id,
                    receiver_id,
                    purpose,
                    currency,
                    None,
                    &description,
                    PaymentStatus::Failed,
                )
                .await;
                return Err(e);
            }
        };

        let method = self.default_method_id().await;
        let confirmed = match self.processor.confirm(&intent.client_secret, &method).await {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!("payment confirmation failed for request {request_id}: {e}");
                self.record(
                    request_id,
                    amount,
                    payer_id,
                    receiver_id,
                    purpose,
                    currency,
                    Some(intent.client_secret),
                    &description,
                    PaymentStatus::Failed,
                )
                .await;
                return Err(e);
            }
        };

        if !confirmed {
            self.record(
                request_id,
                amount,
                payer_id,
                receiver_id,
                purpose,
                currency,
                Some(intent.client_secret),
                &description,
                PaymentStatus::Failed,
            )
            .await;
            return Err(PaymentError::Rejected(
                "the payment was declined".to_string(),
            ));
        }

        let payment = self
            .record(
                request_id,
                amount,
                payer_id,
                receiver_id,
                purpose,
                currency,
                Some(intent.client_secret),
                &description,
                PaymentStatus::Completed,
            )
            .await;
        info!(
            "payment {} completed: {} {} for request {request_id}",
            payment.id, payment.amount, payment.currency
        );

        Ok(payment)
    }

    /// Payments recorded for a request, oldest first.
    pub async fn payments_for_request(&self, request_id: RequestId) -> Vec<Payment> {
        self.payments
            .read()
            .await
            .iter()
            .filter(|payment| payment.request_id == request_id)
            .cloned()
            .collect()
    }

    /// The most recent `limit` ledger entries, newest first.
    pub async fn history(&self, limit: usize) -> Vec<Payment> {
        self.payments
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    async fn default_method_id(&self) -> String {
        self.methods
            .read()
            .await
            .iter()
            .find(|method| method.is_default)
            .map(|method| method.id.clone())
            .unwrap_or_else(|| "pm_default".to_string())
    }

    #[allow(clippy::too_many_arguments)]
    async fn record(
        &self,
        request_id: RequestId,
        amount: f64,
        payer_id: UserId,
        receiver_id: UserId,
        purpose: PaymentPurpose,
        currency: &str,
        intent: Option<String>,
        description: &str,
        status: PaymentStatus,
    ) -> Payment {
        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4(),
            request_id,
            payer_id,
            receiver_id,
            amount,
            currency: currency.to_string(),
            purpose,
            status,
            intent,
            description: description.to_string(),
            created_at: now,
            completed_at: (status == PaymentStatus::Completed).then_some(now),
        };
        self.payments.write().await.push(payment.clone());
        payment
    }
}

fn to_cents(amount: f64) -> PaymentResult<Cents> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PaymentError::InvalidAmount(amount));
    }
    Ok((amount * 100.0).round() as Cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::processor::MockProcessor;

    fn manager() -> PaymentManager {
        PaymentManager::new(Arc::new(MockProcessor::new()))
    }

    #[tokio::test]
    async fn process_payment_records_completed_entry() {
        let payments = manager();
        let request_id = Uuid::new_v4();

        let payment = payments
            .process_payment(
                request_id,
                25.0,
                "payer".to_string(),
                "helper".to_string(),
                PaymentPurpose::Service,
                "USD",
            )
            .await
            .unwrap();

        assert_eq!(payment.status, PaymentStatus::Completed);
        assert!(payment.completed_at.is_some());
        assert!(payment.intent.is_some());

        let recorded = payments.payments_for_request(request_id).await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].amount, 25.0);
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected_without_a_ledger_entry() {
        let payments = manager();
        let request_id = Uuid::new_v4();

        for amount in [0.0, -3.5, f64::NAN] {
            let err = payments
                .process_payment(
                    request_id,
                    amount,
                    "payer".to_string(),
                    "helper".to_string(),
                    PaymentPurpose::Tip,
                    "USD",
                )
                .await
                .unwrap_err();
            assert!(matches!(err, PaymentError::InvalidAmount(_)));
        }

        assert!(payments.payments_for_request(request_id).await.is_empty());
    }

    #[tokio::test]
    async fn declined_payment_is_surfaced_and_recorded_as_failed() {
        let payments = PaymentManager::new(Arc::new(MockProcessor::declining()));
        let request_id = Uuid::new_v4();

        let err = payments
            .process_payment(
                request_id,
                10.0,
                "payer".to_string(),
                "helper".to_string(),
                PaymentPurpose::Donation,
                "USD",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Rejected(_)));

        let recorded = payments.payments_for_request(request_id).await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].status, PaymentStatus::Failed);
        assert!(recorded[0].completed_at.is_none());
    }

    #[tokio::test]
    async fn intent_amounts_are_integer_cents() {
        let payments = manager();
        let intent = payments
            .create_payment_intent(19.99, "USD", "tutoring session")
            .await
            .unwrap();
        assert_eq!(intent.amount_cents, 1999);
        assert_eq!(intent.currency, "USD");
    }

    #[tokio::test]
    async fn first_payment_method_becomes_default() {
        let payments = manager();
        let first = payments.add_payment_method("pm_alpha").await;
        let second = payments.add_payment_method("pm_beta").await;

        assert!(first.is_default);
        assert!(!second.is_default);
        assert_eq!(payments.payment_methods().await.len(), 2);
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let payments = manager();
        for amount in [1.0, 2.0, 3.0] {
            payments
                .process_payment(
                    Uuid::new_v4(),
                    amount,
                    "payer".to_string(),
                    "helper".to_string(),
                    PaymentPurpose::Tip,
                    "USD",
                )
                .await
                .unwrap();
        }

        let history = payments.history(2).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].amount, 3.0);
        assert_eq!(history[1].amount, 2.0);
    }
}
