//! Payment data models.

use crate::catalog::RequestId;
use crate::identity::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Payment ID type
pub type PaymentId = Uuid;

/// Integer minor-unit amount the processor consumes.
pub type Cents = i64;

/// What a payment is for
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPurpose {
    Service,
    Donation,
    Tip,
}

impl fmt::Display for PaymentPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentPurpose::Service => write!(f, "service"),
            PaymentPurpose::Donation => write!(f, "donation"),
            PaymentPurpose::Tip => write!(f, "tip"),
        }
    }
}

/// Payment lifecycle status
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// A recorded monetary transfer tied to a request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Payment {
    pub id: PaymentId,
    pub request_id: RequestId,
    pub payer_id: UserId,
    pub receiver_id: UserId,
    pub amount: f64,
    pub currency: String,
    pub purpose: PaymentPurpose,
    pub status: PaymentStatus,
    pub intent: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payment method kind
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Card,
    BankAccount,
}

/// A stored payment-method reference. Only display metadata lives here;
/// the processor owns the underlying instrument.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PaymentMethod {
    pub id: String,
    pub kind: PaymentMethodKind,
    pub last4: String,
    pub brand: Option<String>,
    pub expiry_month: Option<u8>,
    pub expiry_year: Option<u16>,
    pub is_default: bool,
}

/// A client-side confirmation handle issued by the processor.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PaymentIntent {
    pub client_secret: String,
    pub amount_cents: Cents,
    pub currency: String,
    pub description: String,
}
