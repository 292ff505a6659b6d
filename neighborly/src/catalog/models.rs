//! Help-request data models.

use super::errors::{CatalogError, CatalogResult};
use crate::identity::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Request ID type
pub type RequestId = Uuid;

/// Offer ID type
pub type OfferId = Uuid;

/// Maximum request description length, by policy.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Request category
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Education,
    Errands,
    Donations,
    Skills,
    ElderCare,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Education => write!(f, "education"),
            Category::Errands => write!(f, "errands"),
            Category::Donations => write!(f, "donations"),
            Category::Skills => write!(f, "skills"),
            Category::ElderCare => write!(f, "elder-care"),
        }
    }
}

/// Request urgency
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
        }
    }
}

/// Request lifecycle status
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Open => write!(f, "open"),
            RequestStatus::InProgress => write!(f, "in-progress"),
            RequestStatus::Completed => write!(f, "completed"),
            RequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Payment terms attached to a request
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Free,
    Paid,
    Donation,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Free => write!(f, "free"),
            PaymentType::Paid => write!(f, "paid"),
            PaymentType::Donation => write!(f, "donation"),
        }
    }
}

/// Offer status
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Declined,
}

/// A geographic coordinate pair for map display.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A helper's proposal to fulfill a request.
///
/// Offers are carried on the request as data only; the creation and
/// acceptance workflow lives outside this crate.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HelpOffer {
    pub id: OfferId,
    pub request_id: RequestId,
    pub helper_id: UserId,
    pub message: String,
    pub proposed_amount: Option<f64>,
    pub currency: Option<String>,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

/// A community ask for assistance, owned by its author.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HelpRequest {
    pub id: RequestId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub urgency: Urgency,
    pub location: String,
    pub coordinates: Option<GeoPoint>,
    pub requester_id: UserId,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub offers: Vec<HelpOffer>,
    pub accepted_offer: Option<OfferId>,
    pub payment_type: PaymentType,
    pub suggested_amount: Option<f64>,
    pub currency: Option<String>,
    pub original_language: String,
}

/// Caller-supplied fields for a new request, validated by
/// [`HelpRequest::create`].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NewHelpRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub urgency: Urgency,
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub suggested_amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Default for Category {
    fn default() -> Self {
        Category::Errands
    }
}

impl HelpRequest {
    /// Build a request from caller-supplied fields, rejecting incomplete or
    /// inconsistent input at the boundary.
    ///
    /// # Arguments
    ///
    /// * `new` - The submitted form fields
    /// * `requester_id` - The authoring user
    /// * `original_language` - Language the request was authored in
    ///
    /// # Errors
    ///
    /// * `CatalogError::EmptyTitle` / `EmptyDescription` / `EmptyLocation`
    /// * `CatalogError::DescriptionTooLong` - over [`MAX_DESCRIPTION_CHARS`]
    /// * `CatalogError::MissingAmount` - paid request without an amount
    /// * `CatalogError::InvalidAmount` - non-positive amount on a paid or
    ///   donation request
    pub fn create(
        new: NewHelpRequest,
        requester_id: UserId,
        original_language: impl Into<String>,
    ) -> CatalogResult<Self> {
        let title = new.title.trim().to_string();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        let description = new.description.trim().to_string();
        if description.is_empty() {
            return Err(CatalogError::EmptyDescription);
        }
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            return Err(CatalogError::DescriptionTooLong {
                len,
                max: MAX_DESCRIPTION_CHARS,
            });
        }

        let location = new.location.trim().to_string();
        if location.is_empty() {
            return Err(CatalogError::EmptyLocation);
        }

        // A free request carries no amount; paid requires a positive one,
        // and a donation amount is optional but must be positive if given.
        let (suggested_amount, currency) = match new.payment_type {
            PaymentType::Free => (None, None),
            PaymentType::Paid => {
                let amount = new.suggested_amount.ok_or(CatalogError::MissingAmount {
                    payment_type: PaymentType::Paid,
                })?;
                if amount <= 0.0 {
                    return Err(CatalogError::InvalidAmount(amount));
                }
                (
                    Some(amount),
                    Some(new.currency.unwrap_or_else(|| "USD".to_string())),
                )
            }
            PaymentType::Donation => match new.suggested_amount {
                Some(amount) if amount <= 0.0 => {
                    return Err(CatalogError::InvalidAmount(amount));
                }
                Some(amount) => (
                    Some(amount),
                    Some(new.currency.unwrap_or_else(|| "USD".to_string())),
                ),
                None => (None, None),
            },
        };

        Ok(HelpRequest {
            id: Uuid::new_v4(),
            title,
            description,
            category: new.category,
            urgency: new.urgency,
            location,
            coordinates: new.coordinates,
            requester_id,
            status: RequestStatus::Open,
            created_at: Utc::now(),
            completed_at: None,
            offers: Vec::new(),
            accepted_offer: None,
            payment_type: new.payment_type,
            suggested_amount,
            currency,
            original_language: original_language.into(),
        })
    }
}
