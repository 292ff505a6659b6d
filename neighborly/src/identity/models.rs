//! Identity data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User ID type: the identity provider's opaque subject identifier.
pub type UserId = String;

/// Reputation a first-time user starts with.
pub const DEFAULT_RATING: f64 = 5.0;

/// Claims read from the credential's payload segment.
///
/// All fields are optional at the wire level; presence of `sub`, `email`,
/// and `name` is enforced by the session manager.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IdentityClaims {
    pub sub: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub email_verified: Option<bool>,
    pub picture: Option<String>,
}

/// User model
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub verified: bool,
    pub avatar: Option<String>,
    pub rating: f64,
    pub total_helped: u32,
    pub total_requests: u32,
    pub joined_date: DateTime<Utc>,
    pub bio: Option<String>,
    pub preferred_language: String,
    pub payment_customer: Option<String>,
    pub payment_account: Option<String>,
}

/// Partial profile update merged into the current session's user.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
}
