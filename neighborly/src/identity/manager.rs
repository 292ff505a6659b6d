//! Session manager implementation.

use super::{
    errors::{IdentityError, IdentityResult},
    models::{IdentityClaims, User, UserUpdate, DEFAULT_RATING},
};
use crate::storage::{KeyValueStore, StorageError, SESSION_KEY};
use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session manager
///
/// Holds the signed-in user, if any, and persists it to the backing store
/// under [`SESSION_KEY`]. At construction any persisted session is restored;
/// malformed stored data is treated as no session and the corrupt entry is
/// discarded.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    session: Arc<RwLock<Option<User>>>,
}

impl SessionManager {
    /// Create a session manager over the given store, restoring any
    /// persisted session.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let restored = load_persisted(store.as_ref());
        if let Some(user) = &restored {
            info!("restored session for {}", user.name);
        }
        Self {
            store,
            session: Arc::new(RwLock::new(restored)),
        }
    }

    /// Sign in with an identity provider credential.
    ///
    /// Decodes the credential's claims segment and requires the `sub`,
    /// `email`, and `name` claims. On success the session is persisted and
    /// the user returned; first-time users start with the default
    /// reputation (rating 5.0, nothing helped yet). On failure any prior
    /// session is left untouched.
    ///
    /// # Errors
    ///
    /// * `IdentityError::MalformedCredential` - not a decodable token
    /// * `IdentityError::MissingClaim` - `sub`, `email`, or `name` absent
    /// * `IdentityError::Storage` - the session could not be persisted
    pub async fn sign_in(&self, credential: &str) -> IdentityResult<User> {
        let claims = decode_claims(credential)?;

        let id = require_claim(claims.sub, "sub")?;
        let email = require_claim(claims.email, "email")?;
        let name = require_claim(claims.name, "name")?;

        let user = User {
            id,
            name,
            email,
            // Set during onboarding
            address: String::new(),
            verified: claims.email_verified.unwrap_or(false),
            avatar: claims.picture,
            rating: DEFAULT_RATING,
            total_helped: 0,
            total_requests: 0,
            joined_date: Utc::now(),
            bio: None,
            preferred_language: "en".to_string(),
            payment_customer: None,
            payment_account: None,
        };

        self.persist(&user)?;
        *self.session.write().await = Some(user.clone());
        info!("user signed in: {}", user.name);

        Ok(user)
    }

    /// Clear the session. Idempotent: signing out twice is fine.
    pub async fn sign_out(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!("failed to clear persisted session: {e}");
        }
        *self.session.write().await = None;
        info!("user signed out");
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.clone()
    }

    /// Whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Merge a partial profile update into the current session's user.
    ///
    /// Returns the updated user, or `None` when no session exists (the
    /// update is a no-op in that case).
    pub async fn update_user(&self, update: UserUpdate) -> IdentityResult<Option<User>> {
        let mut session = self.session.write().await;
        let Some(user) = session.as_mut() else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(address) = update.address {
            user.address = address;
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(language) = update.preferred_language {
            user.preferred_language = language;
        }

        let user = user.clone();
        drop(session);

        self.persist(&user)?;
        Ok(Some(user))
    }

    fn persist(&self, user: &User) -> IdentityResult<()> {
        let raw = serde_json::to_string(user).map_err(StorageError::from)?;
        self.store.set(SESSION_KEY, &raw)?;
        Ok(())
    }
}

/// Decode the credential's claims segment without verifying the signature.
///
/// Signature verification belongs to the identity provider's own widget;
/// this side only needs the claims. Malformed tokens of any kind collapse
/// into a single malformed-credential error.
fn decode_claims(credential: &str) -> IdentityResult<IdentityClaims> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<IdentityClaims>(credential, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|_| IdentityError::MalformedCredential)
}

fn require_claim(value: Option<String>, claim: &'static str) -> IdentityResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(IdentityError::MissingClaim(claim))
}

fn load_persisted(store: &dyn KeyValueStore) -> Option<User> {
    match store.get(SESSION_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("discarding malformed persisted session: {e}");
                if let Err(e) = store.remove(SESSION_KEY) {
                    warn!("failed to discard persisted session: {e}");
                }
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("session storage unavailable: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    /// Mint a credential the way the provider would, signature included.
    /// The signing key is irrelevant: only the claims segment is read.
    fn credential(claims: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-key"),
        )
        .expect("test credential encodes")
    }

    fn full_claims() -> serde_json::Value {
        json!({
            "sub": "provider-user-1",
            "email": "ana@example.com",
            "name": "Ana",
            "email_verified": true,
            "picture": "https://example.com/ana.png",
        })
    }

    #[tokio::test]
    async fn sign_in_builds_user_from_claims() {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));

        let user = sessions.sign_in(&credential(full_claims())).await.unwrap();

        assert_eq!(user.id, "provider-user-1");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.name, "Ana");
        assert!(user.verified);
        assert_eq!(user.avatar.as_deref(), Some("https://example.com/ana.png"));
        assert_eq!(user.rating, DEFAULT_RATING);
        assert_eq!(user.total_helped, 0);
        assert!(sessions.is_authenticated().await);
    }

    #[tokio::test]
    async fn sign_in_rejects_garbage_credentials() {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));

        for bad in ["", "not-a-token", "a.b", "a.b.c.d"] {
            let err = sessions.sign_in(bad).await.unwrap_err();
            assert!(matches!(err, IdentityError::MalformedCredential), "{bad}");
        }
        assert!(!sessions.is_authenticated().await);
    }

    #[tokio::test]
    async fn sign_in_missing_email_leaves_prior_session_untouched() {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
        sessions.sign_in(&credential(full_claims())).await.unwrap();

        let incomplete = credential(json!({"sub": "other", "name": "Nameless"}));
        let err = sessions.sign_in(&incomplete).await.unwrap_err();
        assert!(matches!(err, IdentityError::MissingClaim("email")));

        let current = sessions.current_user().await.unwrap();
        assert_eq!(current.id, "provider-user-1");
    }

    #[tokio::test]
    async fn sign_out_then_sign_in_uses_subject_claim() {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
        sessions.sign_in(&credential(full_claims())).await.unwrap();

        sessions.sign_out().await;
        assert!(!sessions.is_authenticated().await);
        // Idempotent
        sessions.sign_out().await;

        let user = sessions.sign_in(&credential(full_claims())).await.unwrap();
        assert_eq!(user.id, "provider-user-1");
    }

    #[tokio::test]
    async fn session_survives_manager_restart() {
        let store = Arc::new(MemoryStore::new());

        let sessions = SessionManager::new(store.clone());
        sessions.sign_in(&credential(full_claims())).await.unwrap();

        let restarted = SessionManager::new(store);
        let user = restarted.current_user().await.unwrap();
        assert_eq!(user.id, "provider-user-1");
    }

    #[tokio::test]
    async fn malformed_persisted_session_degrades_to_none() {
        let store = Arc::new(MemoryStore::new());
        store.set(SESSION_KEY, "{ definitely not a user").unwrap();

        let sessions = SessionManager::new(store.clone());
        assert!(!sessions.is_authenticated().await);
        // The corrupt entry was discarded
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn update_user_merges_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionManager::new(store.clone());
        sessions.sign_in(&credential(full_claims())).await.unwrap();

        let updated = sessions
            .update_user(UserUpdate {
                address: Some("12 Maple St".to_string()),
                bio: Some("Happy to help".to_string()),
                ..Default::default()
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.address, "12 Maple St");
        assert_eq!(updated.bio.as_deref(), Some("Happy to help"));
        // Untouched fields keep their values
        assert_eq!(updated.name, "Ana");

        let restarted = SessionManager::new(store);
        assert_eq!(
            restarted.current_user().await.unwrap().address,
            "12 Maple St"
        );
    }

    #[tokio::test]
    async fn update_user_without_session_is_a_no_op() {
        let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
        let result = sessions
            .update_user(UserUpdate {
                name: Some("Ghost".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
