//! Identity session store: sign-in via an external provider credential.
//!
//! Authentication itself is delegated to the identity provider; this module
//! only decodes the claims segment of the opaque signed credential, builds
//! the local user record, and persists the session. Any provider whose
//! credential carries `sub`, `email`, and `name` claims is interchangeable.
//!
//! ## Example
//!
//! ```no_run
//! use neighborly::identity::SessionManager;
//! use neighborly::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sessions = SessionManager::new(Arc::new(MemoryStore::new()));
//!     let user = sessions.sign_in("<provider credential>").await?;
//!     println!("signed in as {}", user.name);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{IdentityError, IdentityResult};
pub use manager::SessionManager;
pub use models::{IdentityClaims, User, UserId, UserUpdate, DEFAULT_RATING};
