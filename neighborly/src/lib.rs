//! # Neighborly
//!
//! The core of a community "ask for help / offer help" platform: users post
//! requests, browse and filter a feed, view requests on a map, and
//! optionally pay or tip for help.
//!
//! Authentication is delegated to an external identity provider (only the
//! credential's claims are read here), payments to an external processor
//! behind the [`payment::PaymentProcessor`] trait, and translation to a
//! [`locale::Translator`] (mocked). The catalog is process-local and
//! in-memory; only the session and the language preference persist, through
//! the [`storage::KeyValueStore`] capability.
//!
//! ## Core Modules
//!
//! - [`catalog`]: Help-request models and the newest-first in-memory catalog
//! - [`feed`]: The pure filter/search engine over the catalog
//! - [`identity`]: Provider-credential sign-in and the persisted session
//! - [`payment`]: Payment-intent lifecycle and the in-memory ledger
//! - [`locale`]: Display language and the mocked translation lookup
//! - [`storage`]: Local durable key-value persistence
//! - [`app`]: The application controller tying the managers together,
//!   with view routing, its access gate, and the derived feed state
//!
//! ## Example
//!
//! ```
//! use neighborly::App;
//! use neighborly::catalog::RequestCatalog;
//! use neighborly::identity::SessionManager;
//! use neighborly::locale::{LocaleManager, MockTranslator};
//! use neighborly::payment::{MockProcessor, PaymentManager};
//! use neighborly::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(MemoryStore::new());
//!     let app = App::new(
//!         SessionManager::new(store.clone()),
//!         RequestCatalog::seeded(),
//!         PaymentManager::new(Arc::new(MockProcessor::new())),
//!         LocaleManager::new(store, Arc::new(MockTranslator::new())),
//!     );
//!
//!     app.set_search_term("grocery").await;
//!     let feed = app.visible_requests().await;
//!     assert!(!feed.is_empty());
//! }
//! ```

/// The application controller: view routing, access gating, derived state.
pub mod app;
pub use app::{App, AppError, AppResult, MapMarker, Navigation, View};

/// Help-request models and the in-memory catalog.
pub mod catalog;
pub use catalog::{Category, HelpRequest, NewHelpRequest, RequestCatalog};

/// The feed filter/search engine.
pub mod feed;
pub use feed::{visible, Filter};

/// Identity session store over an external provider credential.
pub mod identity;
pub use identity::{SessionManager, User};

/// Display language and translation lookup.
pub mod locale;
pub use locale::LocaleManager;

/// Payment facilitation over an external processor.
pub mod payment;
pub use payment::PaymentManager;

/// Local durable key-value persistence for client state.
pub mod storage;
