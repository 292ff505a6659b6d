//! Feed filtering: the sparse conjunctive filter and the search engine.
//!
//! The engine is a pure function over a request slice. It never reorders,
//! ranks, or mutates its input; a request either passes every active
//! predicate or is excluded.
//!
//! ## Example
//!
//! ```
//! use neighborly::catalog::{Category, HelpRequest, NewHelpRequest};
//! use neighborly::feed::{visible, Filter};
//!
//! let requests = vec![HelpRequest::create(
//!     NewHelpRequest {
//!         title: "Grocery help".to_string(),
//!         description: "Weekly run".to_string(),
//!         category: Category::Errands,
//!         location: "Downtown".to_string(),
//!         ..Default::default()
//!     },
//!     "user-1".to_string(),
//!     "en",
//! )
//! .unwrap()];
//!
//! let hits = visible(&requests, "grocery", &Filter::default());
//! assert_eq!(hits.len(), 1);
//! ```

pub mod engine;
pub mod models;

pub use engine::visible;
pub use models::Filter;
