//! Help-request catalog: domain models and the in-memory collection.
//!
//! This module implements:
//! - The `HelpRequest` model and its validated constructor
//! - Category, urgency, status, and payment-term enums
//! - The newest-first in-memory catalog (`add`, `list`, `list_by_owner`)
//! - Static sample data the feed is seeded with
//!
//! ## Example
//!
//! ```
//! use neighborly::catalog::{Category, HelpRequest, NewHelpRequest, RequestCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = RequestCatalog::new();
//!
//!     let request = HelpRequest::create(
//!         NewHelpRequest {
//!             title: "Grocery run for my neighbor".to_string(),
//!             description: "Weekly shop, two bags at most.".to_string(),
//!             category: Category::Errands,
//!             location: "Maple Street".to_string(),
//!             ..Default::default()
//!         },
//!         "user-1".to_string(),
//!         "en",
//!     )?;
//!
//!     catalog.add(request).await;
//!     assert_eq!(catalog.len().await, 1);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod seed;

pub use errors::{CatalogError, CatalogResult};
pub use manager::RequestCatalog;
pub use models::{
    Category, GeoPoint, HelpOffer, HelpRequest, NewHelpRequest, OfferId, OfferStatus, PaymentType,
    RequestId, RequestStatus, Urgency, MAX_DESCRIPTION_CHARS,
};
