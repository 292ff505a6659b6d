//! Payment facilitation over an external processor.
//!
//! This module implements:
//! - The payment-intent lifecycle (create, confirm, record)
//! - An in-memory payment ledger that also records failed attempts
//! - The payment-method list
//!
//! The facilitator holds no funds and computes no balances; the money
//! movement lives entirely in the injected [`PaymentProcessor`]. Raw card
//! data never touches this crate.
//!
//! ## Example
//!
//! ```
//! use neighborly::payment::{MockProcessor, PaymentManager, PaymentPurpose};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let payments = PaymentManager::new(Arc::new(MockProcessor::new()));
//!
//!     let payment = payments
//!         .process_payment(
//!             Uuid::new_v4(),
//!             25.0,
//!             "payer-1".to_string(),
//!             "helper-1".to_string(),
//!             PaymentPurpose::Service,
//!             "USD",
//!         )
//!         .await?;
//!     println!("paid {} {}", payment.amount, payment.currency);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod processor;

pub use errors::{PaymentError, PaymentResult};
pub use manager::PaymentManager;
pub use models::{
    Cents, Payment, PaymentId, PaymentIntent, PaymentMethod, PaymentMethodKind, PaymentPurpose,
    PaymentStatus,
};
pub use processor::{MockProcessor, PaymentProcessor};
