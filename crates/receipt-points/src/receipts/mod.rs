//! Receipt intake, storage, and reward points scoring.

pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ReceiptIdError};
pub use router::{receipt_router, ProcessReceiptResponse, ReceiptPointsResponse};
pub use scoring::{PointsBreakdown, RuleAward, ScoringError, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::{InMemoryReceiptStore, ReceiptStore};
