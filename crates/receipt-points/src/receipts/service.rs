use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Receipt, ReceiptId, ReceiptIdError};
use super::scoring::{self, PointsBreakdown, ScoringError};
use super::store::ReceiptStore;

/// Core operations handed to the HTTP gateway: store a receipt, score a stored receipt.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

impl<S> Clone for ReceiptService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ReceiptService<S>
where
    S: ReceiptStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stores the receipt and returns its newly issued identifier.
    pub fn submit(&self, receipt: Receipt) -> ReceiptId {
        let item_count = receipt.items.len();
        let id = self.store.insert(receipt);
        info!(receipt_id = %id, item_count, "receipt stored");
        id
    }

    /// Looks up a receipt by caller supplied identifier text.
    pub fn receipt(&self, raw_id: &str) -> Result<Receipt, ReceiptServiceError> {
        let id = raw_id.parse::<ReceiptId>().map_err(|err: ReceiptIdError| {
            warn!(error = %err, "rejected malformed receipt id");
            ReceiptServiceError::InvalidId(err)
        })?;

        self.store.fetch(&id).ok_or_else(|| {
            warn!(receipt_id = %id, "receipt not found");
            ReceiptServiceError::NotFound(id)
        })
    }

    /// Per-rule awards for a stored receipt.
    pub fn breakdown(&self, raw_id: &str) -> Result<PointsBreakdown, ReceiptServiceError> {
        // The store lock is released before scoring; `receipt` is a private copy.
        let receipt = self.receipt(raw_id)?;

        let breakdown = scoring::breakdown(&receipt).map_err(|err| {
            warn!(receipt_id = raw_id, error = %err, "receipt could not be scored");
            ReceiptServiceError::Scoring(err)
        })?;

        for award in &breakdown.awards {
            debug!(
                receipt_id = raw_id,
                rule = award.rule.label(),
                points = award.points,
                note = %award.note,
                "rule award"
            );
        }
        Ok(breakdown)
    }

    /// Total reward points for a stored receipt.
    pub fn points(&self, raw_id: &str) -> Result<u64, ReceiptServiceError> {
        let points = self.breakdown(raw_id)?.total();
        info!(receipt_id = raw_id, points, "points computed");
        Ok(points)
    }
}

/// Failure modes of a points lookup. All of them are caused by the request's data.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    InvalidId(ReceiptIdError),
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
    #[error("receipt cannot be scored: {0}")]
    Scoring(#[from] ScoringError),
}
