use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::domain::{Receipt, ReceiptId};

/// Insert-only keyed collection of submitted receipts shared across request handlers.
pub trait ReceiptStore: Send + Sync {
    /// Stores the receipt under a newly issued identifier that no earlier insert received.
    fn insert(&self, receipt: Receipt) -> ReceiptId;
    /// Returns a copy of the receipt stored under `id`.
    fn fetch(&self, id: &ReceiptId) -> Option<Receipt>;
}

/// Volatile store backed by a lock-guarded map. Contents live until the process exits.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, receipt: Receipt) -> ReceiptId {
        // Entries are written whole under the lock, so a poisoned guard still holds a consistent map.
        let mut guard = self
            .receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            let id = ReceiptId::generate();
            if let Entry::Vacant(slot) = guard.entry(id) {
                slot.insert(receipt);
                return id;
            }
        }
    }

    fn fetch(&self, id: &ReceiptId) -> Option<Receipt> {
        let guard = self
            .receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard.get(id).cloned()
    }
}
