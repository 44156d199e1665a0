use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Submitted purchase receipt. Field values are kept exactly as received; scoring parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// 24-hour clock, `HH:MM`.
    pub purchase_time: String,
    /// Decimal currency string such as `35.35`.
    pub total: String,
    pub items: Vec<Item>,
}

/// A single line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Opaque identifier issued when a receipt is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = ReceiptIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|source| ReceiptIdError {
                value: raw.to_string(),
                source,
            })
    }
}

/// Raised when caller supplied text is not shaped like a receipt identifier.
#[derive(Debug, thiserror::Error)]
#[error("'{value}' is not a valid receipt id")]
pub struct ReceiptIdError {
    pub value: String,
    #[source]
    source: uuid::Error,
}
