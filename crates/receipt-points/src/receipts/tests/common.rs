use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt};
use crate::receipts::service::ReceiptService;
use crate::receipts::store::InMemoryReceiptStore;

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
    }
}

/// A receipt whose only scoring contribution comes from the field under test.
pub(super) fn blank_receipt() -> Receipt {
    Receipt {
        retailer: String::new(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "09:00".to_string(),
        total: "0.01".to_string(),
        items: Vec::new(),
    }
}

pub(super) fn build_service() -> (ReceiptService<InMemoryReceiptStore>, Arc<InMemoryReceiptStore>) {
    let store = Arc::new(InMemoryReceiptStore::new());
    (ReceiptService::new(store.clone()), store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
