//! End-to-end behavior of receipt intake and scoring through the public service and router.

use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use receipt_points::receipts::{
    receipt_router, scoring, InMemoryReceiptStore, Item, ProcessReceiptResponse, Receipt,
    ReceiptId, ReceiptPointsResponse, ReceiptService, ReceiptServiceError,
};
use tower::ServiceExt;

fn receipt(retailer: &str, date: &str, time: &str, total: &str, items: &[(&str, &str)]) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        total: total.to_string(),
        items: items
            .iter()
            .map(|(description, price)| Item {
                short_description: description.to_string(),
                price: price.to_string(),
            })
            .collect(),
    }
}

fn target() -> Receipt {
    receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        &[
            ("Mountain Dew 12PK", "6.49"),
            ("Emils Cheese Pizza", "12.25"),
            ("Knorr Creamy Chicken", "1.26"),
            ("Doritos Nacho Cheese", "3.35"),
            ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    )
}

fn service() -> ReceiptService<InMemoryReceiptStore> {
    ReceiptService::new(Arc::new(InMemoryReceiptStore::new()))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body")
        .to_vec()
}

#[test]
fn scores_reference_receipts() {
    assert_eq!(scoring::score(&target()), Ok(28));

    let gatorade = ("Gatorade", "2.25");
    let market = receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "9.00",
        &[gatorade, gatorade, gatorade, gatorade],
    );
    assert_eq!(scoring::score(&market), Ok(109));
}

#[test]
fn many_submissions_get_distinct_ids_and_keep_their_receipts() {
    let service = service();
    let submitted: Vec<(ReceiptId, Receipt)> = (0..100)
        .map(|index| {
            let receipt = receipt(
                &format!("Shop {index}"),
                "2022-01-01",
                "15:00",
                "1.00",
                &[("Gum", "1.00")],
            );
            (service.submit(receipt.clone()), receipt)
        })
        .collect();

    let ids: HashSet<ReceiptId> = submitted.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), submitted.len());

    for (id, original) in &submitted {
        let stored = service.receipt(&id.to_string()).expect("stored");
        assert_eq!(&stored, original);
        assert_eq!(
            service.points(&id.to_string()).expect("scores"),
            scoring::score(original).expect("scores directly")
        );
    }
}

#[test]
fn never_issued_id_is_not_found() {
    let service = service();
    service.submit(target());
    let err = service
        .points("7fb1377b-b223-49d9-a31a-5a02701dd310")
        .expect_err("never issued");
    assert!(matches!(err, ReceiptServiceError::NotFound(_)));
}

#[tokio::test]
async fn concurrent_requests_share_one_store() {
    let service = service();
    let router = receipt_router(service.clone());

    let mut tasks = Vec::new();
    for index in 0..16 {
        let router = router.clone();
        tasks.push(tokio::spawn(async move {
            let mut submitted = target();
            submitted.retailer = format!("Target #{index}");
            let request = Request::post("/receipts/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&submitted).expect("receipt encodes"),
                ))
                .expect("request builds");
            let response = router.oneshot(request).await.expect("route executes");
            assert_eq!(response.status(), StatusCode::OK);
            let body: ProcessReceiptResponse =
                serde_json::from_slice(&body_bytes(response).await).expect("id payload");
            body.id
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.expect("task joins"));
    }
    assert_eq!(ids.len(), 16);

    for id in ids {
        let request = Request::get(format!("/receipts/{id}/points"))
            .body(Body::empty())
            .expect("request builds");
        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let body: ReceiptPointsResponse =
            serde_json::from_slice(&body_bytes(response).await).expect("points payload");
        let stored = service.receipt(&id.to_string()).expect("stored");
        assert_eq!(body.points, scoring::score(&stored).expect("scores"));
    }
}
