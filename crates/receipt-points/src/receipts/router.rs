use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{Receipt, ReceiptId};
use super::service::ReceiptService;
use super::store::ReceiptStore;

/// Body returned after a receipt is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body returned for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptPointsResponse {
    pub points: u64,
}

/// Receipt intake and scoring endpoints.
pub fn receipt_router<S>(service: ReceiptService<S>) -> Router
where
    S: ReceiptStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:id/points", get(points_handler::<S>))
        .with_state(service)
}

pub(crate) async fn process_handler<S>(
    State(service): State<ReceiptService<S>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    S: ReceiptStore + 'static,
{
    match payload {
        Ok(Json(receipt)) => {
            let id = service.submit(receipt);
            (StatusCode::OK, Json(ProcessReceiptResponse { id })).into_response()
        }
        Err(rejection) => {
            let message = rejection.body_text();
            warn!(error = %message, "rejected receipt payload");
            bad_request(message)
        }
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<ReceiptService<S>>,
    Path(id): Path<String>,
) -> Response
where
    S: ReceiptStore + 'static,
{
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(ReceiptPointsResponse { points })).into_response(),
        Err(err) => bad_request(err.to_string()),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
