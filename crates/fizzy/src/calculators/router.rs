use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::guard::{CalculatorError, PaymentRequest, ReadinessRequest};
use super::service::CalculatorService;

/// Router builder exposing the calculator endpoints.
pub fn calculator_router(service: Arc<CalculatorService>) -> Router {
    Router::new()
        .route("/api/calculate-payment", post(payment_handler))
        .route("/api/calculate-readiness", post(readiness_handler))
        .with_state(service)
}

pub(crate) async fn payment_handler(
    State(service): State<Arc<CalculatorService>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Response {
    let outcome = payload
        .map_err(malformed)
        .and_then(|Json(request)| service.calculate_payment(request));

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => bad_request("payment", error),
    }
}

pub(crate) async fn readiness_handler(
    State(service): State<Arc<CalculatorService>>,
    payload: Result<Json<ReadinessRequest>, JsonRejection>,
) -> Response {
    let outcome = payload
        .map_err(malformed)
        .and_then(|Json(request)| service.calculate_readiness(request));

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => bad_request("readiness", error),
    }
}

fn malformed(rejection: JsonRejection) -> CalculatorError {
    CalculatorError::MalformedBody(rejection.body_text())
}

fn bad_request(calculator: &'static str, error: CalculatorError) -> Response {
    warn!(calculator, %error, "calculation request rejected");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
