use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::calculators::guard::PaymentRequest;
use crate::calculators::router::{calculator_router, payment_handler, readiness_handler};

#[tokio::test]
async fn payment_handler_returns_breakdown() {
    let response = payment_handler(State(Arc::new(service())), Ok(Json(payment_request()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalLoanAmount"], json!(200_000.0));
    assert_eq!(payload["monthlyPMI"], json!(0.0));
}

#[tokio::test]
async fn payment_handler_rejects_down_payment_at_price() {
    let request = PaymentRequest {
        down_payment: Some(250_000.0),
        ..payment_request()
    };

    let response = payment_handler(State(Arc::new(service())), Ok(Json(request))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "down payment cannot be greater than or equal to home price"
    );
}

#[tokio::test]
async fn readiness_handler_returns_score() {
    let response =
        readiness_handler(State(Arc::new(service())), Ok(Json(readiness_request()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overallScore"], 100);
    assert_eq!(payload["readinessLevel"], "Ready");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let router = calculator_router(Arc::new(service()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate-payment")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"homePrice\": "))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("invalid request body")));
}

#[tokio::test]
async fn missing_income_route_returns_bad_request() {
    let router = calculator_router(Arc::new(service()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate-readiness")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "creditScore": 700 }).to_string()))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "monthlyIncome is required");
}
