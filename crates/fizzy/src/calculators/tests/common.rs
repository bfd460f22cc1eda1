use axum::response::Response;
use serde_json::Value;

use crate::calculators::guard::{PaymentRequest, ReadinessRequest};
use crate::calculators::mortgage::{MortgageCalculator, MortgageInput};
use crate::calculators::readiness::{ReadinessInput, ReadinessScorer};
use crate::calculators::service::CalculatorService;

pub(super) fn calculator() -> MortgageCalculator {
    MortgageCalculator::default()
}

pub(super) fn scorer() -> ReadinessScorer {
    ReadinessScorer::default()
}

pub(super) fn service() -> CalculatorService {
    CalculatorService::default()
}

/// 20% down on a $250k home at 6% over 30 years.
pub(super) fn twenty_percent_down() -> MortgageInput {
    MortgageInput::new(250_000.0, 50_000.0, 6.0)
}

/// FHA-style 3.5% down on a $200k home at 6.5%.
pub(super) fn fha_minimum_down() -> MortgageInput {
    MortgageInput::new(200_000.0, 7_000.0, 6.5)
}

pub(super) fn strong_applicant() -> ReadinessInput {
    ReadinessInput {
        credit_score: 760,
        monthly_income: 6_000.0,
        monthly_debt: 1_200.0,
        down_payment_savings: 60_000.0,
        monthly_savings: 1_500.0,
        employment_years: 5.0,
        has_prior_bankruptcy: false,
        has_foreclosure: false,
    }
}

/// Stretched first-time buyer: high DTI, thin savings, short tenure.
pub(super) fn stretched_applicant() -> ReadinessInput {
    ReadinessInput {
        credit_score: 650,
        monthly_income: 4_000.0,
        monthly_debt: 2_000.0,
        down_payment_savings: 5_000.0,
        monthly_savings: 100.0,
        employment_years: 0.75,
        has_prior_bankruptcy: false,
        has_foreclosure: false,
    }
}

pub(super) fn payment_request() -> PaymentRequest {
    PaymentRequest {
        home_price: Some(250_000.0),
        down_payment: Some(50_000.0),
        interest_rate: Some(6.0),
        ..PaymentRequest::default()
    }
}

pub(super) fn readiness_request() -> ReadinessRequest {
    ReadinessRequest {
        credit_score: Some(760),
        monthly_income: Some(6_000.0),
        monthly_debt: Some(1_200.0),
        down_payment_savings: Some(60_000.0),
        monthly_savings: Some(1_500.0),
        employment_years: Some(5.0),
        ..ReadinessRequest::default()
    }
}

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
