use super::common::*;
use crate::calculators::guard::{
    CalculatorError, GuardLimits, InputGuard, PaymentRequest, ReadinessRequest,
};

fn guard() -> InputGuard {
    InputGuard::default()
}

#[test]
fn payment_request_requires_core_fields() {
    for (request, field) in [
        (
            PaymentRequest {
                home_price: None,
                ..payment_request()
            },
            "homePrice",
        ),
        (
            PaymentRequest {
                down_payment: None,
                ..payment_request()
            },
            "downPayment",
        ),
        (
            PaymentRequest {
                interest_rate: None,
                ..payment_request()
            },
            "interestRate",
        ),
    ] {
        assert_eq!(
            guard().mortgage_input(request),
            Err(CalculatorError::MissingField(field))
        );
    }
}

#[test]
fn payment_request_defaults_to_thirty_year_term() {
    let input = guard()
        .mortgage_input(payment_request())
        .expect("valid request");

    assert_eq!(input.loan_term_years, 30);
    assert_eq!(input.property_tax_monthly, None);
    assert_eq!(input.pmi_monthly, None);
}

#[test]
fn down_payment_must_be_below_home_price() {
    let request = PaymentRequest {
        down_payment: Some(250_000.0),
        ..payment_request()
    };

    assert_eq!(
        guard().mortgage_input(request),
        Err(CalculatorError::DownPaymentTooLarge)
    );
}

#[test]
fn zero_down_payment_is_allowed() {
    let request = PaymentRequest {
        down_payment: Some(0.0),
        ..payment_request()
    };

    let input = guard().mortgage_input(request).expect("zero down is valid");
    assert_eq!(input.principal(), 250_000.0);
}

#[test]
fn rejects_zero_loan_term() {
    let request = PaymentRequest {
        loan_term: Some(0),
        ..payment_request()
    };

    assert_eq!(
        guard().mortgage_input(request),
        Err(CalculatorError::InvalidLoanTerm)
    );
}

#[test]
fn long_terms_and_high_rates_are_accepted() {
    let request = PaymentRequest {
        loan_term: Some(100),
        interest_rate: Some(150.0),
        ..payment_request()
    };

    let input = guard().mortgage_input(request).expect("valid request");
    assert_eq!(input.loan_term_years, 100);
    assert_eq!(input.interest_rate, 150.0);
}

#[test]
fn rejects_negative_and_non_finite_amounts() {
    let negative_rate = PaymentRequest {
        interest_rate: Some(-1.0),
        ..payment_request()
    };
    assert_eq!(
        guard().mortgage_input(negative_rate),
        Err(CalculatorError::Negative("interestRate"))
    );

    let negative_hoa = PaymentRequest {
        hoa: Some(-10.0),
        ..payment_request()
    };
    assert_eq!(
        guard().mortgage_input(negative_hoa),
        Err(CalculatorError::Negative("hoa"))
    );

    let infinite_price = PaymentRequest {
        home_price: Some(f64::INFINITY),
        ..payment_request()
    };
    assert_eq!(
        guard().mortgage_input(infinite_price),
        Err(CalculatorError::NonFinite("homePrice"))
    );

    let zero_price = PaymentRequest {
        home_price: Some(0.0),
        ..payment_request()
    };
    assert_eq!(
        guard().mortgage_input(zero_price),
        Err(CalculatorError::NonPositiveHomePrice)
    );
}

#[test]
fn credit_range_follows_configured_limits() {
    let guard = InputGuard::with_limits(GuardLimits {
        min_credit_score: 500,
        ..GuardLimits::default()
    });
    let request = ReadinessRequest {
        credit_score: Some(450),
        ..readiness_request()
    };

    assert!(matches!(
        guard.readiness_input(request),
        Err(CalculatorError::CreditScoreOutOfRange { min: 500, .. })
    ));
}

#[test]
fn override_aliases_deserialize() {
    let request: PaymentRequest = serde_json::from_str(
        r#"{"homePrice":300000,"downPayment":15000,"interestRate":6.75,"loanTermYears":15,
            "propertyTaxMonthly":0,"hoa":85}"#,
    )
    .expect("request parses");

    let input = guard().mortgage_input(request).expect("valid request");

    assert_eq!(input.loan_term_years, 15);
    assert_eq!(input.property_tax_monthly, Some(0.0));
    assert_eq!(input.hoa_monthly, Some(85.0));
    assert_eq!(input.home_insurance_monthly, None);
}

#[test]
fn readiness_request_requires_credit_and_income() {
    let missing_credit = ReadinessRequest {
        credit_score: None,
        ..readiness_request()
    };
    assert_eq!(
        guard().readiness_input(missing_credit),
        Err(CalculatorError::MissingField("creditScore"))
    );

    let missing_income = ReadinessRequest {
        monthly_income: None,
        ..readiness_request()
    };
    assert_eq!(
        guard().readiness_input(missing_income),
        Err(CalculatorError::MissingField("monthlyIncome"))
    );
}

#[test]
fn readiness_request_rejects_zero_income() {
    let request = ReadinessRequest {
        monthly_income: Some(0.0),
        ..readiness_request()
    };

    assert_eq!(
        guard().readiness_input(request),
        Err(CalculatorError::NonPositiveIncome)
    );
}

#[test]
fn readiness_request_checks_credit_range() {
    for score in [299, 851] {
        let request = ReadinessRequest {
            credit_score: Some(score),
            ..readiness_request()
        };
        assert!(matches!(
            guard().readiness_input(request),
            Err(CalculatorError::CreditScoreOutOfRange { found, .. }) if found == score
        ));
    }
}

#[test]
fn readiness_optional_fields_default_to_zero() {
    let request: ReadinessRequest =
        serde_json::from_str(r#"{"creditScore":700,"monthlyIncome":5000}"#).expect("parses");

    let input = guard().readiness_input(request).expect("valid request");

    assert_eq!(input.monthly_debt, 0.0);
    assert_eq!(input.down_payment_savings, 0.0);
    assert_eq!(input.monthly_savings, 0.0);
    assert_eq!(input.employment_years, 0.0);
    assert!(!input.has_prior_bankruptcy);
    assert!(!input.has_foreclosure);
}
