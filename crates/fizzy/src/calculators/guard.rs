use serde::{Deserialize, Serialize};

use super::mortgage::{MortgageInput, DEFAULT_LOAN_TERM_YEARS};
use super::readiness::ReadinessInput;

/// Validation errors raised before a calculation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
    #[error("home price must be greater than zero")]
    NonPositiveHomePrice,
    #[error("down payment cannot be greater than or equal to home price")]
    DownPaymentTooLarge,
    #[error("loan term must be at least 1 year")]
    InvalidLoanTerm,
    #[error("credit score must be between {min} and {max} (found {found})")]
    CreditScoreOutOfRange { found: u16, min: u16, max: u16 },
    #[error("monthly income must be greater than zero")]
    NonPositiveIncome,
    #[error("invalid request body: {0}")]
    MalformedBody(String),
    #[error("inputs are too large to produce a finite payment")]
    CalculationOverflow,
}

/// Wire shape of a payment calculation request. Every field is optional so that missing
/// values surface as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub home_price: Option<f64>,
    pub down_payment: Option<f64>,
    pub interest_rate: Option<f64>,
    #[serde(alias = "loanTermYears")]
    pub loan_term: Option<u32>,
    #[serde(alias = "propertyTaxMonthly")]
    pub property_tax: Option<f64>,
    #[serde(alias = "homeInsuranceMonthly")]
    pub home_insurance: Option<f64>,
    #[serde(alias = "pmiMonthly")]
    pub pmi: Option<f64>,
    #[serde(alias = "hoaMonthly")]
    pub hoa: Option<f64>,
}

/// Wire shape of a readiness scoring request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessRequest {
    pub credit_score: Option<u16>,
    pub monthly_income: Option<f64>,
    pub monthly_debt: Option<f64>,
    pub down_payment_savings: Option<f64>,
    pub monthly_savings: Option<f64>,
    pub employment_years: Option<f64>,
    #[serde(default)]
    pub has_prior_bankruptcy: bool,
    #[serde(default)]
    pub has_foreclosure: bool,
}

/// Credit score range accepted on readiness requests.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardLimits {
    pub min_credit_score: u16,
    pub max_credit_score: u16,
}

impl Default for GuardLimits {
    fn default() -> Self {
        Self {
            min_credit_score: 300,
            max_credit_score: 850,
        }
    }
}

/// Guard responsible for producing validated calculator inputs.
#[derive(Debug, Clone, Default)]
pub struct InputGuard {
    limits: GuardLimits,
}

impl InputGuard {
    pub fn with_limits(limits: GuardLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &GuardLimits {
        &self.limits
    }

    pub fn mortgage_input(
        &self,
        request: PaymentRequest,
    ) -> Result<MortgageInput, CalculatorError> {
        let home_price = required(request.home_price, "homePrice")?;
        let down_payment = required(request.down_payment, "downPayment")?;
        let interest_rate = required(request.interest_rate, "interestRate")?;

        if home_price <= 0.0 {
            return Err(CalculatorError::NonPositiveHomePrice);
        }
        let down_payment = non_negative(down_payment, "downPayment")?;
        let interest_rate = non_negative(interest_rate, "interestRate")?;
        if down_payment >= home_price {
            return Err(CalculatorError::DownPaymentTooLarge);
        }

        let loan_term_years = request.loan_term.unwrap_or(DEFAULT_LOAN_TERM_YEARS);
        if loan_term_years == 0 {
            return Err(CalculatorError::InvalidLoanTerm);
        }

        Ok(MortgageInput {
            home_price,
            down_payment,
            interest_rate,
            loan_term_years,
            property_tax_monthly: optional_amount(request.property_tax, "propertyTax")?,
            home_insurance_monthly: optional_amount(request.home_insurance, "homeInsurance")?,
            pmi_monthly: optional_amount(request.pmi, "pmi")?,
            hoa_monthly: optional_amount(request.hoa, "hoa")?,
        })
    }

    pub fn readiness_input(
        &self,
        request: ReadinessRequest,
    ) -> Result<ReadinessInput, CalculatorError> {
        let credit_score = request
            .credit_score
            .ok_or(CalculatorError::MissingField("creditScore"))?;
        let monthly_income = required(request.monthly_income, "monthlyIncome")?;

        if !(self.limits.min_credit_score..=self.limits.max_credit_score).contains(&credit_score) {
            return Err(CalculatorError::CreditScoreOutOfRange {
                found: credit_score,
                min: self.limits.min_credit_score,
                max: self.limits.max_credit_score,
            });
        }
        if monthly_income <= 0.0 {
            return Err(CalculatorError::NonPositiveIncome);
        }

        Ok(ReadinessInput {
            credit_score,
            monthly_income,
            monthly_debt: amount_or_zero(request.monthly_debt, "monthlyDebt")?,
            down_payment_savings: amount_or_zero(
                request.down_payment_savings,
                "downPaymentSavings",
            )?,
            monthly_savings: amount_or_zero(request.monthly_savings, "monthlySavings")?,
            employment_years: amount_or_zero(request.employment_years, "employmentYears")?,
            has_prior_bankruptcy: request.has_prior_bankruptcy,
            has_foreclosure: request.has_foreclosure,
        })
    }
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, CalculatorError> {
    let value = value.ok_or(CalculatorError::MissingField(field))?;
    finite(value, field)
}

fn finite(value: f64, field: &'static str) -> Result<f64, CalculatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::NonFinite(field))
    }
}

fn non_negative(value: f64, field: &'static str) -> Result<f64, CalculatorError> {
    let value = finite(value, field)?;
    if value < 0.0 {
        Err(CalculatorError::Negative(field))
    } else {
        Ok(value)
    }
}

fn optional_amount(
    value: Option<f64>,
    field: &'static str,
) -> Result<Option<f64>, CalculatorError> {
    value.map(|amount| non_negative(amount, field)).transpose()
}

fn amount_or_zero(value: Option<f64>, field: &'static str) -> Result<f64, CalculatorError> {
    Ok(optional_amount(value, field)?.unwrap_or(0.0))
}
