//! Monthly mortgage payment breakdown and lifetime cost.

mod amortization;
pub mod domain;

pub use domain::{
    MortgageAssumptions, MortgageInput, MortgageResult, PaymentBreakdown, DEFAULT_LOAN_TERM_YEARS,
};

use super::guard::CalculatorError;
use super::money::{round_cents, round_whole};
use amortization::{level_payment, monthly_rate};

/// Stateless calculator applying the configured cost assumptions.
#[derive(Debug, Clone, Default)]
pub struct MortgageCalculator {
    assumptions: MortgageAssumptions,
}

impl MortgageCalculator {
    pub fn new(assumptions: MortgageAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &MortgageAssumptions {
        &self.assumptions
    }

    /// Compute the payment breakdown. The input must already satisfy
    /// `0 <= down_payment < home_price` and `loan_term_years > 0`.
    ///
    /// Fails with [`CalculatorError::CalculationOverflow`] when the amounts are large enough
    /// that any figure leaves the finite range.
    pub fn compute(&self, input: &MortgageInput) -> Result<MortgageResult, CalculatorError> {
        let principal = input.principal();
        let payments = input.payment_count() as f64;
        let principal_interest =
            level_payment(principal, monthly_rate(input.interest_rate), payments);

        let property_tax = input.property_tax_monthly.unwrap_or_else(|| {
            self.monthly_share(input.home_price, self.assumptions.property_tax_rate)
        });
        let home_insurance = input.home_insurance_monthly.unwrap_or_else(|| {
            self.monthly_share(input.home_price, self.assumptions.home_insurance_rate)
        });
        let pmi = self.monthly_pmi(input, principal);
        let hoa = input.hoa_monthly.unwrap_or(0.0);

        let total_monthly = principal_interest + property_tax + home_insurance + pmi + hoa;
        // Never negative for a non-negative rate; clamp float residue near zero.
        let total_interest = (principal_interest * payments - principal).max(0.0);
        let lifetime = |monthly: f64| round_whole(monthly * payments);

        let result = MortgageResult {
            monthly_principal_interest: round_cents(principal_interest),
            monthly_property_tax: round_cents(property_tax),
            monthly_home_insurance: round_cents(home_insurance),
            monthly_pmi: round_cents(pmi),
            monthly_hoa: round_cents(hoa),
            total_monthly_payment: round_cents(total_monthly),
            total_loan_amount: principal,
            total_interest_paid: round_cents(total_interest),
            breakdown: PaymentBreakdown {
                principal: round_whole(principal),
                interest: round_whole(total_interest),
                taxes_insurance: lifetime(property_tax + home_insurance),
                other: lifetime(pmi + hoa),
            },
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalculatorError::CalculationOverflow)
        }
    }

    fn monthly_share(&self, home_price: f64, annual_rate: f64) -> f64 {
        home_price * annual_rate / 12.0
    }

    fn monthly_pmi(&self, input: &MortgageInput, principal: f64) -> f64 {
        match input.pmi_monthly {
            Some(explicit) => explicit,
            None if input.down_payment_percent() < self.assumptions.pmi_threshold_percent => {
                self.monthly_share(principal, self.assumptions.pmi_rate)
            }
            None => 0.0,
        }
    }
}
