use tracing::debug;

use super::guard::{CalculatorError, InputGuard, PaymentRequest, ReadinessRequest};
use super::mortgage::{MortgageAssumptions, MortgageCalculator, MortgageResult};
use super::readiness::{ReadinessPolicy, ReadinessResult, ReadinessScorer};

/// Service composing the input guard with both calculators.
#[derive(Debug, Clone, Default)]
pub struct CalculatorService {
    guard: InputGuard,
    mortgage: MortgageCalculator,
    readiness: ReadinessScorer,
}

impl CalculatorService {
    pub fn new(assumptions: MortgageAssumptions, policy: ReadinessPolicy) -> Self {
        Self::with_guard(InputGuard::default(), assumptions, policy)
    }

    pub fn with_guard(
        guard: InputGuard,
        assumptions: MortgageAssumptions,
        policy: ReadinessPolicy,
    ) -> Self {
        Self {
            guard,
            mortgage: MortgageCalculator::new(assumptions),
            readiness: ReadinessScorer::new(policy),
        }
    }

    pub fn mortgage(&self) -> &MortgageCalculator {
        &self.mortgage
    }

    pub fn readiness(&self) -> &ReadinessScorer {
        &self.readiness
    }

    /// Validate a payment request and compute its monthly breakdown.
    pub fn calculate_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<MortgageResult, CalculatorError> {
        let input = self.guard.mortgage_input(request)?;
        let result = self.mortgage.compute(&input)?;
        debug!(
            home_price = input.home_price,
            loan_term_years = input.loan_term_years,
            total_monthly_payment = result.total_monthly_payment,
            "mortgage payment calculated"
        );
        Ok(result)
    }

    /// Validate a readiness request and score the profile.
    pub fn calculate_readiness(
        &self,
        request: ReadinessRequest,
    ) -> Result<ReadinessResult, CalculatorError> {
        let input = self.guard.readiness_input(request)?;
        let result = self.readiness.score(&input);
        debug!(
            overall_score = result.overall_score,
            readiness_level = result.readiness_level.label(),
            "readiness score calculated"
        );
        Ok(result)
    }
}
