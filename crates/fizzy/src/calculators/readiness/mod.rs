//! Weighted homeownership readiness model.
//!
//! Five component scores (credit, debt-to-income, down payment, savings rate, employment) are
//! each read off a fixed threshold ladder, combined with the policy weights into a 0-100 score,
//! and mapped onto a readiness tier together with advice and eligible loan programs.

mod advice;
pub mod domain;
pub mod policy;
mod rules;

pub use advice::{
    CONVENTIONAL_LOAN, DOWN_PAYMENT_ASSISTANCE, FHA_HIGH_RATE_LOAN, FHA_LOAN,
    FIRST_TIME_BUYER_GRANTS,
};
pub use domain::{ReadinessInput, ReadinessLevel, ReadinessResult, ScoreBreakdown};
pub use policy::{ComponentWeights, ReadinessPolicy};

use super::money::round_whole;

/// Stateless scorer that applies the readiness policy to a profile.
#[derive(Debug, Clone, Default)]
pub struct ReadinessScorer {
    policy: ReadinessPolicy,
}

impl ReadinessScorer {
    pub fn new(policy: ReadinessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReadinessPolicy {
        &self.policy
    }

    /// Score a profile. A non-positive `monthly_income` puts both income ratios on the lowest
    /// rung of their ladders and rules out the conventional program.
    pub fn score(&self, input: &ReadinessInput) -> ReadinessResult {
        let (scores, signals) = rules::score_components(input, &self.policy);

        let overall_score = to_score(rules::weighted_total(&scores, &self.policy));

        ReadinessResult {
            overall_score,
            readiness_level: ReadinessLevel::from_score(overall_score),
            breakdown: ScoreBreakdown {
                credit_score: to_score(scores.credit),
                debt_to_income: to_score(scores.debt_to_income),
                down_payment: to_score(scores.down_payment),
                savings_rate: to_score(scores.savings_rate),
                employment: to_score(scores.employment),
            },
            recommendations: advice::recommendations(input, &scores, &signals),
            loan_types: advice::loan_programs(input, &signals),
        }
    }
}

fn to_score(value: f64) -> u8 {
    round_whole(value).clamp(0.0, 100.0) as u8
}
