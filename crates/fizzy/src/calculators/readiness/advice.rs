use super::domain::ReadinessInput;
use super::rules::{ComponentScores, ScoreSignals};
use crate::calculators::money::format_dollars;

const CREDIT_ADVICE_BELOW: f64 = 70.0;
const DTI_ADVICE_BELOW: f64 = 70.0;
const DOWN_PAYMENT_ADVICE_BELOW: f64 = 70.0;
const SAVINGS_ADVICE_BELOW: f64 = 60.0;
const EMPLOYMENT_ADVICE_BELOW: f64 = 70.0;

const CREDIT_ADVICE: &str =
    "Focus on improving your credit score. Pay bills on time and reduce credit utilization.";
const DTI_ADVICE: &str =
    "Reduce your debt-to-income ratio by paying down debt or increasing income.";
const SAVINGS_ADVICE: &str =
    "Increase your monthly savings rate to build emergency fund and down payment faster.";
const EMPLOYMENT_ADVICE: &str =
    "Continue building employment history - lenders prefer 2+ years in same field.";
const READY_ADVICE: &str =
    "You're in great shape! Consider getting pre-approved and starting your home search.";

pub const CONVENTIONAL_LOAN: &str = "Conventional Loan (Best rates with 5%+ down)";
pub const FHA_LOAN: &str = "FHA Loan (3.5% down, more flexible)";
pub const FHA_HIGH_RATE_LOAN: &str = "FHA Loan with higher rates";
pub const DOWN_PAYMENT_ASSISTANCE: &str = "Down Payment Assistance Programs (Check local programs)";
pub const FIRST_TIME_BUYER_GRANTS: &str = "State/Local First-Time Buyer Grants";

const CONVENTIONAL_MIN_CREDIT: u16 = 640;
const CONVENTIONAL_MAX_DTI: f64 = 0.43;
const FHA_MIN_CREDIT: u16 = 620;
const FHA_HIGH_RATE_MIN_CREDIT: u16 = 580;

/// Advisory messages in fixed component order. Never empty.
pub(crate) fn recommendations(
    input: &ReadinessInput,
    scores: &ComponentScores,
    signals: &ScoreSignals,
) -> Vec<String> {
    let mut advice = Vec::new();

    if scores.credit < CREDIT_ADVICE_BELOW {
        advice.push(CREDIT_ADVICE.to_string());
    }
    if scores.debt_to_income < DTI_ADVICE_BELOW {
        advice.push(DTI_ADVICE.to_string());
    }
    if scores.down_payment < DOWN_PAYMENT_ADVICE_BELOW {
        let needed = (signals.fha_down_payment - input.down_payment_savings).max(0.0);
        advice.push(format!(
            "Save ${} more for down payment, or explore down payment assistance programs.",
            format_dollars(needed)
        ));
    }
    if scores.savings_rate < SAVINGS_ADVICE_BELOW {
        advice.push(SAVINGS_ADVICE.to_string());
    }
    if scores.employment < EMPLOYMENT_ADVICE_BELOW {
        advice.push(EMPLOYMENT_ADVICE.to_string());
    }

    if advice.is_empty() {
        advice.push(READY_ADVICE.to_string());
    }

    advice
}

/// Loan programs the applicant may qualify for.
///
/// The two FHA checks are independent, so a 620+ score lists both FHA entries.
pub(crate) fn loan_programs(input: &ReadinessInput, signals: &ScoreSignals) -> Vec<String> {
    let conventional_eligible = input.credit_score >= CONVENTIONAL_MIN_CREDIT
        && signals
            .debt_to_income
            .is_some_and(|dti| dti <= CONVENTIONAL_MAX_DTI);
    let fha_standard_eligible = input.credit_score >= FHA_MIN_CREDIT;
    let fha_high_rate_eligible = input.credit_score >= FHA_HIGH_RATE_MIN_CREDIT;

    let mut programs = Vec::new();
    if conventional_eligible {
        programs.push(CONVENTIONAL_LOAN.to_string());
    }
    if fha_standard_eligible {
        programs.push(FHA_LOAN.to_string());
    }
    if fha_high_rate_eligible {
        programs.push(FHA_HIGH_RATE_LOAN.to_string());
    }
    programs.push(DOWN_PAYMENT_ASSISTANCE.to_string());
    programs.push(FIRST_TIME_BUYER_GRANTS.to_string());
    programs
}
