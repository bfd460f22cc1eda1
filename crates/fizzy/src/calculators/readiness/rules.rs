use super::domain::ReadinessInput;
use super::policy::ReadinessPolicy;

const CREDIT_LADDER: &[(f64, f64)] = &[
    (740.0, 100.0),
    (700.0, 90.0),
    (680.0, 80.0),
    (640.0, 65.0),
    (620.0, 50.0),
    (580.0, 30.0),
];
const CREDIT_FLOOR: f64 = 10.0;

const DTI_LADDER: &[(f64, f64)] = &[(0.36, 100.0), (0.43, 80.0), (0.50, 50.0)];
const DTI_FLOOR: f64 = 20.0;

const SAVINGS_RATE_LADDER: &[(f64, f64)] = &[
    (0.20, 100.0),
    (0.15, 80.0),
    (0.10, 60.0),
    (0.05, 40.0),
];
const SAVINGS_RATE_FLOOR: f64 = 20.0;

const EMPLOYMENT_LADDER: &[(f64, f64)] = &[(2.0, 100.0), (1.0, 70.0), (0.5, 50.0)];
const EMPLOYMENT_FLOOR: f64 = 30.0;

const DOWN_PAYMENT_FLOOR: f64 = 20.0;

/// Unrounded component scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ComponentScores {
    pub credit: f64,
    pub debt_to_income: f64,
    pub down_payment: f64,
    pub savings_rate: f64,
    pub employment: f64,
}

/// Figures derived while scoring that later drive advice and loan eligibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreSignals {
    pub debt_to_income: Option<f64>,
    pub fha_down_payment: f64,
}

pub(crate) fn score_components(
    input: &ReadinessInput,
    policy: &ReadinessPolicy,
) -> (ComponentScores, ScoreSignals) {
    let debt_to_income = input.debt_to_income();
    let fha_down_payment = policy.fha_down_payment();

    let scores = ComponentScores {
        credit: credit_component(input, policy),
        debt_to_income: debt_to_income
            .map_or(DTI_FLOOR, |dti| at_most(dti, DTI_LADDER, DTI_FLOOR)),
        down_payment: down_payment_component(input.down_payment_savings, policy),
        savings_rate: input.savings_rate().map_or(SAVINGS_RATE_FLOOR, |rate| {
            at_least(rate, SAVINGS_RATE_LADDER, SAVINGS_RATE_FLOOR)
        }),
        employment: at_least(input.employment_years, EMPLOYMENT_LADDER, EMPLOYMENT_FLOOR),
    };

    let signals = ScoreSignals {
        debt_to_income,
        fha_down_payment,
    };

    (scores, signals)
}

/// Weighted sum of the unrounded components.
pub(crate) fn weighted_total(scores: &ComponentScores, policy: &ReadinessPolicy) -> f64 {
    let weights = &policy.weights;
    scores.credit * weights.credit
        + scores.debt_to_income * weights.debt_to_income
        + scores.down_payment * weights.down_payment
        + scores.savings_rate * weights.savings_rate
        + scores.employment * weights.employment
}

fn credit_component(input: &ReadinessInput, policy: &ReadinessPolicy) -> f64 {
    let mut score = at_least(f64::from(input.credit_score), CREDIT_LADDER, CREDIT_FLOOR);
    if input.has_prior_bankruptcy {
        score *= policy.bankruptcy_penalty;
    }
    if input.has_foreclosure {
        score *= policy.foreclosure_penalty;
    }
    score
}

fn down_payment_component(savings: f64, policy: &ReadinessPolicy) -> f64 {
    let fha = policy.fha_down_payment();
    let ladder = [
        (policy.ideal_down_payment(), 100.0),
        (policy.conventional_down_payment(), 80.0),
        (fha, 60.0),
        (fha * 0.5, 40.0),
    ];
    at_least(savings, &ladder, DOWN_PAYMENT_FLOOR)
}

/// First rung whose threshold the value meets or exceeds; rungs are ordered high to low.
fn at_least(value: f64, ladder: &[(f64, f64)], floor: f64) -> f64 {
    ladder
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}

/// First rung whose threshold the value does not exceed; rungs are ordered low to high.
fn at_most(value: f64, ladder: &[(f64, f64)], floor: f64) -> f64 {
    ladder
        .iter()
        .find(|(threshold, _)| value <= *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}
