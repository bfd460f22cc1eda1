use serde::{Deserialize, Serialize};

/// Validated applicant profile. Monetary amounts are monthly unless noted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessInput {
    pub credit_score: u16,
    pub monthly_income: f64,
    pub monthly_debt: f64,
    /// Total saved toward a down payment.
    pub down_payment_savings: f64,
    pub monthly_savings: f64,
    pub employment_years: f64,
    pub has_prior_bankruptcy: bool,
    pub has_foreclosure: bool,
}

impl ReadinessInput {
    /// Monthly debt over monthly income; `None` when income is not positive.
    pub fn debt_to_income(&self) -> Option<f64> {
        self.share_of_income(self.monthly_debt)
    }

    /// Monthly savings over monthly income; `None` when income is not positive.
    pub fn savings_rate(&self) -> Option<f64> {
        self.share_of_income(self.monthly_savings)
    }

    fn share_of_income(&self, amount: f64) -> Option<f64> {
        (self.monthly_income > 0.0).then(|| amount / self.monthly_income)
    }
}

/// Qualitative tier derived from the overall score, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Ready")]
    Ready,
    #[serde(rename = "Almost Ready")]
    AlmostReady,
    #[serde(rename = "Getting There")]
    GettingThere,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(rename = "Early Stage")]
    EarlyStage,
}

impl ReadinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::AlmostReady => "Almost Ready",
            Self::GettingThere => "Getting There",
            Self::NeedsWork => "Needs Work",
            Self::EarlyStage => "Early Stage",
        }
    }

    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Ready,
            65..=79 => Self::AlmostReady,
            50..=64 => Self::GettingThere,
            35..=49 => Self::NeedsWork,
            _ => Self::EarlyStage,
        }
    }
}

/// Component scores rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub credit_score: u8,
    pub debt_to_income: u8,
    pub down_payment: u8,
    pub savings_rate: u8,
    pub employment: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResult {
    pub overall_score: u8,
    pub readiness_level: ReadinessLevel,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub loan_types: Vec<String>,
}
