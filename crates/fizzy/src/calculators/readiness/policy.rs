use serde::{Deserialize, Serialize};

/// Relative importance of each component in the overall score. Weights sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub credit: f64,
    pub debt_to_income: f64,
    pub down_payment: f64,
    pub savings_rate: f64,
    pub employment: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            credit: 0.30,
            debt_to_income: 0.25,
            down_payment: 0.20,
            savings_rate: 0.15,
            employment: 0.10,
        }
    }
}

/// Scoring dials for the readiness model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessPolicy {
    /// Reference purchase price the down-payment targets are measured against.
    pub target_home_price: f64,
    pub ideal_down_payment_pct: f64,
    pub conventional_down_payment_pct: f64,
    pub fha_down_payment_pct: f64,
    pub bankruptcy_penalty: f64,
    pub foreclosure_penalty: f64,
    pub weights: ComponentWeights,
}

impl ReadinessPolicy {
    pub fn ideal_down_payment(&self) -> f64 {
        self.target_home_price * self.ideal_down_payment_pct
    }

    pub fn conventional_down_payment(&self) -> f64 {
        self.target_home_price * self.conventional_down_payment_pct
    }

    pub fn fha_down_payment(&self) -> f64 {
        self.target_home_price * self.fha_down_payment_pct
    }
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            target_home_price: 250_000.0,
            ideal_down_payment_pct: 0.20,
            conventional_down_payment_pct: 0.05,
            fha_down_payment_pct: 0.035,
            bankruptcy_penalty: 0.7,
            foreclosure_penalty: 0.6,
            weights: ComponentWeights::default(),
        }
    }
}
