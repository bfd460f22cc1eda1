use serde::{Deserialize, Serialize};

pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;

/// Validated mortgage request. Overrides are monthly amounts; `None` derives a default while
/// `Some(0.0)` is an explicit zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageInput {
    pub home_price: f64,
    pub down_payment: f64,
    /// Annual percentage, e.g. `6.5` for 6.5%.
    pub interest_rate: f64,
    pub loan_term_years: u32,
    pub property_tax_monthly: Option<f64>,
    pub home_insurance_monthly: Option<f64>,
    pub pmi_monthly: Option<f64>,
    pub hoa_monthly: Option<f64>,
}

impl MortgageInput {
    pub fn new(home_price: f64, down_payment: f64, interest_rate: f64) -> Self {
        Self {
            home_price,
            down_payment,
            interest_rate,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            property_tax_monthly: None,
            home_insurance_monthly: None,
            pmi_monthly: None,
            hoa_monthly: None,
        }
    }

    pub fn with_term(mut self, years: u32) -> Self {
        self.loan_term_years = years;
        self
    }

    pub fn principal(&self) -> f64 {
        self.home_price - self.down_payment
    }

    pub fn down_payment_percent(&self) -> f64 {
        self.down_payment / self.home_price * 100.0
    }

    /// Monthly installments over the full term. Widened so any `u32` term fits.
    pub fn payment_count(&self) -> u64 {
        u64::from(self.loan_term_years) * 12
    }
}

/// Annual cost assumptions applied when the borrower does not supply monthly figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageAssumptions {
    pub property_tax_rate: f64,
    pub home_insurance_rate: f64,
    pub pmi_rate: f64,
    /// Down payments below this percentage of the price carry PMI.
    pub pmi_threshold_percent: f64,
}

impl Default for MortgageAssumptions {
    fn default() -> Self {
        Self {
            property_tax_rate: 0.012,
            home_insurance_rate: 0.0035,
            pmi_rate: 0.005,
            pmi_threshold_percent: 20.0,
        }
    }
}

/// Lifetime totals over the full payment schedule, in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub principal: f64,
    pub interest: f64,
    pub taxes_insurance: f64,
    pub other: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResult {
    pub monthly_principal_interest: f64,
    pub monthly_property_tax: f64,
    pub monthly_home_insurance: f64,
    #[serde(rename = "monthlyPMI")]
    pub monthly_pmi: f64,
    #[serde(rename = "monthlyHOA")]
    pub monthly_hoa: f64,
    pub total_monthly_payment: f64,
    pub total_loan_amount: f64,
    pub total_interest_paid: f64,
    pub breakdown: PaymentBreakdown,
}

impl MortgageResult {
    /// `false` when any figure overflowed; such a result cannot be serialized faithfully.
    pub fn is_finite(&self) -> bool {
        let breakdown = &self.breakdown;
        [
            self.monthly_principal_interest,
            self.monthly_property_tax,
            self.monthly_home_insurance,
            self.monthly_pmi,
            self.monthly_hoa,
            self.total_monthly_payment,
            self.total_loan_amount,
            self.total_interest_paid,
            breakdown.principal,
            breakdown.interest,
            breakdown.taxes_insurance,
            breakdown.other,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
