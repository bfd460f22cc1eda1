/// Level monthly payment that retires `principal` over `payments` installments.
///
/// Evaluates the annuity formula as `P * r / (1 - (1+r)^-n)`, taking `(1+r)^-n - 1` through
/// `ln_1p`/`exp_m1` so tiny rates keep their precision and huge terms settle at `P * r`.
/// Zero and subnormal rates repay the principal in equal slices. Callers guarantee
/// `payments > 0`.
pub(crate) fn level_payment(principal: f64, monthly_rate: f64, payments: f64) -> f64 {
    if monthly_rate.is_normal() {
        let discounted = -(-payments * monthly_rate.ln_1p()).exp_m1();
        principal * (monthly_rate / discounted)
    } else {
        principal / payments
    }
}

pub(crate) fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / 12.0
}
