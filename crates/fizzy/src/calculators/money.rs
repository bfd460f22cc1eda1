//! Rounding and display helpers shared by the calculators.

/// Round half-up to cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Round half-up to whole currency units.
pub fn round_whole(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Render a dollar amount with thousands separators, e.g. `8750.0` -> `8,750` and
/// `1234.5` -> `1,234.50`. Cents are only shown when the amount is fractional.
pub fn format_dollars(amount: f64) -> String {
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents_total > 0 { "-" } else { "" };
    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}
