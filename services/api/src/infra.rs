use fizzy::calculators::{CalculatorService, MortgageAssumptions, ReadinessPolicy};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn calculator_service() -> CalculatorService {
    CalculatorService::new(MortgageAssumptions::default(), ReadinessPolicy::default())
}

/// Parse a dollar amount typed on the command line, tolerating `$` and thousands separators.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | '_'))
        .collect();

    let value = cleaned
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as an amount ({err})"))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite amount"))
    }
}
