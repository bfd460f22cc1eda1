//! Mortgage payment and homeownership readiness calculators.
//!
//! Both engines are pure: a validated input goes in and a freshly built result comes out, so a
//! single `CalculatorService` can be shared across request handlers without locking.

pub mod guard;
pub mod money;
pub mod mortgage;
pub mod readiness;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use guard::{CalculatorError, GuardLimits, InputGuard, PaymentRequest, ReadinessRequest};
pub use mortgage::{
    MortgageAssumptions, MortgageCalculator, MortgageInput, MortgageResult, PaymentBreakdown,
};
pub use readiness::{
    ReadinessInput, ReadinessLevel, ReadinessPolicy, ReadinessResult, ReadinessScorer,
    ScoreBreakdown,
};
pub use router::calculator_router;
pub use service::CalculatorService;
