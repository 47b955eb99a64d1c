//! Loan Engine for the Workforce Support scheme.
//!
//! Provides the standard amortizing-annuity payment calculation, lazy
//! month-by-month schedules, early-payoff simulation with extra monthly
//! and lump-sum payments, and comparison of the built-in payment
//! strategy presets.

mod calculator;
mod early_payoff;
mod schedule;
mod strategies;

pub use calculator::LoanCalculator;
pub use schedule::AmortizationSchedule;
pub use strategies::payment_strategies;
