//! Loan payment calculation functionality.
//!
//! The [`LoanCalculator`] holds a validated loan request and derives the
//! standard monthly payment with the amortizing-annuity formula. It is the
//! entry point for schedules, early-payoff simulations and strategy
//! comparisons.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{LoanRequest, LoanSummary};
use crate::money::{fils, percent, round_rate};

/// Calculates payments, schedules and payoff scenarios for one loan.
///
/// Construction validates the request; all methods on a constructed
/// calculator are pure functions of the validated inputs.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wfs_engine::loan::LoanCalculator;
/// use wfs_engine::models::LoanRequest;
///
/// let loan = LoanCalculator::new(LoanRequest {
///     principal: Decimal::from(1000),
///     annual_rate_percent: Decimal::ZERO,
///     term_months: 12,
/// })
/// .unwrap();
///
/// assert_eq!(loan.monthly_payment(), Decimal::from_str("83.333").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct LoanCalculator {
    request: LoanRequest,
    monthly_rate: Decimal,
}

impl LoanCalculator {
    /// Creates a calculator for the given loan request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// when the principal is not positive, the rate is negative, or the
    /// term is zero.
    pub fn new(request: LoanRequest) -> EngineResult<Self> {
        request.validate()?;
        let monthly_rate = percent(request.annual_rate_percent) / Decimal::from(12);
        Ok(Self {
            request,
            monthly_rate,
        })
    }

    /// Returns the validated loan request.
    pub fn request(&self) -> &LoanRequest {
        &self.request
    }

    /// Returns the monthly interest rate as a fraction.
    pub fn monthly_rate(&self) -> Decimal {
        self.monthly_rate
    }

    /// The standard monthly payment, rounded to fils.
    ///
    /// A zero-rate loan pays `principal / term_months` each month;
    /// otherwise the amortizing-annuity formula
    /// `P * r * (1+r)^n / ((1+r)^n - 1)` applies.
    pub fn monthly_payment(&self) -> Decimal {
        fils(self.monthly_payment_exact())
    }

    /// The monthly payment at full precision, for internal simulation.
    ///
    /// Schedules iterate on the unrounded figure so that rounding error
    /// does not accumulate across long terms.
    pub(crate) fn monthly_payment_exact(&self) -> Decimal {
        if self.monthly_rate.is_zero() {
            return self.request.principal / Decimal::from(self.request.term_months);
        }

        let factor = compound_factor(self.monthly_rate, self.request.term_months);
        self.request.principal * self.monthly_rate * factor / (factor - Decimal::ONE)
    }

    /// Headline figures for the loan under the standard payment.
    ///
    /// The effective rate is total interest as a percentage of the
    /// principal, rounded to 2 decimal places.
    pub fn summary(&self) -> LoanSummary {
        let payment = self.monthly_payment_exact();
        let total_payment = payment * Decimal::from(self.request.term_months);
        let total_interest = total_payment - self.request.principal;

        LoanSummary {
            monthly_payment: fils(payment),
            total_payment: fils(total_payment),
            total_interest: fils(total_interest),
            effective_rate_percent: round_rate(
                total_interest / self.request.principal * Decimal::ONE_HUNDRED,
            ),
        }
    }
}

/// Computes `(1 + rate)^n` by iterated multiplication.
///
/// Kept in `Decimal` throughout; terms are bounded by the nominal loan
/// term so the loop is small.
fn compound_factor(rate: Decimal, n: u32) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..n {
        factor *= base;
    }
    factor
}
