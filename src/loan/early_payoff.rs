//! Early-payoff simulation.
//!
//! Simulates paying a loan down with an extra monthly amount and/or a
//! one-time lump sum, and reports the resulting schedule, totals and
//! months saved against the nominal term.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AmortizationRow, AuditWarning, EarlyPayoff, PaymentScenario};
use crate::money::fils;

use super::calculator::LoanCalculator;

/// Balances at or below this are treated as cleared.
const CLEARED_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

impl LoanCalculator {
    /// Simulates paying the loan under the given scenario.
    ///
    /// Each month the standard payment plus the scenario's extra amount is
    /// applied; the lump sum is added in its designated month. The final
    /// payment is reduced so the balance is never overpaid. The simulation
    /// stops when the balance is cleared or the nominal term is reached,
    /// whichever comes first; a balance left at the term boundary is
    /// surfaced as `final_balance` together with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// when the scenario carries a negative payment amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use wfs_engine::loan::LoanCalculator;
    /// use wfs_engine::models::{LoanRequest, PaymentScenario};
    ///
    /// let loan = LoanCalculator::new(LoanRequest {
    ///     principal: Decimal::from(12000),
    ///     annual_rate_percent: Decimal::from(6),
    ///     term_months: 12,
    /// })
    /// .unwrap();
    ///
    /// let payoff = loan.simulate_early_payoff(&PaymentScenario::standard()).unwrap();
    /// assert_eq!(payoff.total_months, 12);
    /// assert_eq!(payoff.months_saved, 0);
    /// ```
    pub fn simulate_early_payoff(&self, scenario: &PaymentScenario) -> EngineResult<EarlyPayoff> {
        self.run_simulation(self.monthly_payment_exact(), scenario)
    }

    /// Simulates paying the loan with a caller-supplied base payment.
    ///
    /// Same mechanics as [`simulate_early_payoff`](Self::simulate_early_payoff),
    /// but the monthly payment is the given figure (a budgeted amount, say)
    /// instead of the annuity payment. A payment too small to clear the
    /// loan leaves the remainder in `final_balance` with a `TERM_BOUNDARY`
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// when the payment is not positive or the scenario carries a negative
    /// amount.
    pub fn simulate_with_payment(
        &self,
        base_payment: Decimal,
        scenario: &PaymentScenario,
    ) -> EngineResult<EarlyPayoff> {
        if base_payment <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "base_payment".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        self.run_simulation(base_payment, scenario)
    }

    fn run_simulation(
        &self,
        base_payment: Decimal,
        scenario: &PaymentScenario,
    ) -> EngineResult<EarlyPayoff> {
        scenario.validate()?;

        let term_months = self.request().term_months;

        let mut schedule: Vec<AmortizationRow> = Vec::new();
        let mut balance = self.request().principal;
        let mut total_interest = Decimal::ZERO;
        let mut total_payment = Decimal::ZERO;
        let mut month = 0u32;

        while balance > CLEARED_THRESHOLD && month < term_months {
            month += 1;

            let interest = balance * self.monthly_rate();
            let mut payment = base_payment + scenario.extra_monthly;
            if scenario.lump_sum > Decimal::ZERO && month == scenario.lump_month {
                payment += scenario.lump_sum;
            }
            if payment > balance + interest {
                payment = balance + interest;
            }

            let principal = payment - interest;
            balance -= principal;
            total_interest += interest;
            total_payment += payment;

            schedule.push(AmortizationRow {
                month,
                payment: fils(payment),
                principal: fils(principal),
                interest: fils(interest),
                balance: fils(balance),
            });
        }

        let mut warnings = Vec::new();
        if balance > CLEARED_THRESHOLD {
            warnings.push(AuditWarning {
                code: "TERM_BOUNDARY".to_string(),
                message: format!(
                    "balance of {} remains after the nominal term of {} months",
                    fils(balance),
                    term_months
                ),
                severity: "medium".to_string(),
            });
        }

        debug!(
            months = month,
            total_interest = %fils(total_interest),
            "simulated early payoff"
        );

        Ok(EarlyPayoff {
            schedule,
            total_months: month,
            total_interest: fils(total_interest),
            total_payment: fils(total_payment),
            months_saved: term_months - month,
            final_balance: fils(balance.max(Decimal::ZERO)),
            warnings,
        })
    }
}
