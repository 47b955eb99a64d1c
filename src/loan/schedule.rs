//! Month-by-month amortization schedules.
//!
//! [`AmortizationSchedule`] is a lazy iterator over the months of a loan
//! under the standard payment. The running balance is carried at full
//! precision; each emitted [`AmortizationRow`] is rounded to fils.

use rust_decimal::Decimal;

use crate::models::AmortizationRow;
use crate::money::fils;

use super::calculator::LoanCalculator;

/// A lazy iterator over the months of a loan's amortization schedule.
///
/// Produced by [`LoanCalculator::amortization_schedule`]. Each month the
/// interest accrues on the remaining balance, the rest of the payment
/// retires principal, and the final payment is reduced so the balance
/// lands exactly on zero.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    monthly_rate: Decimal,
    payment: Decimal,
    balance: Decimal,
    month: u32,
    term_months: u32,
}

impl AmortizationSchedule {
    fn new(calculator: &LoanCalculator) -> Self {
        Self {
            monthly_rate: calculator.monthly_rate(),
            payment: calculator.monthly_payment_exact(),
            balance: calculator.request().principal,
            month: 0,
            term_months: calculator.request().term_months,
        }
    }
}

impl Iterator for AmortizationSchedule {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<AmortizationRow> {
        if self.month >= self.term_months || self.balance <= Decimal::ZERO {
            return None;
        }
        self.month += 1;

        let interest = self.balance * self.monthly_rate;
        // The final payment only covers what is left.
        let payment = self.payment.min(self.balance + interest);
        let principal = payment - interest;
        self.balance -= principal;
        if self.balance < Decimal::ZERO {
            self.balance = Decimal::ZERO;
        }

        Some(AmortizationRow {
            month: self.month,
            payment: fils(payment),
            principal: fils(principal),
            interest: fils(interest),
            balance: fils(self.balance),
        })
    }
}

impl LoanCalculator {
    /// Returns the amortization schedule under the standard payment.
    ///
    /// The schedule runs for at most the nominal term and stops early if
    /// the balance reaches zero first.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use wfs_engine::loan::LoanCalculator;
    /// use wfs_engine::models::LoanRequest;
    ///
    /// let loan = LoanCalculator::new(LoanRequest {
    ///     principal: Decimal::from(12000),
    ///     annual_rate_percent: Decimal::from(6),
    ///     term_months: 12,
    /// })
    /// .unwrap();
    ///
    /// let schedule: Vec<_> = loan.amortization_schedule().collect();
    /// assert_eq!(schedule.len(), 12);
    /// assert_eq!(schedule[11].balance, Decimal::from_str_exact("0.000").unwrap());
    /// ```
    pub fn amortization_schedule(&self) -> AmortizationSchedule {
        AmortizationSchedule::new(self)
    }
}
