//! Loan calculation result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditWarning;

/// One month of an amortization schedule.
///
/// Monetary fields are rounded to fils; the balance is clamped at zero and
/// the schedule terminates the month it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// The 1-based month index.
    pub month: u32,
    /// The payment made this month.
    pub payment: Decimal,
    /// The portion of the payment that reduced the principal.
    pub principal: Decimal,
    /// The portion of the payment that covered interest.
    pub interest: Decimal,
    /// The remaining balance after this month's payment. Never negative.
    pub balance: Decimal,
}

/// The outcome of an early-payoff simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyPayoff {
    /// The month-by-month schedule of the simulation.
    pub schedule: Vec<AmortizationRow>,
    /// The number of months the simulation ran for.
    pub total_months: u32,
    /// Total interest paid over the simulation.
    pub total_interest: Decimal,
    /// Principal plus total interest.
    pub total_payment: Decimal,
    /// Months saved against the nominal term.
    pub months_saved: u32,
    /// The balance left when the simulation stopped. Nonzero only when the
    /// nominal term was reached before the loan was cleared.
    pub final_balance: Decimal,
    /// Warnings raised during the simulation, such as hitting the term
    /// boundary with an uncleared balance.
    pub warnings: Vec<AuditWarning>,
}

/// Headline figures for a loan under the standard payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// The standard monthly payment.
    pub monthly_payment: Decimal,
    /// Monthly payment times the nominal term.
    pub total_payment: Decimal,
    /// Total payment minus the principal.
    pub total_interest: Decimal,
    /// Total interest as a percentage of the principal, to 2 decimal
    /// places.
    pub effective_rate_percent: Decimal,
}

/// A named payment strategy preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    /// The display label for the strategy.
    pub name: String,
    /// Extra amount paid every month.
    pub extra: Decimal,
    /// One-time lump sum amount.
    pub lump: Decimal,
    /// The month the lump sum is applied at (0 = none).
    pub lump_month: u32,
}

/// A strategy annotated with its simulated outcome against the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// The strategy that was simulated.
    #[serde(flatten)]
    pub strategy: Strategy,
    /// Months the simulation ran for.
    pub total_months: u32,
    /// Total interest paid under this strategy.
    pub total_interest: Decimal,
    /// Principal plus total interest under this strategy.
    pub total_payment: Decimal,
    /// Months saved against the nominal term.
    pub months_saved: u32,
    /// Baseline interest minus this strategy's interest.
    pub interest_saved: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_amortization_row_serializes_fixed_point() {
        let row = AmortizationRow {
            month: 1,
            payment: dec("1032.797"),
            principal: dec("972.797"),
            interest: dec("60.000"),
            balance: dec("11027.203"),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"month\":1"));
        assert!(json.contains("\"payment\":\"1032.797\""));
        assert!(json.contains("\"interest\":\"60.000\""));
    }

    #[test]
    fn test_strategy_result_flattens_strategy_fields() {
        let result = StrategyResult {
            strategy: Strategy {
                name: "Extra KWD 50/month".to_string(),
                extra: dec("50"),
                lump: dec("0"),
                lump_month: 0,
            },
            total_months: 11,
            total_interest: dec("360.000"),
            total_payment: dec("12360.000"),
            months_saved: 1,
            interest_saved: dec("33.500"),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"name\":\"Extra KWD 50/month\""));
        assert!(json.contains("\"interest_saved\":\"33.500\""));

        let back: StrategyResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_early_payoff_round_trip() {
        let payoff = EarlyPayoff {
            schedule: vec![],
            total_months: 12,
            total_interest: dec("393.564"),
            total_payment: dec("12393.564"),
            months_saved: 0,
            final_balance: dec("0.000"),
            warnings: vec![],
        };

        let json = serde_json::to_string(&payoff).unwrap();
        let back: EarlyPayoff = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payoff);
    }
}
