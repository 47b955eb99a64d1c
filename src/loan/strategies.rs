//! Payment strategy presets and comparison.
//!
//! The presets mirror the options offered in the Workforce Support
//! planning tool: the standard payment, three fixed extra monthly
//! amounts, and two one-time lump sums.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{PaymentScenario, Strategy, StrategyResult};
use crate::money::fils;

use super::calculator::LoanCalculator;

/// Returns the built-in payment strategy presets, in display order.
///
/// The first preset is always the standard payment, which the comparison
/// uses as its baseline.
pub fn payment_strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            name: "Standard Payment".to_string(),
            extra: Decimal::ZERO,
            lump: Decimal::ZERO,
            lump_month: 0,
        },
        Strategy {
            name: "Extra KWD 50/month".to_string(),
            extra: Decimal::from(50),
            lump: Decimal::ZERO,
            lump_month: 0,
        },
        Strategy {
            name: "Extra KWD 100/month".to_string(),
            extra: Decimal::from(100),
            lump: Decimal::ZERO,
            lump_month: 0,
        },
        Strategy {
            name: "Extra KWD 200/month".to_string(),
            extra: Decimal::from(200),
            lump: Decimal::ZERO,
            lump_month: 0,
        },
        Strategy {
            name: "KWD 1000 lump sum (Month 12)".to_string(),
            extra: Decimal::ZERO,
            lump: Decimal::from(1000),
            lump_month: 12,
        },
        Strategy {
            name: "KWD 2000 lump sum (Month 6)".to_string(),
            extra: Decimal::ZERO,
            lump: Decimal::from(2000),
            lump_month: 6,
        },
    ]
}

impl Strategy {
    fn scenario(&self) -> PaymentScenario {
        PaymentScenario {
            extra_monthly: self.extra,
            lump_sum: self.lump,
            lump_month: self.lump_month,
        }
    }
}

impl LoanCalculator {
    /// Simulates every built-in strategy against this loan.
    ///
    /// Results come back in preset declaration order; interest savings are
    /// measured against the standard-payment baseline, so the first entry
    /// always reports zero saved.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors, though the built-in presets are
    /// always valid scenarios.
    pub fn compare_payment_strategies(&self) -> EngineResult<Vec<StrategyResult>> {
        let baseline = self.simulate_early_payoff(&PaymentScenario::standard())?;

        let mut results = Vec::new();
        for strategy in payment_strategies() {
            let payoff = self.simulate_early_payoff(&strategy.scenario())?;
            results.push(StrategyResult {
                strategy,
                total_months: payoff.total_months,
                total_interest: payoff.total_interest,
                total_payment: payoff.total_payment,
                months_saved: payoff.months_saved,
                interest_saved: fils(baseline.total_interest - payoff.total_interest),
            });
        }

        debug!(strategies = results.len(), "compared payment strategies");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoanRequest;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn loan(principal: &str, rate: &str, term: u32) -> LoanCalculator {
        LoanCalculator::new(LoanRequest {
            principal: dec(principal),
            annual_rate_percent: dec(rate),
            term_months: term,
        })
        .unwrap()
    }

    /// ST-001: presets carry the published names in display order
    #[test]
    fn test_preset_names_and_order() {
        let names: Vec<String> = payment_strategies().into_iter().map(|s| s.name).collect();

        assert_eq!(
            names,
            vec![
                "Standard Payment",
                "Extra KWD 50/month",
                "Extra KWD 100/month",
                "Extra KWD 200/month",
                "KWD 1000 lump sum (Month 12)",
                "KWD 2000 lump sum (Month 6)",
            ]
        );
    }

    /// ST-002: the standard entry is its own baseline
    #[test]
    fn test_standard_entry_saves_nothing() {
        let results = loan("12000", "6", 12).compare_payment_strategies().unwrap();

        assert_eq!(results[0].strategy.name, "Standard Payment");
        assert_eq!(results[0].interest_saved, dec("0.000"));
        assert_eq!(results[0].months_saved, 0);
        assert_eq!(results[0].total_months, 12);
    }

    /// ST-003: every strategy saves a non-negative amount of interest
    #[test]
    fn test_savings_are_non_negative() {
        let results = loan("20000", "7.5", 60).compare_payment_strategies().unwrap();

        assert_eq!(results.len(), 6);
        for result in &results {
            assert!(
                result.interest_saved >= Decimal::ZERO,
                "{} saved {}",
                result.strategy.name,
                result.interest_saved
            );
            assert!(result.total_months <= 60);
        }
    }

    /// ST-004: larger extra payments save at least as much
    #[test]
    fn test_larger_extras_save_more() {
        let results = loan("20000", "7.5", 60).compare_payment_strategies().unwrap();

        // presets 1..=3 are the increasing extra-monthly tiers
        assert!(results[2].interest_saved >= results[1].interest_saved);
        assert!(results[3].interest_saved >= results[2].interest_saved);
        assert!(results[2].total_months <= results[1].total_months);
        assert!(results[3].total_months <= results[2].total_months);
    }

    #[test]
    fn test_earlier_lump_sum_beats_later_on_long_loan() {
        let results = loan("20000", "7.5", 60).compare_payment_strategies().unwrap();

        let later = &results[4]; // 1000 at month 12
        let earlier = &results[5]; // 2000 at month 6
        assert!(earlier.interest_saved > later.interest_saved);
    }
}
