//! Salary-cap adjustment of the additional allowance.
//!
//! The increment sub-component of the additional allowance may not lift the
//! base salary past the salary cap (1250 under the published tables). The
//! cost-of-living and bonus sub-components are never capped.

use rust_decimal::Decimal;

use crate::config::AdditionalAllowance;
use crate::models::{AdjustedAdditional, AuditStep};

/// The result of applying the salary-cap rule, including the audit step.
#[derive(Debug, Clone)]
pub struct AdditionalAdjustmentResult {
    /// The additional allowance after the cap adjustment.
    pub additional: AdjustedAdditional,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Applies the salary-cap rule to the additional allowance.
///
/// If the base salary is at or above the cap the increment sub-component is
/// zeroed; otherwise the increment is reduced so that
/// `base_salary + increment <= salary_cap`:
/// `adjusted = min(increment, salary_cap - base_salary)`.
///
/// # Arguments
///
/// * `base_salary` - The base salary from the request
/// * `additional` - The additional allowance from the degree profile
/// * `salary_cap` - The cap from the allowance policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wfs_engine::config::AdditionalAllowance;
/// use wfs_engine::salary::adjust_additional;
///
/// let additional = AdditionalAllowance {
///     cost_of_living: Decimal::from(120),
///     bonus: Decimal::from(50),
///     increment: Decimal::from(50),
/// };
///
/// let result = adjust_additional(Decimal::from(1230), &additional, Decimal::from(1250), 1);
/// assert_eq!(result.additional.increment, Decimal::from(20));
/// assert!(result.additional.cap_applied);
/// ```
pub fn adjust_additional(
    base_salary: Decimal,
    additional: &AdditionalAllowance,
    salary_cap: Decimal,
    step_number: u32,
) -> AdditionalAdjustmentResult {
    let (adjusted_increment, reasoning) = if base_salary >= salary_cap {
        (
            Decimal::ZERO,
            format!(
                "Base salary {} is at or above the {} cap: increment zeroed",
                base_salary, salary_cap
            ),
        )
    } else {
        let remaining_to_cap = salary_cap - base_salary;
        let adjusted = additional.increment.min(remaining_to_cap);
        (
            adjusted,
            format!(
                "min({}, {} - {}) = {}",
                additional.increment, salary_cap, base_salary, adjusted
            ),
        )
    };

    let cap_applied = adjusted_increment != additional.increment;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_cap".to_string(),
        rule_name: "Salary Cap Adjustment".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "salary_cap": salary_cap.to_string(),
            "increment": additional.increment.to_string()
        }),
        output: serde_json::json!({
            "adjusted_increment": adjusted_increment.to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    };

    AdditionalAdjustmentResult {
        additional: AdjustedAdditional {
            cost_of_living: additional.cost_of_living,
            bonus: additional.bonus,
            increment: adjusted_increment,
            cap_applied,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn additional() -> AdditionalAllowance {
        AdditionalAllowance {
            cost_of_living: dec("120"),
            bonus: dec("50"),
            increment: dec("50"),
        }
    }

    /// SC-001: base at the cap zeroes the increment
    #[test]
    fn test_base_at_cap_zeroes_increment() {
        let result = adjust_additional(dec("1250"), &additional(), dec("1250"), 1);

        assert_eq!(result.additional.increment, Decimal::ZERO);
        assert!(result.additional.cap_applied);
        assert!(result.audit_step.reasoning.contains("zeroed"));
    }

    /// SC-002: base well below the cap keeps the full increment
    #[test]
    fn test_base_below_cap_keeps_full_increment() {
        let result = adjust_additional(dec("1200"), &additional(), dec("1250"), 1);

        assert_eq!(result.additional.increment, dec("50"));
        assert!(!result.additional.cap_applied);
    }

    /// SC-003: base near the cap gets a partial increment
    #[test]
    fn test_base_near_cap_gets_partial_increment() {
        let result = adjust_additional(dec("1230"), &additional(), dec("1250"), 1);

        assert_eq!(result.additional.increment, dec("20"));
        assert!(result.additional.cap_applied);
    }

    /// SC-004: base above the cap zeroes the increment
    #[test]
    fn test_base_above_cap_zeroes_increment() {
        let result = adjust_additional(dec("1500"), &additional(), dec("1250"), 1);

        assert_eq!(result.additional.increment, Decimal::ZERO);
        assert!(result.additional.cap_applied);
    }

    #[test]
    fn test_cost_of_living_and_bonus_never_capped() {
        let result = adjust_additional(dec("1500"), &additional(), dec("1250"), 1);

        assert_eq!(result.additional.cost_of_living, dec("120"));
        assert_eq!(result.additional.bonus, dec("50"));
        assert_eq!(result.additional.total(), dec("170"));
    }

    #[test]
    fn test_low_base_salary_unaffected() {
        let result = adjust_additional(dec("500"), &additional(), dec("1250"), 3);

        assert_eq!(result.additional.increment, dec("50"));
        assert_eq!(result.additional.total(), dec("220"));
        assert_eq!(result.audit_step.step_number, 3);
    }
}
