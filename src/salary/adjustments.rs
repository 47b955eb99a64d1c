//! Post-deduction salary adjustments.
//!
//! The advanced calculation mode applies three adjustments on top of the
//! net salary: housing compensation and a free-form addition are added,
//! a free-form removal is subtracted. None of them interact with the
//! deduction rules.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SalaryAdjustments};
use crate::money::fils;

/// The result of applying the post-deduction adjustments, including the
/// audit step.
#[derive(Debug, Clone)]
pub struct AdjustmentsResult {
    /// The net salary after the adjustments, rounded to fils.
    pub final_total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the post-deduction adjustments to a net salary:
/// `net + salary_addition - salary_removal + housing_compensation`.
///
/// A removal larger than the net salary produces a negative final figure;
/// the engine reports it as calculated and leaves flagging it to the
/// presentation layer.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wfs_engine::models::SalaryAdjustments;
/// use wfs_engine::salary::apply_adjustments;
///
/// let adjustments = SalaryAdjustments {
///     housing_compensation: Decimal::from(100),
///     salary_addition: Decimal::from(50),
///     salary_removal: Decimal::from(25),
/// };
///
/// let net = Decimal::from_str("1074.365").unwrap();
/// let result = apply_adjustments(net, &adjustments, 1);
/// assert_eq!(result.final_total, Decimal::from_str("1199.365").unwrap());
/// ```
pub fn apply_adjustments(
    net_salary: Decimal,
    adjustments: &SalaryAdjustments,
    step_number: u32,
) -> AdjustmentsResult {
    let final_total = fils(
        net_salary + adjustments.salary_addition - adjustments.salary_removal
            + adjustments.housing_compensation,
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_adjustments".to_string(),
        rule_name: "Post-Deduction Adjustments".to_string(),
        input: serde_json::json!({
            "net_salary": net_salary.to_string(),
            "housing_compensation": adjustments.housing_compensation.to_string(),
            "salary_addition": adjustments.salary_addition.to_string(),
            "salary_removal": adjustments.salary_removal.to_string()
        }),
        output: serde_json::json!({ "final_total": final_total.to_string() }),
        reasoning: format!(
            "{} + {} - {} + {} = {}",
            net_salary,
            adjustments.salary_addition,
            adjustments.salary_removal,
            adjustments.housing_compensation,
            final_total
        ),
    };

    AdjustmentsResult {
        final_total,
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

    /// AJ-001: all three adjustments combine into the final figure
    #[test]
    fn test_all_adjustments_applied() {
        let adjustments = SalaryAdjustments {
            housing_compensation: dec("100"),
            salary_addition: dec("50"),
            salary_removal: dec("25"),
        };

        let result = apply_adjustments(dec("1074.365"), &adjustments, 5);

        assert_eq!(result.final_total, dec("1199.365"));
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.rule_id, "salary_adjustments");
    }

    /// AJ-002: no adjustments leave the net salary unchanged
    #[test]
    fn test_no_adjustments_is_identity() {
        let result = apply_adjustments(dec("1074.365"), &SalaryAdjustments::none(), 5);
        assert_eq!(result.final_total, dec("1074.365"));
    }

    /// AJ-003: a removal larger than the net goes negative as calculated
    #[test]
    fn test_removal_can_exceed_net() {
        let adjustments = SalaryAdjustments {
            housing_compensation: Decimal::ZERO,
            salary_addition: Decimal::ZERO,
            salary_removal: dec("1200"),
        };

        let result = apply_adjustments(dec("1074.365"), &adjustments, 5);
        assert_eq!(result.final_total, dec("-125.635"));
    }

    #[test]
    fn test_final_total_is_rounded_to_fils() {
        let adjustments = SalaryAdjustments {
            housing_compensation: dec("33.3333"),
            salary_addition: Decimal::ZERO,
            salary_removal: Decimal::ZERO,
        };

        let result = apply_adjustments(dec("1000"), &adjustments, 5);
        assert_eq!(result.final_total, dec("1033.333"));
    }
}
