//! Base-salary deduction rule.
//!
//! Base salaries at or above the flat-tax threshold (1500 under the
//! published tables) pay a flat deduction of 157.500 instead of the
//! rate-based one. Below the threshold the deduction is the contribution
//! rate applied to the base salary.

use rust_decimal::Decimal;

use crate::config::DeductionPolicy;
use crate::models::AuditStep;
use crate::money::{fils, percent};

/// The result of the base-salary deduction rule, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseTaxResult {
    /// The deduction taken from the base salary, rounded to fils.
    pub tax: Decimal,
    /// Whether the flat deduction was applied instead of the rate.
    pub flat_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the PIFSS deduction on the base salary.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wfs_engine::config::DeductionPolicy;
/// use wfs_engine::salary::base_salary_tax;
///
/// let policy = DeductionPolicy {
///     tax_rate_percent: Decimal::from_str("10.5").unwrap(),
///     flat_base_tax: Decimal::from_str("157.500").unwrap(),
///     flat_tax_threshold: Decimal::from(1500),
/// };
///
/// let result = base_salary_tax(Decimal::from(1500), &policy, 1);
/// assert_eq!(result.tax, Decimal::from_str("157.500").unwrap());
/// assert!(result.flat_applied);
/// ```
pub fn base_salary_tax(
    base_salary: Decimal,
    policy: &DeductionPolicy,
    step_number: u32,
) -> BaseTaxResult {
    let flat_applied = base_salary >= policy.flat_tax_threshold;

    let (tax, reasoning) = if flat_applied {
        (
            fils(policy.flat_base_tax),
            format!(
                "Base salary {} >= {}: flat deduction of {}",
                base_salary, policy.flat_tax_threshold, policy.flat_base_tax
            ),
        )
    } else {
        let tax = fils(base_salary * percent(policy.tax_rate_percent));
        (
            tax,
            format!(
                "{} x {}% = {}",
                base_salary, policy.tax_rate_percent, tax
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary_tax".to_string(),
        rule_name: "Base Salary Deduction".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "tax_rate_percent": policy.tax_rate_percent.to_string(),
            "flat_tax_threshold": policy.flat_tax_threshold.to_string()
        }),
        output: serde_json::json!({
            "tax": tax.to_string(),
            "flat_applied": flat_applied
        }),
        reasoning,
    };

    BaseTaxResult {
        tax,
        flat_applied,
        audit_step,
    }
}
