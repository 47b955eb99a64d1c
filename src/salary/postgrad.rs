//! Post-graduate bonus calculation functionality.
//!
//! Holders of a master's degree or doctorate receive a fixed addition to
//! the allowance. The bonus is exempt from the PIFSS deduction.

use rust_decimal::Decimal;

use crate::config::PostGradBonuses;
use crate::models::{AuditStep, PostGradStatus};

/// The result of resolving the post-graduate bonus, including the audit
/// step.
#[derive(Debug, Clone)]
pub struct PostGradIncreaseResult {
    /// The bonus amount (zero when no qualification is held).
    pub amount: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the post-graduate bonus for a qualification status.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use wfs_engine::config::PostGradBonuses;
/// use wfs_engine::models::PostGradStatus;
/// use wfs_engine::salary::post_grad_increase;
///
/// let bonuses = PostGradBonuses {
///     master: Decimal::from(75),
///     doctorate: Decimal::from(150),
/// };
///
/// let result = post_grad_increase(PostGradStatus::Doctorate, &bonuses, 1);
/// assert_eq!(result.amount, Decimal::from(150));
/// ```
pub fn post_grad_increase(
    status: PostGradStatus,
    bonuses: &PostGradBonuses,
    step_number: u32,
) -> PostGradIncreaseResult {
    let amount = status.bonus(bonuses);

    let status_str = match status {
        PostGradStatus::None => "none",
        PostGradStatus::Master => "master",
        PostGradStatus::Doctorate => "doctorate",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "post_grad_increase".to_string(),
        rule_name: "Post-Graduate Increase".to_string(),
        input: serde_json::json!({ "post_grad_status": status_str }),
        output: serde_json::json!({ "amount": amount.to_string(), "taxed": false }),
        reasoning: format!("Post-graduate status '{}' adds {} untaxed", status_str, amount),
    };

    PostGradIncreaseResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bonuses() -> PostGradBonuses {
        PostGradBonuses {
            master: dec("75"),
            doctorate: dec("150"),
        }
    }

    #[test]
    fn test_none_pays_nothing() {
        let result = post_grad_increase(PostGradStatus::None, &bonuses(), 1);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_master_pays_seventy_five() {
        let result = post_grad_increase(PostGradStatus::Master, &bonuses(), 1);
        assert_eq!(result.amount, dec("75"));
        assert!(result.audit_step.reasoning.contains("master"));
    }

    #[test]
    fn test_doctorate_pays_one_fifty() {
        let result = post_grad_increase(PostGradStatus::Doctorate, &bonuses(), 1);
        assert_eq!(result.amount, dec("150"));
    }

    #[test]
    fn test_bonus_is_marked_untaxed() {
        let result = post_grad_increase(PostGradStatus::Master, &bonuses(), 2);
        assert!(!result.audit_step.output["taxed"].as_bool().unwrap());
        assert_eq!(result.audit_step.step_number, 2);
    }
}
