//! Children increment calculation functionality.
//!
//! The scheme pays a fixed increment per child, counting at most the policy
//! maximum (7 under the published tables).

use rust_decimal::Decimal;

use crate::config::ChildrenPolicy;
use crate::models::AuditStep;

/// The result of calculating the children increment, including the audit
/// step.
#[derive(Debug, Clone)]
pub struct ChildrenIncrementResult {
    /// The number of children actually counted, after clamping.
    pub counted_children: u32,
    /// The increment amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the children increment for a request.
///
/// The number of children is clamped to the policy maximum before the
/// per-child amount is applied, so the increment is monotonic and capped:
/// eight children pay the same as seven.
///
/// # Arguments
///
/// * `num_children` - The number of children on the request
/// * `policy` - The per-child amount and maximum from the loaded tables
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use wfs_engine::config::ChildrenPolicy;
/// use wfs_engine::salary::children_increment;
///
/// let policy = ChildrenPolicy {
///     per_child: Decimal::from(50),
///     max_children: 7,
/// };
///
/// let result = children_increment(2, &policy, 1);
/// assert_eq!(result.amount, Decimal::from(100));
///
/// let result = children_increment(9, &policy, 1);
/// assert_eq!(result.amount, Decimal::from(350));
/// ```
pub fn children_increment(
    num_children: u32,
    policy: &ChildrenPolicy,
    step_number: u32,
) -> ChildrenIncrementResult {
    let counted = num_children.min(policy.max_children);
    let amount = Decimal::from(counted) * policy.per_child;

    let clamped = counted != num_children;
    let reasoning = if clamped {
        format!(
            "{} children clamped to maximum {}: {} x {} = {}",
            num_children, policy.max_children, counted, policy.per_child, amount
        )
    } else {
        format!("{} x {} = {}", counted, policy.per_child, amount)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "children_increment".to_string(),
        rule_name: "Children Increment".to_string(),
        input: serde_json::json!({
            "num_children": num_children,
            "per_child": policy.per_child.to_string(),
            "max_children": policy.max_children
        }),
        output: serde_json::json!({
            "counted_children": counted,
            "amount": amount.to_string(),
            "clamped": clamped
        }),
        reasoning,
    };

    ChildrenIncrementResult {
        counted_children: counted,
        amount,
        audit_step,
    }
}
