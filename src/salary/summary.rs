//! Salary summary composition.
//!
//! Combines the per-rule calculations into the full Workforce Support
//! salary summary: allowance breakdown, taxable portion, deductions, and
//! before/after-tax totals. The base-salary deduction rule and the
//! allowance deduction are two pure functions composed here; there is no
//! shared state between calls.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::ENGINE_VERSION;
use crate::config::WfsConfig;
use crate::error::EngineResult;
use crate::models::{
    AllowanceBreakdown, AuditTrace, SalaryAdjustments, SalaryCalculation, SalaryRequest,
    SalarySummary,
};
use crate::money::{fils, percent};

use super::additional::adjust_additional;
use super::adjustments::apply_adjustments;
use super::base_tax::base_salary_tax;
use super::children::children_increment;
use super::postgrad::post_grad_increase;

/// Computes the full salary calculation for a request.
///
/// Resolves the degree profile, applies the children, post-graduate and
/// salary-cap rules, derives the deductions, and wraps everything in a
/// stamped [`SalaryCalculation`] envelope with an audit trace. Every
/// derived monetary quantity is rounded to fils as it is produced.
///
/// # Errors
///
/// * [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
///   when the base salary is not positive
/// * [`EngineError::UnknownDegree`](crate::error::EngineError::UnknownDegree)
///   when the degree code does not resolve to a profile
pub fn calculate_salary(
    request: &SalaryRequest,
    config: &WfsConfig,
) -> EngineResult<SalaryCalculation> {
    calculate_advanced_salary(request, &SalaryAdjustments::none(), config)
}

/// Computes the full salary calculation with post-deduction adjustments.
///
/// The advanced calculation mode: the deduction rules run exactly as in
/// [`calculate_salary`], then housing compensation, salary addition and
/// salary removal are applied on top of the net salary to produce the
/// envelope's `final_total`. When every adjustment is zero no extra audit
/// step is recorded and `final_total` equals `summary.total_after_tax`.
///
/// # Errors
///
/// In addition to the [`calculate_salary`] errors, returns
/// [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// when any adjustment amount is negative.
pub fn calculate_advanced_salary(
    request: &SalaryRequest,
    adjustments: &SalaryAdjustments,
    config: &WfsConfig,
) -> EngineResult<SalaryCalculation> {
    let started = Instant::now();

    request.validate()?;
    adjustments.validate()?;
    let profile = config.degree(&request.degree_code)?;

    let social_allowance = profile.social_allowance.for_status(request.marital_status);
    let social_allowance_increase = profile
        .social_allowance_increase
        .for_status(request.marital_status);

    let children = children_increment(request.num_children, &config.allowances().children, 1);
    let post_grad = post_grad_increase(
        request.post_grad_status,
        &config.allowances().post_grad,
        2,
    );
    let adjusted = adjust_additional(
        request.base_salary,
        &profile.additional,
        config.allowances().salary_cap,
        3,
    );

    let total_allowance = fils(
        social_allowance
            + social_allowance_increase
            + profile.degree_increment
            + children.amount
            + post_grad.amount
            + adjusted.additional.total(),
    );

    // Only the social allowance and degree increment are subject to the
    // contribution rate.
    let taxable_allowance = fils(social_allowance + profile.degree_increment);
    let allowance_tax = fils(taxable_allowance * percent(config.deductions().tax_rate_percent));

    let base_tax = base_salary_tax(request.base_salary, config.deductions(), 4);

    let total_tax = fils(allowance_tax + base_tax.tax);
    let total_before_tax = fils(request.base_salary + total_allowance);
    let total_after_tax = fils(total_before_tax - total_tax);

    let summary = SalarySummary {
        base_before_tax: fils(request.base_salary),
        allowance_before_tax: total_allowance,
        total_before_tax,
        base_after_tax: fils(request.base_salary - base_tax.tax),
        allowance_after_tax: fils(total_allowance - allowance_tax),
        total_deducted: total_tax,
        total_after_tax,
    };

    let allowance = AllowanceBreakdown {
        social_allowance,
        social_allowance_increase,
        degree_increment: profile.degree_increment,
        children_increment: children.amount,
        post_grad_increase: post_grad.amount,
        additional: adjusted.additional,
        total: total_allowance,
        taxable: taxable_allowance,
    };

    let mut steps = vec![
        children.audit_step,
        post_grad.audit_step,
        adjusted.audit_step,
        base_tax.audit_step,
    ];

    let final_total = if adjustments.is_none() {
        summary.total_after_tax
    } else {
        let applied = apply_adjustments(summary.total_after_tax, adjustments, 5);
        steps.push(applied.audit_step);
        applied.final_total
    };

    debug!(
        degree = %request.degree_code,
        total_after_tax = %summary.total_after_tax,
        final_total = %final_total,
        "computed salary summary"
    );

    Ok(SalaryCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: chrono::Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        request: request.clone(),
        adjustments: adjustments.clone(),
        allowance,
        summary,
        final_total,
        audit_trace: AuditTrace {
            steps,
            warnings: vec![],
            duration_us: started.elapsed().as_micros() as u64,
        },
    })
}

/// Computes just the salary summary for a request.
///
/// Thin wrapper over [`calculate_salary`] for callers that don't need the
/// breakdown or audit trace.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wfs_engine::config::ConfigLoader;
/// use wfs_engine::models::{MaritalStatus, PostGradStatus, SalaryRequest};
/// use wfs_engine::salary::compute_salary_summary;
///
/// let config = ConfigLoader::builtin().unwrap();
/// let request = SalaryRequest {
///     base_salary: Decimal::from(500),
///     marital_status: MaritalStatus::Single,
///     degree_code: "high_school_only".to_string(),
///     num_children: 2,
///     post_grad_status: PostGradStatus::None,
/// };
///
/// let summary = compute_salary_summary(&request, &config).unwrap();
/// assert_eq!(summary.total_after_tax, Decimal::from_str("1074.365").unwrap());
/// ```
pub fn compute_salary_summary(
    request: &SalaryRequest,
    config: &WfsConfig,
) -> EngineResult<SalarySummary> {
    Ok(calculate_salary(request, config)?.summary)
}
