//! Salary calculation result models.
//!
//! This module contains the [`SalarySummary`] record consumed by the
//! presentation layer, plus the richer [`SalaryCalculation`] envelope that
//! carries the full allowance breakdown and audit trace.
//!
//! All monetary fields are rounded to fils and rescaled to 3 decimal
//! places, so serialization produces stable fixed-point strings such as
//! `"1074.365"`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuditTrace;
use super::request::{SalaryAdjustments, SalaryRequest};

/// The salary figures derived from one request, before and after the PIFSS
/// deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// The base salary before any deduction.
    pub base_before_tax: Decimal,
    /// The total Workforce Support allowance before any deduction.
    pub allowance_before_tax: Decimal,
    /// Base salary plus allowance, before any deduction.
    pub total_before_tax: Decimal,
    /// The base salary net of its deduction.
    pub base_after_tax: Decimal,
    /// The allowance net of its deduction.
    pub allowance_after_tax: Decimal,
    /// The combined deduction taken from base salary and allowance.
    pub total_deducted: Decimal,
    /// The net salary: total before tax minus the total deduction.
    pub total_after_tax: Decimal,
}

/// The adjusted "additional" allowance after the salary-cap rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedAdditional {
    /// Cost-of-living component, unchanged by the cap.
    pub cost_of_living: Decimal,
    /// Bonus component, unchanged by the cap.
    pub bonus: Decimal,
    /// Increment component after the cap adjustment.
    pub increment: Decimal,
    /// Whether the cap reduced (or zeroed) the increment.
    pub cap_applied: bool,
}

impl AdjustedAdditional {
    /// The sum of all three sub-components.
    pub fn total(&self) -> Decimal {
        self.cost_of_living + self.bonus + self.increment
    }
}

/// The individual components making up the total Workforce Support
/// allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Social allowance for the selected marital status.
    pub social_allowance: Decimal,
    /// Social allowance increase for the selected marital status.
    pub social_allowance_increase: Decimal,
    /// Fixed increment paid for the degree tier.
    pub degree_increment: Decimal,
    /// Increment for children, after clamping.
    pub children_increment: Decimal,
    /// Untaxed post-graduate bonus.
    pub post_grad_increase: Decimal,
    /// Additional sub-components after the salary-cap adjustment.
    pub additional: AdjustedAdditional,
    /// The sum of all components.
    pub total: Decimal,
    /// The portion subject to the deduction rate: social allowance plus
    /// degree increment only.
    pub taxable: Decimal,
}

/// The complete result of a salary calculation.
///
/// Wraps the [`SalarySummary`] together with the request it was derived
/// from, the allowance breakdown, and a complete audit trace of the rules
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The request the calculation was derived from.
    pub request: SalaryRequest,
    /// The post-deduction adjustments that were applied, if any.
    #[serde(default)]
    pub adjustments: SalaryAdjustments,
    /// The allowance component breakdown.
    pub allowance: AllowanceBreakdown,
    /// The before/after-tax summary figures.
    pub summary: SalarySummary,
    /// The net salary after the post-deduction adjustments. Equal to
    /// `summary.total_after_tax` when no adjustments were requested.
    pub final_total: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
