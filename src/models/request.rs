//! Calculation request models.
//!
//! Requests are plain data records built by the presentation layer from
//! primitive form values. They carry no references to UI elements and no
//! state: each request is constructed per calculation call and discarded
//! once the result is produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PostGradBonuses;
use crate::error::{EngineError, EngineResult};

/// Marital status of the employee, selecting between the single and married
/// columns of the allowance tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    /// Single employee.
    Single,
    /// Married employee.
    Married,
}

/// Post-graduate qualification status.
///
/// The corresponding bonus amounts live in the allowance policy
/// ([`PostGradBonuses`]); the bonus is added to the allowance untaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostGradStatus {
    /// No post-graduate qualification.
    None,
    /// Master's degree.
    Master,
    /// Doctorate.
    Doctorate,
}

impl PostGradStatus {
    /// Returns the bonus amount for this status under the given policy.
    pub fn bonus(self, bonuses: &PostGradBonuses) -> Decimal {
        match self {
            PostGradStatus::None => Decimal::ZERO,
            PostGradStatus::Master => bonuses.master,
            PostGradStatus::Doctorate => bonuses.doctorate,
        }
    }
}

/// A request to compute a Workforce Support salary summary.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use wfs_engine::models::{MaritalStatus, PostGradStatus, SalaryRequest};
///
/// let request = SalaryRequest {
///     base_salary: Decimal::from(500),
///     marital_status: MaritalStatus::Single,
///     degree_code: "high_school_only".to_string(),
///     num_children: 2,
///     post_grad_status: PostGradStatus::None,
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The base salary in dinars. Must be greater than zero.
    pub base_salary: Decimal,
    /// Marital status, selecting the allowance column.
    pub marital_status: MaritalStatus,
    /// Key into the degree profile table.
    pub degree_code: String,
    /// Number of children. Values above the policy maximum are clamped.
    pub num_children: u32,
    /// Post-graduate qualification status.
    pub post_grad_status: PostGradStatus,
}

impl SalaryRequest {
    /// Validates the numeric fields of the request.
    ///
    /// Degree code resolution happens separately against the loaded
    /// configuration; this only checks ranges.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "base_salary".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Post-deduction adjustments applied on top of the net salary.
///
/// All three amounts default to zero; each must be non-negative. The
/// removal is subtracted, the other two are added, so the adjusted final
/// figure is `net + salary_addition - salary_removal + housing_compensation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryAdjustments {
    /// Housing compensation added after the deduction.
    #[serde(default)]
    pub housing_compensation: Decimal,
    /// A free-form addition to the net salary.
    #[serde(default)]
    pub salary_addition: Decimal,
    /// A free-form removal from the net salary.
    #[serde(default)]
    pub salary_removal: Decimal,
}

impl SalaryAdjustments {
    /// No adjustments: the final figure equals the net salary.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true when every adjustment is zero.
    pub fn is_none(&self) -> bool {
        self.housing_compensation.is_zero()
            && self.salary_addition.is_zero()
            && self.salary_removal.is_zero()
    }

    /// Validates that every adjustment amount is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, amount) in [
            ("housing_compensation", self.housing_compensation),
            ("salary_addition", self.salary_addition),
            ("salary_removal", self.salary_removal),
        ] {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A request to analyse a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// The amount borrowed. Must be greater than zero.
    pub principal: Decimal,
    /// Annual interest rate as a percentage (e.g. `6` for 6%). Must not be
    /// negative; zero is allowed and produces a straight-line payoff.
    pub annual_rate_percent: Decimal,
    /// The nominal term in months. Must be greater than zero.
    pub term_months: u32,
}

impl LoanRequest {
    /// Validates the request ranges.
    pub fn validate(&self) -> EngineResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "principal".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "annual_rate_percent".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.term_months == 0 {
            return Err(EngineError::InvalidInput {
                field: "term_months".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// One early-payoff simulation run: a fixed extra monthly payment plus an
/// optional lump sum applied at a specific month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentScenario {
    /// Extra amount paid every month on top of the standard payment.
    pub extra_monthly: Decimal,
    /// One-time extra payment. Ignored when zero.
    pub lump_sum: Decimal,
    /// The 1-based month the lump sum is applied at. Zero means no lump sum.
    pub lump_month: u32,
}

impl PaymentScenario {
    /// The baseline scenario: no extra payments of any kind.
    pub fn standard() -> Self {
        Self {
            extra_monthly: Decimal::ZERO,
            lump_sum: Decimal::ZERO,
            lump_month: 0,
        }
    }

    /// Validates that the payment amounts are not negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.extra_monthly < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "extra_monthly".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.lump_sum < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "lump_sum".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
