//! Salary Engine for the Workforce Support scheme.
//!
//! This module contains the calculation rules for deriving a salary
//! summary from a request: children increment, post-graduate bonus, the
//! salary-cap adjustment of the additional allowance, the base-salary
//! deduction rule, the post-deduction adjustments of the advanced mode,
//! and the composition of all of these into the final before/after-tax
//! figures.

mod additional;
mod adjustments;
mod base_tax;
mod children;
mod postgrad;
mod summary;

pub use additional::{AdditionalAdjustmentResult, adjust_additional};
pub use adjustments::{AdjustmentsResult, apply_adjustments};
pub use base_tax::{BaseTaxResult, base_salary_tax};
pub use children::{ChildrenIncrementResult, children_increment};
pub use postgrad::{PostGradIncreaseResult, post_grad_increase};
pub use summary::{calculate_advanced_salary, calculate_salary, compute_salary_summary};
