//! Configuration types for the Workforce Support scheme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The tables are immutable
//! after load: a [`WfsConfig`] is built once at startup and only read from
//! thereafter.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::MaritalStatus;

/// Metadata about the allowance scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// The human-readable name of the scheme (e.g. "Workforce Support").
    pub name: String,
    /// The country the scheme applies to.
    pub country: String,
    /// ISO currency code for all monetary values (e.g. "KWD").
    pub currency: String,
    /// The version or effective date of the tables.
    pub version: String,
    /// URL to the official scheme documentation.
    pub source_url: String,
}

/// A pair of monetary values keyed by marital status.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowancePair {
    /// The amount for single employees.
    pub single: Decimal,
    /// The amount for married employees.
    pub married: Decimal,
}

impl AllowancePair {
    /// Selects the amount applicable to the given marital status.
    pub fn for_status(&self, status: MaritalStatus) -> Decimal {
        match status {
            MaritalStatus::Single => self.single,
            MaritalStatus::Married => self.married,
        }
    }
}

/// The "additional" allowance sub-components paid alongside the social
/// allowance: cost of living (الغلاء), bonus (المكافأة) and increment
/// (الزيادة). The increment sub-component is subject to the salary cap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdditionalAllowance {
    /// Cost-of-living component. Never capped.
    pub cost_of_living: Decimal,
    /// Bonus component. Never capped.
    pub bonus: Decimal,
    /// Increment component. Reduced or zeroed by the salary-cap rule.
    pub increment: Decimal,
}

impl AdditionalAllowance {
    /// The sum of all three sub-components.
    pub fn total(&self) -> Decimal {
        self.cost_of_living + self.bonus + self.increment
    }
}

/// The allowance profile for a single degree tier.
#[derive(Debug, Clone, Deserialize)]
pub struct DegreeProfile {
    /// The human-readable English label for this tier.
    pub name: String,
    /// The Arabic label for this tier.
    pub name_ar: String,
    /// Social allowance by marital status.
    pub social_allowance: AllowancePair,
    /// Social allowance increase by marital status.
    pub social_allowance_increase: AllowancePair,
    /// Fixed increment paid for the degree itself.
    pub degree_increment: Decimal,
    /// Additional allowance sub-components.
    pub additional: AdditionalAllowance,
}

/// Degrees configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DegreesConfig {
    /// Map of degree code to allowance profile.
    pub degrees: HashMap<String, DegreeProfile>,
}

/// PIFSS deduction parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionPolicy {
    /// The contribution rate applied to taxable amounts, as a percentage.
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: Decimal,
    /// The flat deduction applied to base salaries at or above the threshold.
    pub flat_base_tax: Decimal,
    /// Base salaries at or above this figure pay the flat deduction instead
    /// of the rate-based one.
    pub flat_tax_threshold: Decimal,
}

fn default_tax_rate() -> Decimal {
    // 10.5%
    Decimal::new(105, 1)
}

/// Per-child increment parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildrenPolicy {
    /// The increment paid per child.
    pub per_child: Decimal,
    /// The maximum number of children counted.
    pub max_children: u32,
}

/// Post-graduate qualification bonuses, paid untaxed.
#[derive(Debug, Clone, Deserialize)]
pub struct PostGradBonuses {
    /// Bonus for a master's degree.
    pub master: Decimal,
    /// Bonus for a doctorate.
    pub doctorate: Decimal,
}

/// Allowance-side policy parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowancePolicy {
    /// The base-salary figure at which the increment sub-component is
    /// reduced to keep `base_salary + increment` within the cap.
    pub salary_cap: Decimal,
    /// Per-child increment parameters.
    pub children: ChildrenPolicy,
    /// Post-graduate bonuses.
    pub post_grad: PostGradBonuses,
}

/// Policy configuration file structure (policy.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Deduction parameters.
    pub deductions: DeductionPolicy,
    /// Allowance parameters.
    pub allowances: AllowancePolicy,
}

/// The complete Workforce Support configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various YAML
/// files in a scheme configuration directory.
#[derive(Debug, Clone)]
pub struct WfsConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// Degree profiles keyed by code.
    degrees: HashMap<String, DegreeProfile>,
    /// Deduction and allowance policy.
    policy: PolicyConfig,
}

impl WfsConfig {
    /// Creates a new WfsConfig from its component parts.
    pub fn new(
        metadata: SchemeMetadata,
        degrees: HashMap<String, DegreeProfile>,
        policy: PolicyConfig,
    ) -> Self {
        Self {
            metadata,
            degrees,
            policy,
        }
    }

    /// Returns the scheme metadata.
    pub fn metadata(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all degree profiles.
    pub fn degrees(&self) -> &HashMap<String, DegreeProfile> {
        &self.degrees
    }

    /// Resolves a degree profile by its code.
    ///
    /// Unknown codes are a validation error: the request is rejected with
    /// [`EngineError::UnknownDegree`] and no partial result is produced.
    pub fn degree(&self, code: &str) -> EngineResult<&DegreeProfile> {
        self.degrees
            .get(code)
            .ok_or_else(|| EngineError::UnknownDegree {
                code: code.to_string(),
            })
    }

    /// Returns the deduction parameters.
    pub fn deductions(&self) -> &DeductionPolicy {
        &self.policy.deductions
    }

    /// Returns the allowance parameters.
    pub fn allowances(&self) -> &AllowancePolicy {
        &self.policy.allowances
    }
}
