//! Core data models for the WFS calculation engine.
//!
//! This module contains all the domain models used throughout the engine:
//! calculation requests, salary summaries, loan schedules and the audit
//! trace attached to salary calculations.

mod audit;
mod loan;
mod request;
mod salary;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use loan::{AmortizationRow, EarlyPayoff, LoanSummary, Strategy, StrategyResult};
pub use request::{
    LoanRequest, MaritalStatus, PaymentScenario, PostGradStatus, SalaryAdjustments, SalaryRequest,
};
pub use salary::{AdjustedAdditional, AllowanceBreakdown, SalaryCalculation, SalarySummary};
