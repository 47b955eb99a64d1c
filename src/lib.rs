//! Calculation engine for the Kuwaiti Workforce Support (WFS) scheme.
//!
//! This crate provides the financial core behind a public-sector salary and
//! loan calculator: degree-based allowance lookup, PIFSS deduction rules,
//! and loan amortization with early-payoff strategy comparison. All monetary
//! values are Kuwaiti dinars carried as [`rust_decimal::Decimal`] with
//! 3-decimal (fils) precision.
//!
//! The engine is pure and stateless: callers construct plain request records,
//! invoke a calculation, and receive plain result records. Rendering those
//! results is the responsibility of a separate presentation layer.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loan;
pub mod models;
pub mod money;
pub mod salary;

/// The version of the engine, stamped onto calculation results.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
