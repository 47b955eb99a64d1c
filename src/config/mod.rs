//! Configuration loading and management for the WFS calculation engine.
//!
//! This module provides functionality to load Workforce Support tables from
//! YAML files: scheme metadata, degree tier allowance profiles, and the
//! deduction/allowance policy. Tables are loaded once at startup into an
//! immutable [`WfsConfig`] and only read from thereafter.
//!
//! # Example
//!
//! ```
//! use wfs_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin().unwrap();
//! println!("Loaded scheme: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdditionalAllowance, AllowancePair, AllowancePolicy, ChildrenPolicy, DeductionPolicy,
    DegreeProfile, DegreesConfig, PolicyConfig, PostGradBonuses, SchemeMetadata, WfsConfig,
};
