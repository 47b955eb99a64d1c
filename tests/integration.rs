//! End-to-end tests for the Workforce Support engine.
//!
//! This suite drives the public API the way the planning tool does:
//! configuration loaded once, then salary and loan calculations against
//! it. It covers:
//! - The reference salary scenario across degree tiers
//! - Marital status, children, post-graduate and salary-cap rules
//! - The flat base-salary deduction above the threshold
//! - Loan summaries, schedules and early-payoff simulation
//! - Strategy comparison against the standard-payment baseline
//! - Error cases

use rust_decimal::Decimal;
use std::str::FromStr;

use wfs_engine::config::{ConfigLoader, WfsConfig};
use wfs_engine::error::EngineError;
use wfs_engine::loan::LoanCalculator;
use wfs_engine::models::{
    LoanRequest, MaritalStatus, PaymentScenario, PostGradStatus, SalaryAdjustments, SalaryRequest,
};
use wfs_engine::salary::{calculate_advanced_salary, calculate_salary, compute_salary_summary};

// =============================================================================
// Test Helpers
// =============================================================================

fn config() -> WfsConfig {
    ConfigLoader::load("./config/wfs").expect("Failed to load config")
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn salary_request(base: &str, degree: &str) -> SalaryRequest {
    SalaryRequest {
        base_salary: decimal(base),
        marital_status: MaritalStatus::Single,
        degree_code: degree.to_string(),
        num_children: 2,
        post_grad_status: PostGradStatus::None,
    }
}

fn loan(principal: &str, rate: &str, term: u32) -> LoanCalculator {
    LoanCalculator::new(LoanRequest {
        principal: decimal(principal),
        annual_rate_percent: decimal(rate),
        term_months: term,
    })
    .expect("valid loan request")
}

// =============================================================================
// Salary Scenarios
// =============================================================================

#[test]
fn test_reference_salary_scenario() {
    let summary = compute_salary_summary(&salary_request("500", "high_school_only"), &config())
        .expect("calculation should succeed");

    assert_eq!(summary.base_before_tax, decimal("500.000"));
    assert_eq!(summary.allowance_before_tax, decimal("657.000"));
    assert_eq!(summary.total_before_tax, decimal("1157.000"));
    assert_eq!(summary.total_deducted, decimal("82.635"));
    assert_eq!(summary.total_after_tax, decimal("1074.365"));
}

#[test]
fn test_top_tier_single_no_children() {
    let mut request = salary_request("800", "medical_engineering_pharmacy");
    request.num_children = 0;

    let calculation = calculate_salary(&request, &config()).unwrap();

    // 190 + 50 + 330 + 0 + 0 + (120 + 50 + 50) = 790
    assert_eq!(calculation.allowance.social_allowance, decimal("190"));
    assert_eq!(calculation.allowance.degree_increment, decimal("330"));
    assert_eq!(calculation.allowance.total, decimal("790.000"));
    // taxable = 190 + 330 = 520
    assert_eq!(calculation.allowance.taxable, decimal("520.000"));
}

#[test]
fn test_married_with_doctorate_and_many_children() {
    let request = SalaryRequest {
        base_salary: decimal("900"),
        marital_status: MaritalStatus::Married,
        degree_code: "other_bachelor_1".to_string(),
        num_children: 9,
        post_grad_status: PostGradStatus::Doctorate,
    };

    let calculation = calculate_salary(&request, &config()).unwrap();

    // children clamp at 7 x 50 = 350
    assert_eq!(calculation.allowance.children_increment, decimal("350.000"));
    assert_eq!(calculation.allowance.post_grad_increase, decimal("150"));
    // married column of the shared row: 278 social, 70 increase
    assert_eq!(calculation.allowance.social_allowance, decimal("278"));
    assert_eq!(calculation.allowance.social_allowance_increase, decimal("70"));
}

#[test]
fn test_flat_deduction_above_threshold() {
    let summary = compute_salary_summary(&salary_request("2000", "high_school_only"), &config())
        .unwrap();

    // base tax is the flat 157.500, not 2000 x 10.5%
    assert_eq!(summary.base_after_tax, decimal("1842.500"));
}

#[test]
fn test_salary_cap_trims_increment() {
    let capped = calculate_salary(&salary_request("1230", "high_school_only"), &config()).unwrap();

    // 1250 - 1230 leaves 20 of the 50 increment
    assert_eq!(capped.allowance.additional.increment, decimal("20.000"));
    assert!(capped.allowance.additional.cap_applied);
}

#[test]
fn test_advanced_mode_applies_post_deduction_adjustments() {
    let adjustments = SalaryAdjustments {
        housing_compensation: decimal("150"),
        salary_addition: decimal("75"),
        salary_removal: decimal("30"),
    };

    let calculation = calculate_advanced_salary(
        &salary_request("500", "high_school_only"),
        &adjustments,
        &config(),
    )
    .unwrap();

    // deduction figures are identical to the plain calculation
    assert_eq!(calculation.summary.total_after_tax, decimal("1074.365"));
    // 1074.365 + 75 - 30 + 150
    assert_eq!(calculation.final_total, decimal("1269.365"));

    // the adjustment step follows the four deduction rules
    assert_eq!(calculation.audit_trace.steps.len(), 5);
    assert_eq!(
        calculation.audit_trace.steps[4].rule_id,
        "salary_adjustments"
    );
}

#[test]
fn test_every_degree_tier_resolves() {
    let config = config();
    for code in config.degrees().keys() {
        let request = salary_request("600", code);
        let result = compute_salary_summary(&request, &config);
        assert!(result.is_ok(), "tier {} failed: {:?}", code, result.err());
    }
}

#[test]
fn test_audit_trace_is_complete() {
    let calculation = calculate_salary(&salary_request("500", "high_school_only"), &config())
        .unwrap();

    assert_eq!(calculation.audit_trace.steps.len(), 4);
    for (i, step) in calculation.audit_trace.steps.iter().enumerate() {
        assert_eq!(step.step_number, (i + 1) as u32);
        assert!(!step.reasoning.is_empty());
    }
}

#[test]
fn test_unknown_degree_code() {
    let result = compute_salary_summary(&salary_request("500", "no_such_degree"), &config());

    match result {
        Err(EngineError::UnknownDegree { code }) => assert_eq!(code, "no_such_degree"),
        other => panic!("Expected UnknownDegree, got {:?}", other),
    }
}

#[test]
fn test_builtin_config_matches_directory_config() {
    let from_dir = config();
    let builtin = ConfigLoader::builtin().unwrap();

    let request = salary_request("500", "high_school_only");
    let a = compute_salary_summary(&request, &from_dir).unwrap();
    let b = compute_salary_summary(&request, &builtin).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Loan Scenarios
// =============================================================================

#[test]
fn test_loan_summary_reference_figures() {
    let summary = loan("12000", "6", 12).summary();

    assert_eq!(summary.monthly_payment, decimal("1032.797"));
    assert_eq!(summary.total_payment, decimal("12393.566"));
    assert_eq!(summary.total_interest, decimal("393.566"));
    assert_eq!(summary.effective_rate_percent, decimal("3.28"));
}

#[test]
fn test_schedule_retires_the_principal() {
    let calculator = loan("25000", "4.9", 84);
    let schedule: Vec<_> = calculator.amortization_schedule().collect();

    assert_eq!(schedule.len(), 84);
    assert_eq!(schedule.last().unwrap().balance, decimal("0.000"));

    let principal: Decimal = schedule.iter().map(|row| row.principal).sum();
    let drift = (principal - decimal("25000")).abs();
    // one fils of rounding per emitted row
    assert!(drift <= decimal("0.084"), "drift {} too large", drift);
}

#[test]
fn test_standard_simulation_matches_nominal_term() {
    let payoff = loan("25000", "4.9", 84)
        .simulate_early_payoff(&PaymentScenario::standard())
        .unwrap();

    assert_eq!(payoff.total_months, 84);
    assert_eq!(payoff.months_saved, 0);
    assert_eq!(payoff.final_balance, decimal("0.000"));
    assert!(payoff.warnings.is_empty());
}

#[test]
fn test_extra_payments_shorten_the_loan() {
    let calculator = loan("25000", "4.9", 84);
    let baseline = calculator
        .simulate_early_payoff(&PaymentScenario::standard())
        .unwrap();
    let accelerated = calculator
        .simulate_early_payoff(&PaymentScenario {
            extra_monthly: decimal("100"),
            lump_sum: decimal("1000"),
            lump_month: 12,
        })
        .unwrap();

    assert!(accelerated.total_months < baseline.total_months);
    assert!(accelerated.total_interest < baseline.total_interest);
    assert_eq!(
        accelerated.months_saved,
        84 - accelerated.total_months
    );
    assert_eq!(accelerated.final_balance, decimal("0.000"));
}

#[test]
fn test_strategy_comparison_covers_all_presets() {
    let results = loan("25000", "4.9", 84).compare_payment_strategies().unwrap();

    assert_eq!(results.len(), 6);
    assert_eq!(results[0].strategy.name, "Standard Payment");
    assert_eq!(results[0].interest_saved, decimal("0.000"));

    for result in &results[1..] {
        assert!(result.interest_saved >= Decimal::ZERO);
        assert!(result.total_months <= 84);
        assert_eq!(result.months_saved, 84 - result.total_months);
    }
}

#[test]
fn test_zero_rate_loan_end_to_end() {
    let calculator = loan("8400", "0", 84);

    let summary = calculator.summary();
    assert_eq!(summary.monthly_payment, decimal("100.000"));
    assert_eq!(summary.total_interest, decimal("0.000"));
    assert_eq!(summary.effective_rate_percent, decimal("0.00"));

    let payoff = calculator
        .simulate_early_payoff(&PaymentScenario {
            extra_monthly: decimal("100"),
            lump_sum: Decimal::ZERO,
            lump_month: 0,
        })
        .unwrap();
    assert_eq!(payoff.total_months, 42);
    assert_eq!(payoff.total_payment, decimal("8400.000"));
}

#[test]
fn test_invalid_loan_is_rejected() {
    let result = LoanCalculator::new(LoanRequest {
        principal: decimal("-100"),
        annual_rate_percent: decimal("6"),
        term_months: 12,
    });

    match result {
        Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "principal"),
        other => panic!("Expected InvalidInput, got {:?}", other.map(|_| ())),
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_calculation_serializes_fixed_point_amounts() {
    let calculation = calculate_salary(&salary_request("500", "high_school_only"), &config())
        .unwrap();

    let json = serde_json::to_value(&calculation).unwrap();
    assert_eq!(json["summary"]["total_after_tax"], "1074.365");
    assert_eq!(json["summary"]["base_after_tax"], "447.500");
    assert_eq!(json["request"]["marital_status"], "SINGLE");
    assert!(json["calculation_id"].is_string());
}

#[test]
fn test_strategy_results_flatten_for_display() {
    let results = loan("12000", "6", 12).compare_payment_strategies().unwrap();

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[1]["name"], "Extra KWD 50/month");
    assert!(json[1]["interest_saved"].is_string());
}
