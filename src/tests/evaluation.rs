use super::common::*;
use crate::domain::{AccessScenario, IdentifierCounts};
use crate::evaluation::{
    CalcMethod, ComplianceStatus, EvaluationEngine, RiskLevel, BULK_THRESHOLD,
};

fn score(counts: IdentifierCounts) -> crate::evaluation::EvaluationResult {
    EvaluationEngine::default().score(AccessScenario::InternalStaffCombined, &counts)
}

#[test]
fn small_overlap_grades_low_risk_and_passes() {
    let result = score(network_and_email(100, 0, 100));

    assert!(result.cpi_trigger);
    assert_eq!(result.calc_method, CalcMethod::Intersection);
    assert_eq!(result.estimated_persons, 100);
    assert!((result.utilization - 0.1).abs() < 1e-9);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.status, ComplianceStatus::Pass);
}

#[test]
fn estimate_is_bounded_by_the_smaller_category() {
    let result = score(network_and_email(60_000, 0, 45_000));

    assert_eq!(result.estimated_persons, 45_000);
    assert!((result.utilization - 45.0).abs() < 1e-9);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.status, ComplianceStatus::Pass);
    assert_eq!(result.gap, 55_000);
}

#[test]
fn crossing_the_threshold_fails_with_negative_gap() {
    let result = score(network_and_email(150_000, 0, 200_000));

    assert_eq!(result.estimated_persons, 150_000);
    assert!((result.utilization - 150.0).abs() < 1e-9);
    assert_eq!(result.status, ComplianceStatus::Fail);
    assert_eq!(result.gap, -50_000);
}

#[test]
fn network_only_never_forms_a_combination() {
    let result = score(network_and_email(500, 0, 0));

    assert!(!result.cpi_trigger);
    assert_eq!(result.calc_method, CalcMethod::NoCombination);
    assert_eq!(result.estimated_persons, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.cpi_explanation.contains("demographic/contact data is required"));
}

#[test]
fn demographic_only_never_forms_a_combination() {
    let result = score(network_and_email(0, 0, 2_000));

    assert!(!result.cpi_trigger);
    assert_eq!(result.estimated_persons, 0);
    assert!(result.cpi_explanation.contains("network data is required"));
}

#[test]
fn empty_input_reports_no_data() {
    let result = score(IdentifierCounts::default());

    assert!(!result.cpi_trigger);
    assert_eq!(result.estimated_persons, 0);
    assert_eq!(result.status, ComplianceStatus::Pass);
    assert_eq!(
        result.cpi_explanation,
        "No identifier data provided for combination assessment."
    );
}

#[test]
fn trigger_matches_category_presence_exactly() {
    let cases = [
        (0_u64, 0_u64, false),
        (1, 0, false),
        (0, 1, false),
        (1, 1, true),
        (250_000, 3, true),
    ];
    for (network, demographic, expected) in cases {
        let result = score(network_and_email(network, 0, demographic));
        assert_eq!(result.cpi_trigger, expected, "network={network} demographic={demographic}");
        if !expected {
            assert_eq!(result.estimated_persons, 0);
        } else {
            assert_eq!(result.estimated_persons, network.min(demographic));
        }
    }
}

#[test]
fn status_flips_exactly_at_the_bulk_threshold() {
    let just_under = score(network_and_email(BULK_THRESHOLD - 1, 0, BULK_THRESHOLD));
    assert_eq!(just_under.estimated_persons, BULK_THRESHOLD - 1);
    assert_eq!(just_under.status, ComplianceStatus::Pass);
    assert_eq!(just_under.gap, 1);

    let at_threshold = score(network_and_email(BULK_THRESHOLD, 0, BULK_THRESHOLD));
    assert_eq!(at_threshold.status, ComplianceStatus::Fail);
    assert_eq!(at_threshold.gap, 0);
}

#[test]
fn risk_grading_is_monotonic_across_the_cut_points() {
    // Estimates straddling the 20% and 40% utilization cuts.
    let graded: Vec<RiskLevel> = [10_000_u64, 20_000, 20_001, 40_000, 40_001, 150_000]
        .into_iter()
        .map(|estimate| score(network_and_email(estimate, 0, estimate)).risk_level)
        .collect();

    assert_eq!(
        graded,
        vec![
            RiskLevel::Low,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::High,
        ]
    );
    for pair in graded.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn cookie_and_phone_counters_feed_the_same_categories() {
    let counts = IdentifierCounts {
        client_id_cookie: 9_000,
        phone_number: 7_500,
        ..IdentifierCounts::default()
    };
    let result = score(counts);

    assert!(result.cpi_trigger);
    assert_eq!(result.estimated_persons, 7_500);
}

#[test]
fn combination_explanation_quotes_both_category_counts() {
    let result = score(network_and_email(60_000, 0, 45_000));

    assert!(result.cpi_explanation.contains("60,000"));
    assert!(result.cpi_explanation.contains("45,000"));
}

#[test]
fn scope_explanation_tracks_the_scenario_family() {
    let engine = EvaluationEngine::default();
    let counts = network_and_email(10, 0, 10);

    let internal = engine.score(AccessScenario::InternalStaffCombined, &counts);
    assert_eq!(internal.scope_explanation, "Aggregate across all internal staff");

    for scenario in [
        AccessScenario::TrustooEmailPopups,
        AccessScenario::SeventeenTrack,
        AccessScenario::QuickCep,
    ] {
        let external = engine.score(scenario, &counts);
        assert_eq!(external.scope_explanation, "Assessed per external application");
    }
}

#[test]
fn critical_is_reserved_above_high() {
    assert!(RiskLevel::Critical > RiskLevel::High);
    assert!(RiskLevel::Critical.warrants_warning());
}
