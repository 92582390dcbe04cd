//! Contract tests for the variance evaluator.
//!
//! These pin the externally observable behavior: threshold semantics,
//! degenerate-input outcomes, and purity. They are the gate between
//! "arithmetic is there" and "the contract holds."

use std::collections::BTreeMap;

use spendlens::variance::{evaluate, evaluate_series, Variance};

fn series_map(entries: &[(&str, &[f64])]) -> BTreeMap<String, Vec<f64>> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_vec()))
        .collect()
}

// ---------------------------------------------------------------------------
// Threshold semantics
// ---------------------------------------------------------------------------

#[test]
fn twenty_percent_change_exceeds_fifteen_percent_threshold() {
    let out = evaluate(&series_map(&[("Hardware", &[100.0, 120.0][..])]), 15.0);
    assert_eq!(
        out["Hardware"],
        Variance::Computed {
            relative_change: 0.2,
            high: true
        }
    );
}

#[test]
fn ten_percent_change_stays_under_fifteen_percent_threshold() {
    let out = evaluate(&series_map(&[("Hardware", &[100.0, 110.0][..])]), 15.0);
    match out["Hardware"] {
        Variance::Computed {
            relative_change,
            high,
        } => {
            assert!((relative_change - 0.1).abs() < 1e-12);
            assert!(!high, "10% change must not trip a 15% threshold");
        }
        other => panic!("expected computed outcome, got {:?}", other),
    }
}

#[test]
fn change_equal_to_threshold_is_not_high_variance() {
    // Strict > comparison, not >=.
    let out = evaluate_series(&[100.0, 115.0], 15.0);
    assert!(!out.is_high(), "delta exactly at threshold must stay normal");
    let just_over = evaluate_series(&[100.0, 115.1], 15.0);
    assert!(just_over.is_high());
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn zero_prior_period_is_indeterminate_not_an_error() {
    let out = evaluate(&series_map(&[("BC/DR", &[0.0, 50.0][..])]), 15.0);
    assert_eq!(out["BC/DR"], Variance::Indeterminate);
}

#[test]
fn single_period_series_is_not_applicable() {
    let out = evaluate(&series_map(&[("Telecom", &[100.0][..])]), 15.0);
    assert_eq!(out["Telecom"], Variance::NotApplicable);
}

#[test]
fn computed_change_is_never_infinite_or_nan() {
    let maps = [
        series_map(&[("A", &[0.0, 50.0][..])]),
        series_map(&[("B", &[1e-300, 1e300][..])]),
        series_map(&[("C", &[-100.0, 100.0][..])]),
    ];
    for map in &maps {
        for outcome in evaluate(map, 15.0).values() {
            if let Some(change) = outcome.relative_change() {
                assert!(change.is_finite(), "got non-finite change {}", change);
                assert!(change >= 0.0);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Purity and isolation
// ---------------------------------------------------------------------------

#[test]
fn evaluation_is_idempotent() {
    let map = series_map(&[
        ("Hardware", &[320.0, 305.0, 330.0][..]),
        ("Software", &[280.0, 280.0][..]),
        ("BC/DR", &[0.0, 35.0][..]),
    ]);
    let first = evaluate(&map, 12.5);
    let second = evaluate(&map, 12.5);
    assert_eq!(first, second);
}

#[test]
fn one_bad_category_never_blocks_the_rest() {
    let map = series_map(&[
        ("Cybersecurity", &[0.0, 220.0][..]),
        ("Maintenance", &[160.0][..]),
        ("Personnel", &[500.0, 400.0][..]),
    ]);
    let out = evaluate(&map, 10.0);
    assert_eq!(out.len(), 3);
    assert!(out["Personnel"].is_high());
}

// ---------------------------------------------------------------------------
// End-to-end scenario from the executive review
// ---------------------------------------------------------------------------

#[test]
fn halving_and_thirty_percent_growth_both_trip_a_twenty_percent_threshold() {
    let map = series_map(&[("A", &[200.0, 100.0][..]), ("B", &[200.0, 260.0][..])]);
    let out = evaluate(&map, 20.0);

    match out["A"] {
        Variance::Computed {
            relative_change,
            high,
        } => {
            assert!((relative_change - 1.0).abs() < 1e-12);
            assert!(high);
        }
        other => panic!("A: expected computed outcome, got {:?}", other),
    }
    match out["B"] {
        Variance::Computed {
            relative_change,
            high,
        } => {
            assert!((relative_change - 0.3).abs() < 1e-12);
            assert!(high);
        }
        other => panic!("B: expected computed outcome, got {:?}", other),
    }
}
