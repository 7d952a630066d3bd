//! Custom assertions for points-to results

use andersen_pta::PtaResult;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Assert that `var` points to exactly `expected`
pub fn assert_points_to(result: &PtaResult, var: &str, expected: &[&str]) {
    let actual = result.points_to(var).cloned().unwrap_or_default();
    assert_eq!(actual, names(expected), "points-to set of '{var}'");
}

/// Assert that `var` points to at least `expected`
pub fn assert_points_to_superset(result: &PtaResult, var: &str, expected: &[&str]) {
    let actual = result.points_to(var).cloned().unwrap_or_default();
    let missing: Vec<_> = names(expected).difference(&actual).cloned().collect();
    assert!(
        missing.is_empty(),
        "'{var}' is missing {missing:?}; has {actual:?}"
    );
}

/// Assert that `var` has no entry in the result
pub fn assert_absent(result: &PtaResult, var: &str) {
    assert!(
        !result.contains(var),
        "Expected no entry for '{var}', got {:?}",
        result.points_to(var)
    );
}
