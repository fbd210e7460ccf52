//! Fixture invariants checked by `fixgen verify`.

use crate::config::FixtureConfig;
use crate::core::sample::sorted_copy;

/// Check a parsed fixture against its invariants:
/// - input holds exactly `count` values
/// - expected has as many values as input
/// - every value lies in `[0, max_value]`
/// - expected is non-decreasing
/// - sorting input reproduces expected exactly
///
/// Returns one message per violation; empty means the fixture is valid.
pub fn validate_fixture(cfg: &FixtureConfig, input: &[i64], expected: &[i64]) -> Vec<String> {
    validate_with_sorted(cfg, input, &sorted_copy(input), expected)
}

/// Same checks as [`validate_fixture`], comparing `expected` against an
/// already sorted copy of `input`.
pub fn validate_with_sorted(
    cfg: &FixtureConfig,
    input: &[i64],
    sorted_input: &[i64],
    expected: &[i64],
) -> Vec<String> {
    let mut errors = Vec::new();

    if input.len() != cfg.count {
        errors.push(format!(
            "input: expected {} values, found {}",
            cfg.count,
            input.len()
        ));
    }
    if expected.len() != input.len() {
        errors.push(format!(
            "expected: length {} does not match input length {}",
            expected.len(),
            input.len()
        ));
    }

    check_range(cfg, "input", input, &mut errors);
    check_range(cfg, "expected", expected, &mut errors);

    if let Some(index) = first_descent(expected) {
        errors.push(format!(
            "expected: not non-decreasing at index {} ({} > {})",
            index,
            expected[index],
            expected[index + 1]
        ));
    }

    if let Some(index) = first_difference(sorted_input, expected) {
        errors.push(format!(
            "expected: differs from sorted input at index {}",
            index
        ));
    }

    errors
}

fn check_range(cfg: &FixtureConfig, label: &str, values: &[i64], errors: &mut Vec<String>) {
    let mut offending = values
        .iter()
        .enumerate()
        .filter(|(_, value)| !cfg.in_range(**value));
    if let Some((index, value)) = offending.next() {
        let remaining = offending.count();
        errors.push(format!(
            "{}: value {} at index {} outside [0, {}] ({} more)",
            label, value, index, cfg.max_value, remaining
        ));
    }
}

/// Index `i` of the first adjacent pair with `values[i] > values[i + 1]`.
pub fn first_descent(values: &[i64]) -> Option<usize> {
    values.windows(2).position(|pair| pair[0] > pair[1])
}

fn first_difference(left: &[i64], right: &[i64]) -> Option<usize> {
    let shared = left.len().min(right.len());
    left.iter()
        .zip(right)
        .position(|(a, b)| a != b)
        .or_else(|| (left.len() != right.len()).then_some(shared))
}
