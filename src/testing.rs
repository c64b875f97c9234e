//! Testing helpers.

use assert_float_eq::*;

use crate::engine::Probabilities;

fn assert_same_len(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
}

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_same_len(expected, actual);
    for (&expected, &actual) in expected.iter().zip(actual) {
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_same_len(expected, actual);
    for (&expected, &actual) in expected.iter().zip(actual) {
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Checks the labels, their order and the values of every alternative.
pub fn assert_probabilities_relative(expected: &[(&str, &[f64])], actual: &Probabilities, epsilon: f64) {
    let labels: Vec<_> = actual.iter().map(|(label, _)| label).collect();
    let expected_labels: Vec<_> = expected.iter().map(|(label, _)| *label).collect();
    assert_eq!(expected_labels, labels);
    for (&(_, expected), (_, actual)) in expected.iter().zip(actual.iter()) {
        assert_slice_f64_relative(expected, actual, epsilon);
    }
}
