//! Integration tests for the array statistics

use rstest::rstest;

use primer::domain::{find_max, find_min, reverse_array, standard_deviation, DomainError};

const SAMPLE: [f64; 7] = [12.5, 15.3, 18.7, 22.1, 14.9, 16.8, 20.3];

#[test]
fn given_sample_data_when_standard_deviation_then_population_value() {
    // Act
    let sd = standard_deviation(&SAMPLE);

    // Assert: divides by N (3.0941), not N-1 (3.3420)
    assert!((sd - 3.0941).abs() < 1e-4, "sd={}", sd);
    assert!((sd - 3.3420).abs() > 1e-2, "sd={}", sd);
}

#[test]
fn given_empty_or_constant_data_when_standard_deviation_then_zero() {
    assert_eq!(standard_deviation(&[]), 0.0);
    assert_eq!(standard_deviation(&[5.0, 5.0, 5.0]), 0.0);
}

#[rstest]
#[case(&[3.0])]
#[case(&[-1.0, -7.5, 2.25])]
#[case(&SAMPLE)]
#[case(&[0.0, -0.0, 4.0, 4.0])]
fn given_non_empty_data_when_finding_extremes_then_bound_every_element(#[case] values: &[f64]) {
    // Act
    let min = find_min(values).expect("min");
    let max = find_max(values).expect("max");

    // Assert
    for v in values {
        assert!(min <= *v && *v <= max, "min={} v={} max={}", min, v, max);
    }
}

#[test]
fn given_empty_data_when_finding_extremes_then_invalid_argument() {
    assert!(matches!(find_max(&[]), Err(DomainError::InvalidArgument(_))));
    assert!(matches!(find_min(&[]), Err(DomainError::InvalidArgument(_))));
}

#[test]
fn given_sequence_when_reversed_then_order_flips_in_place() {
    // Arrange
    let mut values = vec![1, 2, 3, 4, 5];

    // Act
    reverse_array(&mut values);

    // Assert
    assert_eq!(values, vec![5, 4, 3, 2, 1]);
}

#[test]
fn given_sequence_when_reversed_twice_then_restored() {
    let original = vec![9, -3, 0, 12, 7, 7];
    let mut values = original.clone();

    reverse_array(&mut values);
    reverse_array(&mut values);

    assert_eq!(values, original);
}

#[test]
fn given_subslice_when_reversed_then_rest_untouched() {
    let mut values = [1, 2, 3, 4, 5];

    reverse_array(&mut values[1..4]);

    assert_eq!(values, [1, 4, 3, 2, 5]);
}
