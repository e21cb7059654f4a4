//! Integration tests for the numeric algorithms

use rstest::rstest;

use primer::domain::{factorial, integer_square_root, pi_approximation};

#[test]
fn given_fifty_when_integer_square_root_then_seven() {
    assert_eq!(integer_square_root(50), 7);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(15)]
#[case(16)]
#[case(17)]
#[case(10_000)]
#[case(1_000_001)]
fn given_non_negative_n_when_integer_square_root_then_k_squared_brackets_n(#[case] n: i64) {
    // Act
    let k = integer_square_root(n);

    // Assert
    assert!(k * k <= n);
    assert!(n < (k + 1) * (k + 1));
}

#[test]
fn given_one_million_iterations_when_approximating_pi_then_within_tolerance() {
    // Act
    let pi = pi_approximation(1_000_000);

    // Assert
    assert!((pi - 3.14159265).abs() < 1e-5, "pi={}", pi);
}

#[test]
fn given_more_iterations_when_approximating_pi_then_error_shrinks() {
    let coarse = (pi_approximation(100) - std::f64::consts::PI).abs();
    let fine = (pi_approximation(10_000) - std::f64::consts::PI).abs();
    assert!(fine < coarse);
}

#[test]
fn given_non_positive_iterations_when_approximating_pi_then_four() {
    assert_eq!(pi_approximation(0), 4.0);
    assert_eq!(pi_approximation(-10), 4.0);
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(10, 3_628_800)]
fn given_small_n_when_factorial_then_exact(#[case] n: u32, #[case] expected: u64) {
    assert_eq!(factorial(n), expected);
}
