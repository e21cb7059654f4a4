//! Numeric algorithms: integer square root, pi series, factorial

/// Largest `n` for which `factorial(n)` fits in a `u64`.
pub const MAX_EXACT_FACTORIAL: u32 = 20;

/// Whether `factorial(n)` is exact, i.e. does not wrap.
pub fn factorial_is_exact(n: u32) -> bool {
    n <= MAX_EXACT_FACTORIAL
}

/// Largest `k` with `k * k <= n`.
///
/// Linear scan, O(√n): only meant for small inputs.
/// Negative `n` is not rejected; the scan never starts and the result is 0.
pub fn integer_square_root(n: i64) -> i64 {
    let mut k: i64 = 0;
    while (k + 1)
        .checked_mul(k + 1)
        .is_some_and(|square| square <= n)
    {
        k += 1;
    }
    k
}

/// Approximates pi with the first `iterations` terms of the Leibniz series.
///
/// `pi = 4 * (1 - 1/3 + 1/5 - 1/7 + ...)`
///
/// Term 0 is the implicit 1; term `i` subtracts `1/(2i+1)` for odd `i` and
/// adds it for even `i`. `iterations <= 1` returns 4.0.
pub fn pi_approximation(iterations: i64) -> f64 {
    let mut sum = 1.0;
    for i in 1..iterations {
        let term = 1.0 / (2 * i + 1) as f64;
        if i % 2 != 0 {
            sum -= term;
        } else {
            sum += term;
        }
    }
    4.0 * sum
}

/// Iterative `n!`.
///
/// Exact up to [`MAX_EXACT_FACTORIAL`]; larger inputs wrap modulo 2^64.
pub fn factorial(n: u32) -> u64 {
    (2..=u64::from(n)).fold(1u64, |acc, i| acc.wrapping_mul(i))
}
