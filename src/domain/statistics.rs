//! Array statistics over in-memory sequences

use crate::domain::error::{DomainError, DomainResult};

/// Arithmetic mean; 0.0 for an empty sequence.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by N, not N-1); 0.0 for an empty sequence.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    squared_deviations / values.len() as f64
}

/// Population standard deviation; 0.0 for an empty sequence.
pub fn standard_deviation(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Largest value of a non-empty sequence.
///
/// # Errors
/// [`DomainError::InvalidArgument`] if `values` is empty.
pub fn find_max(values: &[f64]) -> DomainResult<f64> {
    let (first, rest) = split_non_empty(values)?;
    let mut max = first;
    for &value in rest {
        if value > max {
            max = value;
        }
    }
    Ok(max)
}

/// Smallest value of a non-empty sequence.
///
/// # Errors
/// [`DomainError::InvalidArgument`] if `values` is empty.
pub fn find_min(values: &[f64]) -> DomainResult<f64> {
    let (first, rest) = split_non_empty(values)?;
    let mut min = first;
    for &value in rest {
        if value < min {
            min = value;
        }
    }
    Ok(min)
}

fn split_non_empty(values: &[f64]) -> DomainResult<(f64, &[f64])> {
    values
        .split_first()
        .map(|(first, rest)| (*first, rest))
        .ok_or_else(|| DomainError::InvalidArgument("array cannot be empty".to_string()))
}

/// Reverses `values` in place by swapping from both ends inward.
pub fn reverse_array(values: &mut [i32]) {
    if values.is_empty() {
        return;
    }
    let mut left = 0;
    let mut right = values.len() - 1;
    while left < right {
        values.swap(left, right);
        left += 1;
        right -= 1;
    }
}
