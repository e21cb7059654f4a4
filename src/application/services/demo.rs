//! Demonstration service
//!
//! Runs every domain operation over the configured inputs and collects the
//! results into a [`DemoReport`] for the CLI to render.

use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{
    count_vowels, factorial, factorial_is_exact, find_max, find_min, integer_square_root,
    is_palindrome, mean, pi_approximation, reverse_array, standard_deviation, Circle, Rectangle,
    Shape, MAX_EXACT_FACTORIAL,
};

/// Results of the numeric algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericReport {
    pub isqrt_input: i64,
    pub isqrt: i64,
    pub pi_iterations: i64,
    pub pi: f64,
    pub factorial_input: u32,
    pub factorial: u64,
    /// False when `factorial` wrapped past `u64::MAX`
    pub factorial_exact: bool,
}

/// Descriptive statistics of a non-empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub values: Vec<f64>,
    pub mean: f64,
    pub standard_deviation: f64,
    pub min: f64,
    pub max: f64,
}

/// A sequence before and after in-place reversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversalReport {
    pub before: Vec<i32>,
    pub after: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeCheck {
    pub text: String,
    pub is_palindrome: bool,
}

/// Results of the string checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    pub palindromes: Vec<PalindromeCheck>,
    pub vowel_text: String,
    pub vowel_count: usize,
}

/// Everything `primer demo` prints.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub numeric: NumericReport,
    pub statistics: Summary,
    pub reversal: ReversalReport,
    pub text: TextReport,
    pub shapes: Vec<Shape>,
}

/// Service running the demonstration over [`Settings`].
pub struct DemoService {
    settings: Arc<Settings>,
}

impl DemoService {
    /// Create a new demonstration service.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run all sections.
    ///
    /// Fails only when the configured sample data is empty.
    pub fn run(&self) -> ApplicationResult<DemoReport> {
        debug!("run: starting demonstration");
        let report = DemoReport {
            numeric: self.numeric(),
            statistics: Self::summarize(&self.settings.sample_data)?,
            reversal: Self::reverse(&self.settings.reverse_data),
            text: self.text(),
            shapes: self.shapes(),
        };
        debug!("run: {} shapes", report.shapes.len());
        Ok(report)
    }

    pub fn numeric(&self) -> NumericReport {
        let s = &self.settings;
        debug!(
            "numeric: isqrt={}, pi_iterations={}, factorial={}",
            s.isqrt_input, s.pi_iterations, s.factorial_input
        );
        NumericReport {
            isqrt_input: s.isqrt_input,
            isqrt: integer_square_root(s.isqrt_input),
            pi_iterations: s.pi_iterations,
            pi: pi_approximation(s.pi_iterations),
            factorial_input: s.factorial_input,
            factorial: Self::factorial(s.factorial_input),
            factorial_exact: factorial_is_exact(s.factorial_input),
        }
    }

    /// `n!`; wraps past [`MAX_EXACT_FACTORIAL`], callers report that to the user.
    pub fn factorial(n: u32) -> u64 {
        if !factorial_is_exact(n) {
            debug!(
                "factorial: {}! exceeds u64, result wraps (exact up to {}!)",
                n, MAX_EXACT_FACTORIAL
            );
        }
        factorial(n)
    }

    /// Mean, standard deviation, min and max of `values`.
    ///
    /// # Errors
    /// `InvalidArgument` if `values` is empty.
    pub fn summarize(values: &[f64]) -> ApplicationResult<Summary> {
        debug!("summarize: {} values", values.len());
        Ok(Summary {
            values: values.to_vec(),
            mean: mean(values),
            standard_deviation: standard_deviation(values),
            min: find_min(values)?,
            max: find_max(values)?,
        })
    }

    pub fn reverse(values: &[i32]) -> ReversalReport {
        let mut after = values.to_vec();
        reverse_array(&mut after);
        ReversalReport {
            before: values.to_vec(),
            after,
        }
    }

    pub fn text(&self) -> TextReport {
        let palindromes = self
            .settings
            .palindromes
            .iter()
            .map(|text| PalindromeCheck {
                text: text.clone(),
                is_palindrome: is_palindrome(text),
            })
            .collect();
        TextReport {
            palindromes,
            vowel_text: self.settings.vowel_text.clone(),
            vowel_count: count_vowels(&self.settings.vowel_text),
        }
    }

    /// The configured circle and rectangle, created now.
    pub fn shapes(&self) -> Vec<Shape> {
        let c = &self.settings.circle;
        let r = &self.settings.rectangle;
        vec![
            Shape::with_style(Circle { radius: c.radius }, c.color.clone(), c.filled),
            Shape::with_style(
                Rectangle {
                    width: r.width,
                    height: r.height,
                },
                r.color.clone(),
                r.filled,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;

    #[test]
    fn test_summarize_empty_is_invalid_argument() {
        let result = DemoService::summarize(&[]);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_reverse_keeps_input() {
        let report = DemoService::reverse(&[1, 2, 3]);
        assert_eq!(report.before, vec![1, 2, 3]);
        assert_eq!(report.after, vec![3, 2, 1]);
    }

    #[test]
    fn test_numeric_flags_wrapped_factorial() {
        let settings = Settings {
            factorial_input: 25,
            ..Settings::default()
        };
        let report = DemoService::new(Arc::new(settings)).numeric();
        assert!(!report.factorial_exact);
        assert_eq!(report.factorial, factorial(25));
    }

    #[test]
    fn test_factorial_past_limit_still_returns() {
        assert_eq!(
            DemoService::factorial(MAX_EXACT_FACTORIAL + 1),
            factorial(MAX_EXACT_FACTORIAL + 1)
        );
    }
}
