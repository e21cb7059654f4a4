//! Domain layer: pure computations and entities
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod numeric;
pub mod shape;
pub mod statistics;
pub mod text;

pub use error::{DomainError, DomainResult};
pub use numeric::{
    factorial, factorial_is_exact, integer_square_root, pi_approximation, MAX_EXACT_FACTORIAL,
};
pub use shape::{Circle, GeometricObject, Measurable, Rectangle, Shape, ShapeKind};
pub use statistics::{find_max, find_min, mean, reverse_array, standard_deviation, variance};
pub use text::{count_vowels, is_palindrome};
