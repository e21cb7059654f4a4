//! Application layer: services and use cases
//!
//! This layer runs domain computations over configured inputs.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
