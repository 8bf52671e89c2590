//! Shared types for the BMI calculator.
//!
//! This crate has no GUI dependency. It holds:
//! - the evaluator that turns a weight and a height into a [`BmiReport`]
//! - the [`FormState`] behind the desktop form (calculate / reset)
//! - the single error kind, [`EvaluateError::InvalidInput`]

pub mod error;
pub mod evaluator;
pub mod form;

// Re-export for convenience
pub use error::{EvaluateError, Field, Reason};
pub use evaluator::{BmiReport, Category, Measurement, Rgba, evaluate};
pub use form::{FormState, Outcome};
