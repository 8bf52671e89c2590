//! Error type for BMI evaluation.

use std::fmt;

/// Which form field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
    /// The computed quotient rather than either input.
    Bmi,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Weight => f.write_str("weight"),
            Field::Height => f.write_str("height"),
            Field::Bmi => f.write_str("BMI"),
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Empty or whitespace-only text.
    Missing,
    NotANumber,
    /// `NaN` or infinity.
    NotFinite,
    /// Zero or negative.
    NotPositive,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::Missing => "value is missing",
            Reason::NotANumber => "not a number",
            Reason::NotFinite => "not a finite number",
            Reason::NotPositive => "must be greater than zero",
        };
        f.write_str(text)
    }
}

/// Error returned by the evaluator.
///
/// There is exactly one kind of failure: an input is not a positive real
/// number, or the computed BMI is not finite. The variant carries the
/// offending field so callers can log it, while the form shows a single
/// generic warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: Reason },
}

impl EvaluateError {
    pub fn invalid(field: Field, reason: Reason) -> Self {
        EvaluateError::InvalidInput { field, reason }
    }

    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            EvaluateError::InvalidInput { field, .. } => *field,
        }
    }

    pub fn reason(&self) -> Reason {
        match self {
            EvaluateError::InvalidInput { reason, .. } => *reason,
        }
    }
}
