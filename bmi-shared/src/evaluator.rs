//! The BMI evaluator.
//!
//! `bmi = weight / height²`, with weight in kilograms and height in meters,
//! classified into four fixed bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EvaluateError, Field, Reason};

/// An sRGB color with straight (unmultiplied) alpha.
///
/// Kept free of any GUI crate so the evaluator stays portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Accent `#1abc9c` at 20% opacity, shown while no category is displayed.
    pub const NEUTRAL: Rgba = Rgba::rgba(26, 188, 156, 51);
}

/// A validated weight/height pair.
///
/// Both values are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    weight_kg: f64,
    height_m: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self, EvaluateError> {
        check(Field::Weight, weight_kg)?;
        check(Field::Height, height_m)?;
        Ok(Self {
            weight_kg,
            height_m,
        })
    }

    /// Parse the raw text of the weight and height fields.
    ///
    /// Surrounding whitespace is ignored. Weight is validated before height.
    pub fn parse(weight: &str, height: &str) -> Result<Self, EvaluateError> {
        let weight_kg = parse_field(Field::Weight, weight)?;
        let height_m = parse_field(Field::Height, height)?;
        Ok(Self {
            weight_kg,
            height_m,
        })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }

    /// Compute and classify.
    ///
    /// Fails when the quotient itself is not finite, either because the
    /// height squared underflows to zero or because the division overflows.
    pub fn evaluate(&self) -> Result<BmiReport, EvaluateError> {
        let bmi = self.bmi();
        if !bmi.is_finite() {
            return Err(EvaluateError::invalid(Field::Bmi, Reason::NotFinite));
        }
        Ok(BmiReport {
            bmi,
            category: Category::classify(bmi),
        })
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64, EvaluateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EvaluateError::invalid(field, Reason::Missing));
    }
    let value = text
        .parse::<f64>()
        .map_err(|_| EvaluateError::invalid(field, Reason::NotANumber))?;
    check(field, value)?;
    Ok(value)
}

fn check(field: Field, value: f64) -> Result<(), EvaluateError> {
    if !value.is_finite() {
        return Err(EvaluateError::invalid(field, Reason::NotFinite));
    }
    if value <= 0.0 {
        return Err(EvaluateError::invalid(field, Reason::NotPositive));
    }
    Ok(())
}

/// BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Half-open bands. Values in `[24.9, 25)` and from `29.9` up fall
    /// through to `Obese`; the gap between the Normal and Overweight bands is
    /// intentional and must not be closed.
    pub fn classify(bmi: f64) -> Category {
        if bmi < 18.5 {
            Category::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            Category::Normal
        } else if (25.0..29.9).contains(&bmi) {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Panel fill: blue, green, yellow, red.
    pub fn color(&self) -> Rgba {
        match self {
            Category::Underweight => Rgba::rgb(0x34, 0x98, 0xdb),
            Category::Normal => Rgba::rgb(0x2e, 0xcc, 0x71),
            Category::Overweight => Rgba::rgb(0xf1, 0xc4, 0x0f),
            Category::Obese => Rgba::rgb(0xe7, 0x4c, 0x3c),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: Category,
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.bmi, self.category)
    }
}

/// Parse the weight and height text and evaluate.
///
/// ```
/// use bmi_shared::{evaluate, Category};
///
/// let report = evaluate("70", "1.75").unwrap();
/// assert_eq!(report.category, Category::Normal);
/// assert_eq!(format!("{:.2}", report.bmi), "22.86");
/// ```
pub fn evaluate(weight: &str, height: &str) -> Result<BmiReport, EvaluateError> {
    Measurement::parse(weight, height)?.evaluate()
}
