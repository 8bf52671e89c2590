//! State behind the BMI form.

use serde::{Deserialize, Serialize};

use crate::evaluator::{BmiReport, Rgba, evaluate};

pub const DEFAULT_FALLBACK_NAME: &str = "User";

/// A displayed result: who it is for and what they got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub report: BmiReport,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub weight: String,
    pub height: String,
    outcome: Option<Outcome>,
    warning: bool,
    focus_name: bool,
    fallback_name: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_NAME)
    }
}

impl FormState {
    /// `fallback_name` is shown in the headline when the name field is empty.
    pub fn new(fallback_name: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            weight: String::new(),
            height: String::new(),
            outcome: None,
            warning: false,
            focus_name: false,
            fallback_name: fallback_name.into(),
        }
    }

    /// Evaluate the weight and height fields.
    ///
    /// Invalid input leaves the fields and the previous outcome alone and
    /// raises the warning instead.
    pub fn calculate(&mut self) {
        match evaluate(&self.weight, &self.height) {
            Ok(report) => {
                let name = self.display_name();
                tracing::info!(
                    name = %name,
                    bmi = report.bmi,
                    category = %report.category,
                    "calculated BMI"
                );
                self.outcome = Some(Outcome { name, report });
            }
            Err(e) => {
                tracing::warn!(field = %e.field(), reason = %e.reason(), "rejected input");
                self.warning = true;
            }
        }
    }

    /// Clear every field and put the panel back to neutral.
    pub fn reset(&mut self) {
        tracing::debug!("form reset");
        self.name.clear();
        self.weight.clear();
        self.height.clear();
        self.outcome = None;
        self.warning = false;
        self.focus_name = true;
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_warning(&self) -> bool {
        self.warning
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = false;
    }

    /// One-shot: true once after a reset, then false until the next reset.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_name)
    }

    pub fn headline(&self) -> String {
        match &self.outcome {
            Some(Outcome { name, report }) => format!("{name}, your BMI is {report}"),
            None => "Result: ".to_owned(),
        }
    }

    pub fn panel_color(&self) -> Rgba {
        self.outcome
            .as_ref()
            .map_or(Rgba::NEUTRAL, |o| o.report.category.color())
    }

    fn display_name(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            self.fallback_name.clone()
        } else {
            name.to_owned()
        }
    }
}
