//! Desktop BMI calculator.
//!
//! One window: a short explanation, a name/weight/height form, two action
//! buttons and a result panel colored by category. The evaluation itself
//! lives in `bmi_shared`; this crate only draws and wires it up.

pub mod components;
pub mod config;
pub mod error;
pub mod theme;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};

use bmi_shared::FormState;
use egui::RichText;

use components::{action_buttons, invalid_input_warning, measurement_form, result_panel};

const EXPLANATION: &str = "BMI (Body Mass Index) is a value that indicates whether your \
    weight is appropriate for your height. It is used in everyday life to spot whether \
    a person is underweight, at a normal weight, overweight or obese, helping people \
    get a sense of their health.";

pub struct BmiApp {
    form: FormState,
}

impl BmiApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: FormState::new(config.fallback_name.clone()),
        }
    }

    /// Called once by eframe before the first frame.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        theme::apply(&cc.egui_ctx);
        Self::new(config)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Draw one frame. Separate from [`eframe::App::update`] so it can run
    /// against a bare `egui::Context`.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin {
            left: 40,
            right: 40,
            top: 20,
            bottom: 20,
        });

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("BMI Calculator").size(theme::TITLE_SIZE).strong());
                ui.add_space(5.0);
                ui.label(RichText::new(EXPLANATION).size(theme::BODY_SIZE));
            });
            ui.add_space(10.0);

            let submitted = measurement_form(ui, &mut self.form);
            if submitted {
                self.form.calculate();
            }
            ui.add_space(15.0);

            action_buttons(ui, &mut self.form);
            ui.add_space(20.0);

            result_panel(ui, &self.form);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                egui::warn_if_debug_build(ui);
            });
        });

        invalid_input_warning(ctx, &mut self.form);
    }
}

impl eframe::App for BmiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
