use bmi_shared::FormState;
use egui::{Color32, CornerRadius, Margin, RichText};

use crate::theme;

/// Rounded panel whose fill encodes the category.
pub fn result_panel(ui: &mut egui::Ui, state: &FormState) {
    let text = RichText::new(state.headline())
        .size(theme::RESULT_SIZE)
        .strong();
    let text = if state.outcome().is_some() {
        text.color(Color32::WHITE)
    } else {
        text
    };

    egui::Frame::new()
        .fill(theme::color(state.panel_color()))
        .corner_radius(CornerRadius::same(15))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(text);
            });
        });
}
