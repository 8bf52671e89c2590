use bmi_shared::FormState;
use egui::RichText;

use crate::theme;

const FIELD_WIDTH: f32 = 260.0;
const BUTTON_HEIGHT: f32 = 36.0;

/// Name, weight and height fields.
///
/// Returns true when Enter was pressed in one of them.
pub fn measurement_form(ui: &mut egui::Ui, state: &mut FormState) -> bool {
    let mut submitted = false;

    egui::Grid::new("measurement_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Name:").size(theme::BODY_SIZE));
            let name = ui.add(
                egui::TextEdit::singleline(&mut state.name)
                    .hint_text("Name")
                    .desired_width(FIELD_WIDTH),
            );
            if state.take_focus_request() {
                name.request_focus();
            }
            submitted |= entered(ui, &name);
            ui.end_row();

            ui.label(RichText::new("Weight (kg):").size(theme::BODY_SIZE));
            let weight = ui.add(
                egui::TextEdit::singleline(&mut state.weight)
                    .hint_text("Weight in kg")
                    .desired_width(FIELD_WIDTH),
            );
            submitted |= entered(ui, &weight);
            ui.end_row();

            ui.label(RichText::new("Height (m):").size(theme::BODY_SIZE));
            let height = ui.add(
                egui::TextEdit::singleline(&mut state.height)
                    .hint_text("Height in meters")
                    .desired_width(FIELD_WIDTH),
            );
            submitted |= entered(ui, &height);
            ui.end_row();
        });

    submitted
}

fn entered(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// "Calculate BMI" and "New calculation", full width.
pub fn action_buttons(ui: &mut egui::Ui, state: &mut FormState) {
    ui.scope(|ui| {
        theme::accent_buttons(ui);
        let size = [ui.available_width(), BUTTON_HEIGHT];

        if ui.add_sized(size, accent_button("Calculate BMI")).clicked() {
            state.calculate();
        }
        if ui.add_sized(size, accent_button("New calculation")).clicked() {
            state.reset();
        }
    });
}

fn accent_button(text: &str) -> impl egui::Widget {
    egui::Button::new(
        RichText::new(text.to_owned())
            .size(theme::RESULT_SIZE)
            .strong()
            .color(egui::Color32::WHITE),
    )
}
