use bmi_shared::FormState;

/// Modal shown after rejected input. The form underneath is left as is.
pub fn invalid_input_warning(ctx: &egui::Context, state: &mut FormState) {
    if !state.is_warning() {
        return;
    }

    let modal = egui::Modal::new(egui::Id::new("invalid_input_warning")).show(ctx, |ui| {
        ui.set_width(280.0);
        ui.heading("Error");
        ui.add_space(8.0);
        ui.label("Enter valid numeric values greater than zero.");
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.button("OK").clicked()
        })
        .inner
    });

    if modal.inner || modal.should_close() {
        state.dismiss_warning();
    }
}
