//! Colors and style for the calculator window.

use bmi_shared::Rgba;
use egui::{Color32, CornerRadius, Stroke};

pub const BACKGROUND: Color32 = Color32::from_rgb(0xf5, 0xf7, 0xfa);
pub const TEXT: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const ACCENT: Color32 = Color32::from_rgb(0x1a, 0xbc, 0x9c);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x16, 0xa0, 0x85);
pub const FIELD_BORDER: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);

pub const TITLE_SIZE: f32 = 20.0;
pub const BODY_SIZE: f32 = 12.0;
pub const RESULT_SIZE: f32 = 14.0;

pub fn color(rgba: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Light theme with the calculator's background, text and field styling.
pub fn apply(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Light);
    ctx.style_mut_of(egui::Theme::Light, |style| {
        let visuals = &mut style.visuals;
        visuals.panel_fill = BACKGROUND;
        visuals.window_fill = BACKGROUND;
        visuals.override_text_color = Some(TEXT);
        visuals.extreme_bg_color = Color32::WHITE;

        let widgets = &mut visuals.widgets;
        widgets.inactive.bg_stroke = Stroke::new(2.0, FIELD_BORDER);
        widgets.hovered.bg_stroke = Stroke::new(2.0, ACCENT);
        widgets.active.bg_stroke = Stroke::new(2.0, ACCENT);
        for w in [
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
        ] {
            w.corner_radius = CornerRadius::same(10);
        }
        visuals.selection.stroke = Stroke::new(2.0, ACCENT);
    });
}

/// Accent fill for the action buttons, darker on hover, white text.
pub fn accent_buttons(ui: &mut egui::Ui) {
    ui.visuals_mut().override_text_color = None;
    let widgets = &mut ui.visuals_mut().widgets;
    widgets.inactive.weak_bg_fill = ACCENT;
    widgets.hovered.weak_bg_fill = ACCENT_HOVER;
    widgets.active.weak_bg_fill = ACCENT_HOVER;
    for w in [
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
    ] {
        w.fg_stroke.color = Color32::WHITE;
        w.bg_stroke = Stroke::NONE;
        w.corner_radius = CornerRadius::same(15);
    }
}
