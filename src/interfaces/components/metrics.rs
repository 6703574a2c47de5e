use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A labelled figure with an optional delta line underneath, as used in the
/// projected and impact panels.
pub fn render_metric(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    value_color: egui::Color32,
    delta: Option<&str>,
) {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(DesignSystem::TEXT_SECONDARY)
            .strong(),
    );
    ui.label(
        egui::RichText::new(value)
            .size(22.0)
            .strong()
            .color(value_color),
    );
    if let Some(delta) = delta {
        ui.label(
            egui::RichText::new(delta)
                .size(11.0)
                .strong()
                .color(DesignSystem::SUCCESS),
        );
    }
    ui.add_space(DesignSystem::SPACING_SMALL);
}

/// The oversized headline figure at the top of the impact panel.
pub fn render_headline_metric(ui: &mut egui::Ui, value: &str, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(value)
                .size(44.0)
                .strong()
                .color(DesignSystem::SUCCESS),
        );
        ui.label(
            egui::RichText::new(caption)
                .size(13.0)
                .strong()
                .color(DesignSystem::SUCCESS),
        );
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);
}

/// A status pill (e.g., for the selected scenario badge)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}
