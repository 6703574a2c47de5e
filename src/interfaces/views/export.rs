//! Executive report form: contact details plus the export action.

use crate::interfaces::app::ImpactApp;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_export_form(ui: &mut egui::Ui, app: &mut ImpactApp) {
    Card::new()
        .title("EXECUTIVE IMPACT REPORT")
        .subtitle("Board-ready PNG export of this analysis")
        .show(ui, |ui| {
            field(ui, "FULL NAME *", "Jane Smith", &mut app.contact.name);
            field(
                ui,
                "EXECUTIVE TITLE *",
                "Chief Executive Officer",
                &mut app.contact.title,
            );
            field(
                ui,
                "EMAIL ADDRESS *",
                "jane.smith@company.com",
                &mut app.contact.email,
            );
            field(ui, "DIRECT PHONE *", "+1 (555) 123-4567", &mut app.contact.phone);
            field(
                ui,
                "ORGANIZATION *",
                "Acme Corporation",
                &mut app.contact.company,
            );

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let complete = app.contact.validate().is_ok();
            let button = egui::Button::new(
                egui::RichText::new("GENERATE & DOWNLOAD REPORT")
                    .size(13.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(DesignSystem::ACCENT_PRIMARY);

            if ui.add_enabled(complete, button).clicked() {
                app.generate_report();
            }
            if !complete {
                ui.label(
                    egui::RichText::new("All fields are required before the report can be generated.")
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        });
}

fn field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(
        egui::RichText::new(label)
            .size(11.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
}
