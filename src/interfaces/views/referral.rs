//! Referral form: contact rows, CSV roster import and submission.

use crate::domain::referral::Friend;
use crate::interfaces::app::ImpactApp;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_referral_form(ui: &mut egui::Ui, app: &mut ImpactApp) {
    Card::new()
        .title("REFER YOUR NETWORK")
        .subtitle("Invite colleagues who should see their own numbers")
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("YOUR EMAIL *")
                    .size(11.0)
                    .strong()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.add(
                egui::TextEdit::singleline(&mut app.draft.referrer_email)
                    .hint_text("you@company.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);

            if app.draft.friends.is_empty() {
                app.draft.friends.push(Friend::default());
            }

            let mut remove_index = None;
            for (index, friend) in app.draft.friends.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    let width = (ui.available_width() - 80.0) / 3.0;
                    ui.add(
                        egui::TextEdit::singleline(&mut friend.first_name)
                            .hint_text("First name")
                            .desired_width(width),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut friend.last_name)
                            .hint_text("Last name")
                            .desired_width(width),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut friend.email)
                            .hint_text("Email")
                            .desired_width(width),
                    );
                    if ui.button("✖").clicked() {
                        remove_index = Some(index);
                    }
                });
            }
            if let Some(index) = remove_index {
                app.draft.friends.remove(index);
            }

            if ui.button("+ Add another contact").clicked() {
                app.draft.friends.push(Friend::default());
            }

            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.separator();

            ui.label(
                egui::RichText::new("IMPORT FROM CSV (firstName, lastName, email)")
                    .size(11.0)
                    .strong()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut app.roster_path)
                        .hint_text("/path/to/contacts.csv")
                        .desired_width(ui.available_width() - 80.0),
                );
                if ui.button("Import").clicked() {
                    app.import_roster();
                }
            });

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let button = egui::Button::new(
                egui::RichText::new(if app.submitting {
                    "SUBMITTING..."
                } else {
                    "SUBMIT REFERRALS"
                })
                .size(13.0)
                .color(egui::Color32::WHITE),
            )
            .fill(DesignSystem::ACCENT_PRIMARY);

            if ui.add_enabled(!app.submitting, button).clicked() {
                app.submit_referrals();
            }
        });
}
