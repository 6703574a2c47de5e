use crate::application::calculator::CalculatorSession;
use crate::application::referral_service::{ReferralDraft, ReferralService};
use crate::application::report_service::ReportService;
use crate::config::{Config, ReferralApiEnvConfig};
use crate::domain::contact::ContactInfo;
use crate::infrastructure::api::HttpReferralClient;
use crate::interfaces::components::metrics::render_status_pill;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views;
use crossbeam_channel::{Receiver, TryRecvError};
use eframe::egui;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

const TOAST_SECS: u64 = 6;

struct Toast {
    message: String,
    error: bool,
    shown_at: Instant,
}

/// The desktop calculator surface.
///
/// Owns all form state; every interaction mutates it synchronously on the
/// UI thread. The only background work is the fire-and-forget referral
/// submission, whose outcome comes back over a channel.
pub struct ImpactApp {
    pub session: CalculatorSession,
    pub contact: ContactInfo,
    pub draft: ReferralDraft,
    pub roster_path: String,
    pub submitting: bool,
    report_service: ReportService,
    api_config: ReferralApiEnvConfig,
    submit_rx: Option<Receiver<Result<usize, String>>>,
    toast: Option<Toast>,
}

impl ImpactApp {
    pub fn new(config: Config) -> Self {
        Self {
            session: CalculatorSession::new(),
            contact: ContactInfo::default(),
            draft: ReferralDraft::default(),
            roster_path: String::new(),
            submitting: false,
            report_service: ReportService::new(config.report),
            api_config: config.api,
            submit_rx: None,
            toast: None,
        }
    }

    pub fn generate_report(&mut self) {
        let result = self.report_service.generate(
            &self.contact,
            self.session.baseline(),
            self.session.projection(),
            self.session.scenario(),
        );
        match result {
            Ok(path) => self.show_toast(format!("Report saved to {}", path.display()), false),
            Err(error) => self.show_toast(error.to_string(), true),
        }
    }

    pub fn import_roster(&mut self) {
        let path = self.roster_path.trim().to_string();
        if path.is_empty() {
            self.show_toast("Enter the path of a CSV file to import".to_string(), true);
            return;
        }
        let file = match std::fs::File::open(&path) {
            Ok(file) => file,
            Err(error) => {
                self.show_toast(format!("Could not open {path}: {error}"), true);
                return;
            }
        };
        match self.draft.import_roster(file) {
            Ok(count) => self.show_toast(format!("Imported {count} contact(s)"), false),
            Err(error) => self.show_toast(error.to_string(), true),
        }
    }

    pub fn submit_referrals(&mut self) {
        let batch = self.draft.to_batch();
        // Validation failures block submission locally; nothing is sent.
        if let Err(error) = batch.validate() {
            self.show_toast(error.to_string(), true);
            return;
        }

        let api_config = self.api_config.clone();
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.submit_rx = Some(rx);
        self.submitting = true;
        info!("Submitting referral batch of {} contact(s)", batch.friends.len());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build Tokio runtime");
            let result = rt.block_on(async move {
                let gateway = Arc::new(HttpReferralClient::new(&api_config));
                ReferralService::new(gateway).submit(&batch).await
            });
            let _ = tx.send(result.map_err(|e| e.to_string()));
        });
    }

    fn show_toast(&mut self, message: String, error: bool) {
        self.toast = Some(Toast {
            message,
            error,
            shown_at: Instant::now(),
        });
    }

    fn poll_submission(&mut self) {
        let outcome = match &self.submit_rx {
            Some(rx) => rx.try_recv(),
            None => return,
        };
        match outcome {
            Ok(Ok(count)) => {
                self.show_toast(
                    format!("Referral submitted for {count} contact(s). Thank you!"),
                    false,
                );
                // Success clears the form; failures leave it untouched.
                self.draft = ReferralDraft::default();
            }
            Ok(Err(message)) => self.show_toast(message, true),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.show_toast("Referral submission was interrupted".to_string(), true);
            }
        }
        self.submitting = false;
        self.submit_rx = None;
    }
}

impl eframe::App for ImpactApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());
        self.poll_submission();

        // Drop stale toasts; keep repainting while one is visible.
        let expired = self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() > Duration::from_secs(TOAST_SECS));
        if expired {
            self.toast = None;
        }
        if self.toast.is_some() || self.submitting {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Revlift Impact Analysis");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_status_pill(
                        ui,
                        &format!(
                            "{} SCENARIO",
                            self.session.scenario().label().to_uppercase()
                        ),
                        DesignSystem::ACCENT_PRIMARY,
                    );
                });
            });
        });

        if let Some(toast) = &self.toast {
            let color = if toast.error {
                DesignSystem::DANGER
            } else {
                DesignSystem::SUCCESS
            };
            egui::TopBottomPanel::bottom("toast_panel").show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&toast.message)
                        .size(13.0)
                        .strong()
                        .color(color),
                );
            });
        }

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Select Your Strategic Scenario")
                                .size(18.0)
                                .strong()
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        views::calculator::render_scenario_selector(ui, &mut self.session);

                        ui.add_space(DesignSystem::SPACING_LARGE);
                        ui.columns(3, |columns| {
                            views::calculator::render_baseline_panel(
                                &mut columns[0],
                                &mut self.session,
                            );
                            views::calculator::render_projected_panel(
                                &mut columns[1],
                                &self.session,
                            );
                            views::calculator::render_impact_panel(&mut columns[2], &self.session);
                        });

                        ui.add_space(DesignSystem::SPACING_LARGE);
                        ui.columns(2, |columns| {
                            views::export::render_export_form(&mut columns[0], self);
                            views::referral::render_referral_form(&mut columns[1], self);
                        });
                    });
            });
    }
}
