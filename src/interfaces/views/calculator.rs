//! Calculator panels: scenario selector, baseline sliders, projected and
//! impact read-outs.

use crate::application::calculator::{
    CYCLE_MAX, CYCLE_MIN, CONVERSION_MAX, CONVERSION_MIN, CalculatorSession, DEAL_SIZE_MAX,
    DEAL_SIZE_MIN, DEAL_SIZE_STEP, LEADS_MAX, LEADS_MIN, LEADS_STEP,
};
use crate::domain::formatting::{format_count, format_currency, format_months};
use crate::domain::scenario::Scenario;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{
    render_headline_metric, render_metric, render_status_pill,
};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub fn render_scenario_selector(ui: &mut egui::Ui, session: &mut CalculatorSession) {
    ui.columns(3, |columns| {
        for (index, scenario) in Scenario::ALL.into_iter().enumerate() {
            let selected = session.scenario() == scenario;
            Card::new().active(selected).show(&mut columns[index], |ui| {
                ui.vertical_centered(|ui| {
                    let label = egui::RichText::new(scenario.label()).size(15.0).strong();
                    if ui.selectable_label(selected, label).clicked() {
                        session.set_scenario(scenario);
                    }
                    ui.label(
                        egui::RichText::new(scenario.description())
                            .size(11.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            });
        }
    });
}

/// Baseline sliders plus today's results.
pub fn render_baseline_panel(ui: &mut egui::Ui, session: &mut CalculatorSession) {
    Card::new()
        .title("CURRENT PERFORMANCE")
        .subtitle("Your organization's baseline metrics")
        .show(ui, |ui| {
            ui.spacing_mut().slider_width = ui.available_width() - 16.0;

            let baseline = session.baseline().clone();

            slider_block(
                ui,
                "ANNUAL LEADS GENERATED",
                &format_count(baseline.annual_leads as i64),
                "qualified prospects annually",
                baseline.annual_leads as f64,
                LEADS_MIN as f64..=LEADS_MAX as f64,
                LEADS_STEP as f64,
                |value| session.set_annual_leads(value as u32),
            );

            let conversion = baseline.conversion_rate_pct.to_u32().unwrap_or(0);
            slider_block(
                ui,
                "CONVERSION RATE",
                &format!("{}%", baseline.conversion_rate_pct.normalize()),
                "leads to closed deals",
                conversion as f64,
                CONVERSION_MIN as f64..=CONVERSION_MAX as f64,
                1.0,
                |value| session.set_conversion_rate_pct(value as u32),
            );

            let cycle = baseline.sales_cycle_months.to_u32().unwrap_or(CYCLE_MIN);
            slider_block(
                ui,
                "SALES CYCLE",
                &format!("{} months", format_months(baseline.sales_cycle_months)),
                "average time to close",
                cycle as f64,
                CYCLE_MIN as f64..=CYCLE_MAX as f64,
                1.0,
                |value| session.set_sales_cycle_months(value as u32),
            );

            let deal_size = baseline.average_deal_size.to_u64().unwrap_or(DEAL_SIZE_MIN);
            slider_block(
                ui,
                "AVERAGE DEAL SIZE",
                &format_currency(baseline.average_deal_size),
                "per closed opportunity",
                deal_size as f64,
                DEAL_SIZE_MIN as f64..=DEAL_SIZE_MAX as f64,
                DEAL_SIZE_STEP as f64,
                |value| session.set_average_deal_size(value as u64),
            );

            ui.separator();
            ui.label(
                egui::RichText::new("CURRENT RESULTS")
                    .size(13.0)
                    .strong()
                    .color(DesignSystem::DANGER),
            );
            let projection = session.projection();
            result_row(ui, "Annual Deals:", &format_count(projection.current.deals));
            result_row(
                ui,
                "Annual Revenue:",
                &format_currency(projection.current.revenue),
            );
        });
}

/// Read-out of the enhanced metrics for the selected scenario.
pub fn render_projected_panel(ui: &mut egui::Ui, session: &CalculatorSession) {
    let baseline = session.baseline();
    let projection = session.projection();
    let projected = &projection.projected;

    Card::new()
        .title("PROJECTED PERFORMANCE")
        .subtitle("Results with the selected scenario")
        .tint(DesignSystem::BG_CARD_TINT)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                render_status_pill(
                    ui,
                    &format!("{} SCENARIO", session.scenario().label().to_uppercase()),
                    DesignSystem::ACCENT_PRIMARY,
                );
            });
            ui.add_space(DesignSystem::SPACING_SMALL);

            let close_rate_gain = projected.close_rate_pct - baseline.conversion_rate_pct;
            render_metric(
                ui,
                "Enhanced Close Rate",
                &format!("{}%", projected.close_rate_pct.normalize()),
                DesignSystem::ACCENT_PRIMARY,
                Some(&format!("+{}% improvement", close_rate_gain.normalize())),
            );
            render_metric(
                ui,
                "Accelerated Sales Cycle",
                &format!("{} months", projected.cycle_months),
                DesignSystem::ACCENT_PRIMARY,
                Some(&format!(
                    "-{} months faster",
                    format_months(projection.impact.cycle_reduction_months)
                )),
            );
            render_metric(
                ui,
                "Increased Deal Size",
                &format_currency(projected.deal_size),
                DesignSystem::ACCENT_PRIMARY,
                Some(&format!(
                    "+{} increase",
                    format_currency(projected.deal_size - baseline.average_deal_size)
                )),
            );

            ui.separator();
            ui.label(
                egui::RichText::new("PROJECTED RESULTS")
                    .size(13.0)
                    .strong()
                    .color(DesignSystem::ACCENT_PRIMARY),
            );
            result_row(ui, "Annual Deals:", &format_count(projected.deals));
            result_row(ui, "Annual Revenue:", &format_currency(projected.revenue));
        });
}

/// The delta panel with the headline ROI figure.
pub fn render_impact_panel(ui: &mut egui::Ui, session: &CalculatorSession) {
    let projection = session.projection();
    let impact = &projection.impact;

    Card::new()
        .title("IMPACT ANALYSIS")
        .subtitle("Quantified business transformation")
        .tint(egui::Color32::from_rgb(240, 253, 250))
        .show(ui, |ui| {
            render_headline_metric(ui, &format!("{}%", impact.roi_pct), "ROI IMPROVEMENT");

            render_metric(
                ui,
                "Additional Revenue",
                &format_currency(impact.revenue_gain),
                DesignSystem::TEXT_PRIMARY,
                None,
            );

            let deals_increase = if projection.current.deals > 0 {
                let pct = Decimal::from(impact.additional_deals) * Decimal::from(100)
                    / Decimal::from(projection.current.deals);
                Some(format!(
                    "{}% increase",
                    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                        .normalize()
                ))
            } else {
                None
            };
            render_metric(
                ui,
                "Additional Deals",
                &format!("+{}", format_count(impact.additional_deals)),
                DesignSystem::TEXT_PRIMARY,
                deals_increase.as_deref(),
            );
            render_metric(
                ui,
                "Time Savings",
                &format!("-{} months", format_months(impact.cycle_reduction_months)),
                DesignSystem::TEXT_PRIMARY,
                Some("per deal cycle"),
            );

            ui.separator();
            ui.label(
                egui::RichText::new("EXECUTIVE SUMMARY")
                    .size(13.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!(
                    "Implementation could generate an additional {} in annual revenue through \
                     {} additional deals, with {} months faster sales cycles.",
                    format_currency(impact.revenue_gain),
                    format_count(impact.additional_deals),
                    format_months(impact.cycle_reduction_months)
                ))
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
            );
        });
}

#[allow(clippy::too_many_arguments)]
fn slider_block(
    ui: &mut egui::Ui,
    label: &str,
    value_text: &str,
    caption: &str,
    current: f64,
    range: std::ops::RangeInclusive<f64>,
    step: f64,
    mut on_change: impl FnMut(f64),
) {
    ui.label(
        egui::RichText::new(label)
            .size(11.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );

    let mut value = current;
    let slider = egui::Slider::new(&mut value, range)
        .step_by(step)
        .show_value(false);
    ui.add(slider);

    if value != current {
        on_change(value);
    }

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(value_text)
                .size(20.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(caption)
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);
}

fn result_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(13.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(15.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        });
    });
}
