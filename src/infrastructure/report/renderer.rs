use crate::config::ReportEnvConfig;
use crate::domain::contact::ContactInfo;
use crate::domain::formatting::{format_count, format_currency, format_months};
use crate::domain::metrics::BaselineMetrics;
use crate::domain::projection::ImpactProjection;
use crate::domain::scenario::Scenario;
use crate::infrastructure::report::fonts::ReportFonts;
use crate::infrastructure::report::theme::ReportTheme;
use ab_glyph::{FontVec, PxScale};
use chrono::Local;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report drawing surface unavailable ({reason}); the export was aborted")]
    SurfaceUnavailable { reason: String },

    #[error("Could not create the report directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write the report image: {0}")]
    Write(#[from] image::ImageError),
}

/// Output file name, derived from the submitted company name with
/// whitespace runs replaced by hyphens.
pub fn report_file_name(company: &str) -> String {
    let slug: String = company.split_whitespace().collect::<Vec<_>>().join("-");
    format!("Executive-Impact-Analysis-{slug}.png")
}

/// Draws the fixed-layout landscape report and writes it out as a PNG.
///
/// Stateless: one render per user-initiated export.
pub struct ReportRenderer {
    fonts: ReportFonts,
}

impl ReportRenderer {
    pub fn new(config: &ReportEnvConfig) -> Result<Self, ReportError> {
        let fonts = ReportFonts::load(config)
            .map_err(|reason| ReportError::SurfaceUnavailable { reason })?;
        Ok(Self { fonts })
    }

    /// Renders and saves the report, returning the written path.
    pub fn export(
        &self,
        output_dir: &Path,
        contact: &ContactInfo,
        baseline: &BaselineMetrics,
        projection: &ImpactProjection,
        scenario: Scenario,
    ) -> Result<PathBuf, ReportError> {
        let image = self.render(contact, baseline, projection, scenario);
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join(report_file_name(&contact.company));
        image.save(&path)?;
        info!("Impact report written to {}", path.display());
        Ok(path)
    }

    pub fn render(
        &self,
        contact: &ContactInfo,
        baseline: &BaselineMetrics,
        projection: &ImpactProjection,
        scenario: Scenario,
    ) -> RgbImage {
        let mut image = RgbImage::from_pixel(
            ReportTheme::WIDTH,
            ReportTheme::HEIGHT,
            ReportTheme::WARM_WHITE,
        );

        self.draw_header(&mut image);
        self.draw_details(&mut image, contact, scenario);
        self.draw_current_panel(&mut image, baseline, projection);
        self.draw_projected_panel(&mut image, projection, scenario);
        self.draw_impact_panel(&mut image, projection);
        self.draw_summary_footer(&mut image, projection, scenario);

        image
    }

    fn draw_header(&self, image: &mut RgbImage) {
        // Left-to-right gradient, one column at a time.
        for x in 0..ReportTheme::WIDTH {
            let t = x as f32 / ReportTheme::WIDTH as f32;
            let color = ReportTheme::blend(
                ReportTheme::PRIMARY_DARK_BLUE,
                ReportTheme::ELECTRIC_BLUE,
                t,
            );
            draw_filled_rect_mut(
                image,
                Rect::at(x as i32, 0).of_size(1, ReportTheme::HEADER_HEIGHT),
                color,
            );
        }

        let center = ReportTheme::WIDTH as i32 / 2;
        self.text(
            image,
            ReportTheme::WARM_WHITE,
            40,
            58,
            20.0,
            &self.fonts.bold,
            "REVLIFT",
        );
        self.text_centered(
            image,
            ReportTheme::WARM_WHITE,
            center,
            65,
            32.0,
            &self.fonts.bold,
            "EXECUTIVE IMPACT ANALYSIS",
        );
        self.text_centered(
            image,
            ReportTheme::WARM_WHITE,
            center,
            85,
            16.0,
            &self.fonts.regular,
            "Strategic Sales Impact Assessment",
        );
    }

    fn draw_details(&self, image: &mut RgbImage, contact: &ContactInfo, scenario: Scenario) {
        let left = ReportTheme::MARGIN;
        let right = 600;

        self.text(
            image,
            ReportTheme::CHARCOAL,
            left,
            140,
            16.0,
            &self.fonts.bold,
            "EXECUTIVE:",
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            left,
            160,
            14.0,
            &self.fonts.regular,
            &format!("{}, {}", contact.name, contact.title),
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            left,
            190,
            16.0,
            &self.fonts.bold,
            "ORGANIZATION:",
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            left,
            210,
            14.0,
            &self.fonts.regular,
            &contact.company,
        );

        self.text(
            image,
            ReportTheme::CHARCOAL,
            right,
            140,
            16.0,
            &self.fonts.bold,
            "ANALYSIS DATE:",
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            right,
            160,
            14.0,
            &self.fonts.regular,
            &Local::now().format("%B %-d, %Y").to_string(),
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            right,
            190,
            16.0,
            &self.fonts.bold,
            "SCENARIO MODEL:",
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            right,
            210,
            14.0,
            &self.fonts.regular,
            &scenario.label().to_uppercase(),
        );

        // Divider under the details block.
        draw_filled_rect_mut(
            image,
            Rect::at(left, 240).of_size(ReportTheme::WIDTH - 2 * left as u32, 1),
            ReportTheme::SLATE_GRAY,
        );
    }

    fn draw_current_panel(
        &self,
        image: &mut RgbImage,
        baseline: &BaselineMetrics,
        projection: &ImpactProjection,
    ) {
        let left = ReportTheme::panel_left(0);
        let top = ReportTheme::PANEL_TOP;
        self.panel_background(
            image,
            left,
            ReportTheme::LIGHT_GRAY,
            ReportTheme::SLATE_GRAY,
        );
        self.panel_title(image, left, ReportTheme::SLATE_GRAY, "CURRENT PERFORMANCE");

        let x = left + 20;
        let y = top + 70;
        let lines = [
            format!("Annual Leads: {}", format_count(baseline.annual_leads as i64)),
            format!(
                "Conversion Rate: {}%",
                baseline.conversion_rate_pct.normalize()
            ),
            format!(
                "Sales Cycle: {} months",
                format_months(baseline.sales_cycle_months)
            ),
            format!(
                "Average Deal Size: {}",
                format_currency(baseline.average_deal_size)
            ),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.text(
                image,
                ReportTheme::CHARCOAL,
                x,
                y + 30 * i as i32,
                14.0,
                &self.fonts.regular,
                line,
            );
        }

        self.text(
            image,
            ReportTheme::SLATE_GRAY,
            x,
            y + 140,
            16.0,
            &self.fonts.bold,
            "ANNUAL RESULTS:",
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y + 170,
            14.0,
            &self.fonts.regular,
            &format!("Closed Deals: {}", format_count(projection.current.deals)),
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y + 200,
            14.0,
            &self.fonts.regular,
            "Total Revenue:",
        );
        self.text(
            image,
            ReportTheme::SLATE_GRAY,
            x,
            y + 230,
            24.0,
            &self.fonts.bold,
            &format_currency(projection.current.revenue),
        );
    }

    fn draw_projected_panel(
        &self,
        image: &mut RgbImage,
        projection: &ImpactProjection,
        scenario: Scenario,
    ) {
        let left = ReportTheme::panel_left(1);
        let top = ReportTheme::PANEL_TOP;
        self.panel_background(
            image,
            left,
            ReportTheme::PANEL_BLUE_TINT,
            ReportTheme::ELECTRIC_BLUE,
        );
        self.panel_title(image, left, ReportTheme::ELECTRIC_BLUE, "REVLIFT PROJECTION");

        let x = left + 20;
        let y = top + 70;
        let lines = [
            format!(
                "Enhanced Close Rate: {}%",
                projection.projected.close_rate_pct.normalize()
            ),
            format!(
                "Accelerated Cycle: {} months",
                projection.projected.cycle_months
            ),
            format!(
                "Increased Deal Size: {}",
                format_currency(projection.projected.deal_size)
            ),
            format!("Scenario: {}", scenario.label()),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.text(
                image,
                ReportTheme::CHARCOAL,
                x,
                y + 30 * i as i32,
                14.0,
                &self.fonts.regular,
                line,
            );
        }

        self.text(
            image,
            ReportTheme::ELECTRIC_BLUE,
            x,
            y + 140,
            16.0,
            &self.fonts.bold,
            "PROJECTED RESULTS:",
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y + 170,
            14.0,
            &self.fonts.regular,
            &format!("Closed Deals: {}", format_count(projection.projected.deals)),
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y + 200,
            14.0,
            &self.fonts.regular,
            "Total Revenue:",
        );
        self.text(
            image,
            ReportTheme::ELECTRIC_BLUE,
            x,
            y + 230,
            24.0,
            &self.fonts.bold,
            &format_currency(projection.projected.revenue),
        );
    }

    fn draw_impact_panel(&self, image: &mut RgbImage, projection: &ImpactProjection) {
        let left = ReportTheme::panel_left(2);
        let top = ReportTheme::PANEL_TOP;
        let center = left + ReportTheme::PANEL_WIDTH as i32 / 2;
        self.panel_background(
            image,
            left,
            ReportTheme::PANEL_CYAN_TINT,
            ReportTheme::CYAN_ACCENT,
        );
        self.panel_title(image, left, ReportTheme::CYAN_ACCENT, "STRATEGIC IMPACT");

        self.text_centered(
            image,
            ReportTheme::TEAL_SUPPORT,
            center,
            top + 130,
            64.0,
            &self.fonts.bold,
            &format!("{}%", projection.impact.roi_pct),
        );
        self.text_centered(
            image,
            ReportTheme::TEAL_SUPPORT,
            center,
            top + 150,
            14.0,
            &self.fonts.bold,
            "ROI IMPROVEMENT",
        );

        let x = left + 20;
        let y = top + 190;
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y,
            14.0,
            &self.fonts.regular,
            "Additional Revenue:",
        );
        self.text(
            image,
            ReportTheme::TEAL_SUPPORT,
            x,
            y + 25,
            20.0,
            &self.fonts.bold,
            &format_currency(projection.impact.revenue_gain),
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y + 65,
            14.0,
            &self.fonts.regular,
            &format!(
                "Additional Deals: +{}",
                format_count(projection.impact.additional_deals)
            ),
        );
        self.text(
            image,
            ReportTheme::CHARCOAL,
            x,
            y + 95,
            14.0,
            &self.fonts.regular,
            &format!(
                "Time Savings: -{} months per deal",
                format_months(projection.impact.cycle_reduction_months)
            ),
        );
    }

    fn draw_summary_footer(
        &self,
        image: &mut RgbImage,
        projection: &ImpactProjection,
        scenario: Scenario,
    ) {
        let left = ReportTheme::MARGIN;
        let top = ReportTheme::FOOTER_TOP;
        let width = ReportTheme::WIDTH - 2 * left as u32;

        draw_filled_rect_mut(
            image,
            Rect::at(left, top).of_size(width, ReportTheme::FOOTER_HEIGHT),
            ReportTheme::LIGHT_GRAY,
        );
        draw_hollow_rect_mut(
            image,
            Rect::at(left, top).of_size(width, ReportTheme::FOOTER_HEIGHT),
            ReportTheme::SLATE_GRAY,
        );

        self.text(
            image,
            ReportTheme::PRIMARY_DARK_BLUE,
            left + 20,
            top + 25,
            16.0,
            &self.fonts.bold,
            "EXECUTIVE SUMMARY",
        );

        let summary = summary_sentence(projection, scenario);
        let max_width = ReportTheme::WIDTH as i32 - 2 * left - 40;
        let mut y = top + 45;
        for line in wrap_text(&self.fonts.regular, 12.0, &summary, max_width) {
            self.text(
                image,
                ReportTheme::CHARCOAL,
                left + 20,
                y,
                12.0,
                &self.fonts.regular,
                &line,
            );
            y += 16;
        }
    }

    fn panel_background(&self, image: &mut RgbImage, left: i32, fill: Rgb<u8>, border: Rgb<u8>) {
        let rect = Rect::at(left, ReportTheme::PANEL_TOP)
            .of_size(ReportTheme::PANEL_WIDTH, ReportTheme::PANEL_HEIGHT);
        draw_filled_rect_mut(image, rect, fill);
        // Two nested strokes for a 2px border.
        draw_hollow_rect_mut(image, rect, border);
        draw_hollow_rect_mut(
            image,
            Rect::at(left + 1, ReportTheme::PANEL_TOP + 1)
                .of_size(ReportTheme::PANEL_WIDTH - 2, ReportTheme::PANEL_HEIGHT - 2),
            border,
        );
    }

    fn panel_title(&self, image: &mut RgbImage, left: i32, color: Rgb<u8>, title: &str) {
        self.text_centered(
            image,
            color,
            left + ReportTheme::PANEL_WIDTH as i32 / 2,
            ReportTheme::PANEL_TOP + 35,
            18.0,
            &self.fonts.bold,
            title,
        );
    }

    /// Draws `text` with its baseline near `baseline_y`, canvas-style.
    fn text(
        &self,
        image: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        baseline_y: i32,
        size: f32,
        font: &FontVec,
        text: &str,
    ) {
        draw_text_mut(
            image,
            color,
            x,
            baseline_y - size as i32,
            PxScale::from(size),
            font,
            text,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn text_centered(
        &self,
        image: &mut RgbImage,
        color: Rgb<u8>,
        center_x: i32,
        baseline_y: i32,
        size: f32,
        font: &FontVec,
        text: &str,
    ) {
        let (width, _) = text_size(PxScale::from(size), font, text);
        self.text(
            image,
            color,
            center_x - width as i32 / 2,
            baseline_y,
            size,
            font,
            text,
        );
    }
}

fn summary_sentence(projection: &ImpactProjection, scenario: Scenario) -> String {
    format!(
        "Implementation of Revlift could generate {} in additional annual revenue through {} \
         additional closed deals, with sales cycles accelerated by {} months. This represents \
         a {}% improvement in ROI based on {} projections.",
        format_currency(projection.impact.revenue_gain),
        format_count(projection.impact.additional_deals),
        format_months(projection.impact.cycle_reduction_months),
        projection.impact.roi_pct,
        scenario.label().to_lowercase()
    )
}

/// Greedy word wrap against the rendered pixel width.
fn wrap_text(font: &FontVec, size: f32, text: &str, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        let (width, _) = text_size(PxScale::from(size), font, &candidate);
        if width as i32 > max_width && !line.is_empty() {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
