use eframe::egui;

/// Light Brand Design System
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(248, 250, 252); // #F8FAFC
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(248, 250, 252); // #F8FAFC
    pub const BG_CARD: egui::Color32 = egui::Color32::WHITE;
    pub const BG_CARD_TINT: egui::Color32 = egui::Color32::from_rgb(240, 249, 255); // light blue
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(59, 130, 246); // #3B82F6 (Blue)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(79, 195, 247); // Cyan
    pub const ACCENT_TEAL: egui::Color32 = egui::Color32::from_rgb(0, 188, 212);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74); // #16A34A
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38); // #DC2626
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
    pub const BORDER_FOCUS: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const ROUNDING_LARGE: f32 = 12.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_TINT;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
