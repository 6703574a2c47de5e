use image::Rgb;

/// Brand palette and fixed geometry for the landscape report.
pub struct ReportTheme;

impl ReportTheme {
    // --- Colors ---

    pub const PRIMARY_DARK_BLUE: Rgb<u8> = Rgb([10, 34, 64]); // #0a2240
    pub const ELECTRIC_BLUE: Rgb<u8> = Rgb([30, 144, 255]); // #1e90ff
    pub const CYAN_ACCENT: Rgb<u8> = Rgb([79, 195, 247]); // #4fc3f7
    pub const TEAL_SUPPORT: Rgb<u8> = Rgb([0, 188, 212]); // #00bcd4
    pub const WARM_WHITE: Rgb<u8> = Rgb([254, 254, 254]); // #fefefe
    pub const CHARCOAL: Rgb<u8> = Rgb([44, 62, 80]); // #2c3e50
    pub const SLATE_GRAY: Rgb<u8> = Rgb([100, 116, 139]); // #64748b
    pub const LIGHT_GRAY: Rgb<u8> = Rgb([248, 250, 252]); // #f8fafc
    pub const PANEL_BLUE_TINT: Rgb<u8> = Rgb([240, 249, 255]); // #f0f9ff
    pub const PANEL_CYAN_TINT: Rgb<u8> = Rgb([240, 253, 250]); // #f0fdfa

    // --- Geometry (landscape letter at 100 DPI) ---

    pub const WIDTH: u32 = 1200;
    pub const HEIGHT: u32 = 850;
    pub const HEADER_HEIGHT: u32 = 100;
    pub const MARGIN: i32 = 60;
    pub const PANEL_WIDTH: u32 = 350;
    pub const PANEL_HEIGHT: u32 = 420;
    pub const PANEL_TOP: i32 = 280;
    pub const PANEL_SPACING: i32 = 25;
    pub const FOOTER_TOP: i32 = 720;
    pub const FOOTER_HEIGHT: u32 = 80;

    /// Left edge of panel `index` (0..3).
    pub fn panel_left(index: i32) -> i32 {
        Self::MARGIN + index * (Self::PANEL_WIDTH as i32 + Self::PANEL_SPACING)
    }

    /// Linear blend between two palette colors, `t` in [0, 1].
    pub fn blend(from: Rgb<u8>, to: Rgb<u8>, t: f32) -> Rgb<u8> {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb([
            mix(from.0[0], to.0[0]),
            mix(from.0[1], to.0[1]),
            mix(from.0[2], to.0[2]),
        ])
    }
}
