use crate::config::ReportEnvConfig;
use ab_glyph::FontVec;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Regular-weight candidates probed when no explicit path is configured.
const REGULAR_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

const BOLD_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

/// The two typeface weights the report draws with.
///
/// The renderer has no embedded font; if none of the configured or
/// well-known system fonts can be parsed, the drawing surface counts as
/// unavailable and the export is aborted.
pub struct ReportFonts {
    pub regular: FontVec,
    pub bold: FontVec,
}

impl ReportFonts {
    pub fn load(config: &ReportEnvConfig) -> Result<Self, String> {
        let regular_path = resolve(config.font_path.as_deref(), &REGULAR_CANDIDATES)
            .ok_or_else(|| "no usable TrueType font found".to_string())?;

        // A missing bold face falls back to the regular one.
        let bold_path = resolve(config.bold_font_path.as_deref(), &BOLD_CANDIDATES)
            .unwrap_or_else(|| regular_path.clone());

        debug!(
            "Report fonts: regular={}, bold={}",
            regular_path.display(),
            bold_path.display()
        );

        Ok(Self {
            regular: load_font(&regular_path)
                .ok_or_else(|| format!("could not parse font {}", regular_path.display()))?,
            bold: load_font(&bold_path)
                .ok_or_else(|| format!("could not parse font {}", bold_path.display()))?,
        })
    }
}

/// First path that holds a parseable font: the explicit override, then the
/// well-known candidates.
fn resolve(explicit: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(candidates.iter().map(PathBuf::from))
        .find(|path| load_font(path).is_some())
}

fn load_font(path: &Path) -> Option<FontVec> {
    let bytes = std::fs::read(path).ok()?;
    FontVec::try_from_vec(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_path_falls_through_to_candidates() {
        let config = ReportEnvConfig {
            font_path: Some(PathBuf::from("/definitely/not/here.ttf")),
            ..ReportEnvConfig::default()
        };
        // Either a system candidate is found or the load fails cleanly;
        // it must not pick the bogus explicit path.
        match ReportFonts::load(&config) {
            Ok(_) => {}
            Err(reason) => assert!(reason.contains("no usable TrueType font")),
        }
    }

    #[test]
    fn test_unreadable_font_is_none() {
        assert!(load_font(Path::new("/definitely/not/here.ttf")).is_none());
    }
}
