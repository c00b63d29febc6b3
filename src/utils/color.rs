use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

/// Parses a palette constant, falling back to transparent.
pub fn palette(hex: &str) -> Color32 {
    <Color32 as ColorExt>::from_hex(hex).unwrap_or(Color32::TRANSPARENT)
}

pub const PRIMARY: &str = "#005ea2";
pub const GRAY_MEDIUM: &str = "#757575";
pub const GRAY_LIGHT: &str = "#dfe1e2";
pub const GRAY_LIGHTEST: &str = "#f0f0f0";
pub const GOLD_LIGHTER: &str = "#fad980";
pub const GOLD_LIGHTEST: &str = "#fef0c8";
pub const PRIMARY_ALT_LIGHTEST: &str = "#e1f3f8";
pub const GREEN_LIGHTER: &str = "#94bfa2";
pub const GREEN_LIGHTEST: &str = "#e7f4e4";
pub const ERROR: &str = "#d54309";
pub const SUCCESS: &str = "#00a91c";
