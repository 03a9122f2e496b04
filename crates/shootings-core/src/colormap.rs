//! Colors and categorical palettes
//!
//! Series colors cycle through a theme palette: the ggplot cycle for the
//! default theme, tab10 for the classic one.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }
}

/// An ordered set of colors assigned to series by index
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from hex strings, skipping malformed entries
    pub fn from_hex(name: impl Into<String>, hex: &[&str]) -> Self {
        Self {
            name: name.into(),
            colors: hex.iter().filter_map(|h| Color::from_hex(h)).collect(),
        }
    }

    /// Color of the `i`-th series, wrapping around the palette
    pub fn color(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            return Color::default();
        }
        self.colors[i % self.colors.len()]
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The ggplot color cycle
    pub fn ggplot() -> Self {
        Self::from_hex(
            "ggplot",
            &[
                "#E24A33", "#348ABD", "#988ED5", "#777777", "#FBC15E", "#8EBA42", "#FFB5B8",
            ],
        )
    }

    /// The tab10 categorical cycle
    pub fn tab10() -> Self {
        Self::from_hex(
            "tab10",
            &[
                "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2",
                "#7F7F7F", "#BCBD22", "#17BECF",
            ],
        )
    }
}
