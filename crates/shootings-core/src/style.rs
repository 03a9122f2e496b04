//! Process-wide plot style
//!
//! Figures capture the global style when they are built. The style starts
//! at its defaults (10 × 5 inch figures, ggplot theme) on first use and can
//! be replaced from code or from a TOML file:
//!
//! ```toml
//! theme = "classic"
//! dpi = 120
//!
//! [figure_size]
//! width = 12.0
//! height = 6.0
//! ```

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::colormap::{Color, Palette};
use crate::error::{StyleError, StyleResult};

/// Figure size in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions at a given resolution
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        (
            (self.width * dpi as f64).round() as u32,
            (self.height * dpi as f64).round() as u32,
        )
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(10.0, 5.0)
    }
}

/// Named look of every chart element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Grey panel, white grid lines
    #[default]
    Ggplot,
    /// White panel, no grid
    Classic,
}

impl Theme {
    /// Background of the plotting area
    pub fn panel_background(&self) -> Color {
        match self {
            Theme::Ggplot => Color::rgb(0.898, 0.898, 0.898),
            Theme::Classic => Color::rgb(1.0, 1.0, 1.0),
        }
    }

    /// Grid line color, `None` when no grid is drawn
    pub fn grid_color(&self) -> Option<Color> {
        match self {
            Theme::Ggplot => Some(Color::rgb(1.0, 1.0, 1.0)),
            Theme::Classic => None,
        }
    }

    /// Color of text and axis spines
    pub fn foreground(&self) -> Color {
        match self {
            Theme::Ggplot => Color::rgb(0.333, 0.333, 0.333),
            Theme::Classic => Color::rgb(0.0, 0.0, 0.0),
        }
    }

    /// Color cycle for series
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Ggplot => Palette::ggplot(),
            Theme::Classic => Palette::tab10(),
        }
    }
}

/// Global chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub theme: Theme,
    /// Pixels per inch when rasterizing sizes for SVG output
    pub dpi: u32,
    pub figure_size: FigureSize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            dpi: 100,
            figure_size: FigureSize::default(),
        }
    }
}

impl PlotStyle {
    /// Parse and validate a style from TOML
    pub fn from_toml(toml_str: &str) -> StyleResult<Self> {
        let style: PlotStyle =
            toml::from_str(toml_str).map_err(|e| StyleError::Parse(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to TOML
    pub fn to_toml(&self) -> StyleResult<String> {
        toml::to_string_pretty(self).map_err(|e| StyleError::Parse(e.to_string()))
    }

    /// Read a style from a TOML file
    pub fn load(path: &Path) -> StyleResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| StyleError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| {
            tracing::warn!("Failed to load plot style from {:?}: {}", path, e);
            e
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> StyleResult<()> {
        let FigureSize { width, height } = self.figure_size;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(StyleError::Invalid(format!(
                "figure size must be positive, got {}x{}",
                width, height
            )));
        }

        if !(10..=600).contains(&self.dpi) {
            return Err(StyleError::Invalid(format!(
                "dpi must be between 10 and 600, got {}",
                self.dpi
            )));
        }

        Ok(())
    }
}

lazy_static! {
    static ref GLOBAL_STYLE: RwLock<PlotStyle> = RwLock::new(PlotStyle::default());
}

/// Snapshot of the current global style
pub fn global_style() -> PlotStyle {
    match GLOBAL_STYLE.read() {
        Ok(style) => style.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the global style for every figure built afterwards
pub fn set_global_style(style: PlotStyle) -> StyleResult<()> {
    style.validate()?;
    tracing::info!(
        "Plot style set: {:?} theme, {}x{} in at {} dpi",
        style.theme,
        style.figure_size.width,
        style.figure_size.height,
        style.dpi
    );

    let mut guard = match GLOBAL_STYLE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = style;
    Ok(())
}

/// Restore the default global style
pub fn reset_global_style() {
    let mut guard = match GLOBAL_STYLE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = PlotStyle::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.figure_size, FigureSize::new(10.0, 5.0));
        assert_eq!(style.theme, Theme::Ggplot);
        assert_eq!(style.figure_size.pixels(style.dpi), (1000, 500));
    }

    #[test]
    fn test_from_toml_partial() {
        let style = PlotStyle::from_toml("theme = \"classic\"\n").unwrap();
        assert_eq!(style.theme, Theme::Classic);
        assert_eq!(style.dpi, 100);
        assert_eq!(style.figure_size, FigureSize::default());
    }

    #[test]
    fn test_from_toml_full() {
        let toml = r#"
theme = "ggplot"
dpi = 120

[figure_size]
width = 12.0
height = 6.0
"#;
        let style = PlotStyle::from_toml(toml).unwrap();
        assert_eq!(style.dpi, 120);
        assert_eq!(style.figure_size.pixels(style.dpi), (1440, 720));
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            PlotStyle::from_toml("dpi = 5"),
            Err(StyleError::Invalid(_))
        ));
        assert!(matches!(
            PlotStyle::from_toml("theme = \"solarized\""),
            Err(StyleError::Parse(_))
        ));
        assert!(matches!(
            PlotStyle::from_toml("[figure_size]\nwidth = -1.0\nheight = 5.0"),
            Err(StyleError::Invalid(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let style = PlotStyle {
            theme: Theme::Classic,
            ..Default::default()
        };
        let text = style.to_toml().unwrap();
        assert_eq!(PlotStyle::from_toml(&text).unwrap(), style);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlotStyle::load(Path::new("/nonexistent/style.toml")).unwrap_err();
        assert!(matches!(err, StyleError::Io { .. }));
    }

    #[test]
    fn test_theme_palettes_differ() {
        assert_ne!(
            Theme::Ggplot.palette().color(0),
            Theme::Classic.palette().color(0)
        );
        assert!(Theme::Classic.grid_color().is_none());
    }
}
