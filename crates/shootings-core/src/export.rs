//! Figure export
//!
//! Supports serializing figures to:
//! - SVG: standalone vector image
//! - JSON: the figure model, for other renderers
//!
//! Export never touches the filesystem; callers receive the document text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::error::{validation::validate_dimensions, ExportResult};
use crate::render::render_svg;

/// Export format for figures
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// SVG scalable vector graphics
    #[default]
    Svg,
    /// JSON figure description
    Json,
}

impl ExportFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
        }
    }

    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Export configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format
    pub format: ExportFormat,

    /// Resolution override (None = the figure's style dpi)
    pub dpi: Option<u32>,

    /// Indent JSON output
    pub pretty: bool,
}

impl ExportConfig {
    /// Create config for SVG export
    pub fn svg() -> Self {
        Self {
            format: ExportFormat::Svg,
            ..Default::default()
        }
    }

    /// Create config for JSON export
    pub fn json() -> Self {
        Self {
            format: ExportFormat::Json,
            ..Default::default()
        }
    }

    /// Render at a different resolution than the figure's style
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Indent JSON output
    pub fn with_pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Get suggested filename based on format
    pub fn suggested_filename(&self, base: &str) -> String {
        format!("{}.{}", base, self.format.extension())
    }
}

/// Pixel dimensions a figure exports at
pub fn export_dimensions(figure: &Figure, config: &ExportConfig) -> (u32, u32) {
    figure
        .size
        .pixels(config.dpi.unwrap_or(figure.style.dpi))
}

/// Serialize a figure to the configured format
pub fn export_figure(figure: &Figure, config: &ExportConfig) -> ExportResult<String> {
    let (width, height) = export_dimensions(figure, config);
    validate_dimensions(width, height)?;

    let figure: Cow<'_, Figure> = match config.dpi {
        Some(dpi) if dpi != figure.style.dpi => {
            let mut owned = figure.clone();
            owned.style.dpi = dpi;
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(figure),
    };

    tracing::debug!(
        "Exporting {} figure at {}x{} px",
        config.format.extension(),
        width,
        height
    );

    match config.format {
        ExportFormat::Svg => Ok(render_svg(&figure)),
        ExportFormat::Json if config.pretty => Ok(serde_json::to_string_pretty(&*figure)?),
        ExportFormat::Json => Ok(serde_json::to_string(&*figure)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Axes, Plot};
    use crate::error::ExportError;
    use crate::style::{FigureSize, PlotStyle};

    fn figure() -> Figure {
        Figure::single(PlotStyle::default(), Axes::new(Plot::Empty).with_title("Empty"))
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Svg.extension(), "svg");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.format, ExportFormat::Svg);
        assert!(config.dpi.is_none());
        assert_eq!(config.suggested_filename("trend"), "trend.svg");
    }

    #[test]
    fn test_export_dimensions_follow_dpi() {
        let figure = figure();
        assert_eq!(export_dimensions(&figure, &ExportConfig::svg()), (1000, 500));
        assert_eq!(
            export_dimensions(&figure, &ExportConfig::svg().with_dpi(200)),
            (2000, 1000)
        );
    }

    #[test]
    fn test_export_svg_uses_dpi_override() {
        let svg = export_figure(&figure(), &ExportConfig::svg().with_dpi(50)).unwrap();
        assert!(svg.contains("width=\"500\" height=\"250\""));
    }

    #[test]
    fn test_export_json() {
        let json = export_figure(&figure(), &ExportConfig::json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["axes"][0]["title"], "Empty");

        let pretty = export_figure(&figure(), &ExportConfig::json().with_pretty()).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_export_rejects_oversized_figure() {
        let figure = figure().with_size(FigureSize::new(400.0, 5.0));
        let err = export_figure(&figure, &ExportConfig::svg()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidDimensions {
                width: 40000,
                height: 500
            }
        ));
    }
}
