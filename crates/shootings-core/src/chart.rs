//! Figure model produced by the reports
//!
//! A `Figure` is a plain description of a chart: layout, titles, and the
//! aggregated numbers to draw. Rendering is left to `export`.

use serde::{Deserialize, Serialize};
use shootings_stats::{BoxStats, Histogram, SummaryStats};

use crate::style::{FigureSize, PlotStyle};

/// A named sequence of values, one per category or x position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Direction bars grow in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Bar chart, stacked or grouped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPlot {
    pub orientation: Orientation,
    pub stacked: bool,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl BarPlot {
    /// Total of every series at one category
    pub fn category_total(&self, i: usize) -> f64 {
        self.series
            .iter()
            .filter_map(|s| s.values.get(i))
            .sum()
    }
}

/// Area chart over ordered x labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPlot {
    pub stacked: bool,
    pub x_labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Single line over ordered x labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlot {
    pub x_labels: Vec<String>,
    pub series: Series,
}

/// Pie chart of proportions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiePlot {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Draw labels next to wedges
    pub show_labels: bool,
}

impl PiePlot {
    /// Fraction of the whole for each wedge; empty when everything is zero
    pub fn fractions(&self) -> Vec<f64> {
        let total: f64 = self.values.iter().sum();
        if total <= 0.0 {
            return Vec::new();
        }
        self.values.iter().map(|v| v / total).collect()
    }
}

/// Histogram with a kernel density curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistPlot {
    pub variable: String,
    pub histogram: Histogram,
    /// (x, density) points, empty when the sample has no spread
    pub kde: Vec<(f64, f64)>,
    pub summary: SummaryStats,
}

/// Horizontal box plot of one variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxPlot {
    pub variable: String,
    pub values: Vec<f64>,
    pub stats: Option<BoxStats>,
}

/// What an axes draws
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Plot {
    Bar(BarPlot),
    Area(AreaPlot),
    Line(LinePlot),
    Pie(PiePlot),
    Distribution(DistPlot),
    Box(BoxPlot),
    Empty,
}

impl Plot {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Plot::Bar(_) => "bar",
            Plot::Area(_) => "area",
            Plot::Line(_) => "line",
            Plot::Pie(_) => "pie",
            Plot::Distribution(_) => "distribution",
            Plot::Box(_) => "box",
            Plot::Empty => "empty",
        }
    }

    pub fn as_bar(&self) -> Option<&BarPlot> {
        match self {
            Plot::Bar(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaPlot> {
        match self {
            Plot::Area(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LinePlot> {
        match self {
            Plot::Line(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_pie(&self) -> Option<&PiePlot> {
        match self {
            Plot::Pie(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_distribution(&self) -> Option<&DistPlot> {
        match self {
            Plot::Distribution(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_box(&self) -> Option<&BoxPlot> {
        match self {
            Plot::Box(p) => Some(p),
            _ => None,
        }
    }
}

/// One plotting area within a figure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axes {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Fixed tick locations on the value axis (None = automatic)
    pub x_ticks: Option<Vec<f64>>,
    /// Draw a legend for multi-series plots
    pub show_legend: bool,
    pub plot: Plot,
}

impl Axes {
    pub fn new(plot: Plot) -> Self {
        let show_legend = match &plot {
            Plot::Bar(p) => p.series.len() > 1,
            Plot::Area(p) => p.series.len() > 1,
            _ => false,
        };

        Self {
            title: None,
            x_label: None,
            y_label: None,
            x_ticks: None,
            show_legend,
            plot,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_x_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.x_ticks = Some(ticks);
        self
    }

    pub fn without_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }
}

/// Rows × columns arrangement of axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn single() -> Self {
        Self::new(1, 1)
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// A legend shared by every axes in the figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub labels: Vec<String>,
}

/// A complete chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    /// Super-title above all axes
    pub title: Option<String>,
    /// Size in inches
    pub size: FigureSize,
    /// Style captured when the figure was built
    pub style: PlotStyle,
    pub layout: GridLayout,
    /// Axes in row-major order
    pub axes: Vec<Axes>,
    /// Axes in the same grid column share their x range
    pub share_x: bool,
    pub legend: Option<Legend>,
}

impl Figure {
    /// Single-axes figure using the given style
    pub fn single(style: PlotStyle, axes: Axes) -> Self {
        Self::grid(style, GridLayout::single(), vec![axes])
    }

    /// Grid figure using the given style
    pub fn grid(style: PlotStyle, layout: GridLayout, axes: Vec<Axes>) -> Self {
        Self {
            title: None,
            size: style.figure_size,
            style,
            layout,
            axes,
            share_x: false,
            legend: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, size: FigureSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_shared_x(mut self) -> Self {
        self.share_x = true;
        self
    }

    pub fn with_legend(mut self, labels: Vec<String>) -> Self {
        self.legend = Some(Legend { labels });
        self
    }

    /// Axes at a row-major position
    pub fn axes(&self, i: usize) -> Option<&Axes> {
        self.axes.get(i)
    }

    /// Plot of the first axes, for single-axes figures
    pub fn plot(&self) -> &Plot {
        self.axes.first().map(|a| &a.plot).unwrap_or(&Plot::Empty)
    }

    /// Title of the figure, or of its first axes when there is no super-title
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.axes.first().and_then(|a| a.title.as_deref()))
    }
}
