//! SVG rendering of figures through kuva
//!
//! Each `Axes` becomes one kuva panel. A figure with a single axes and
//! no super-title or shared legend renders straight to the figure's
//! pixel size; anything else goes through a kuva grid figure.

use chrono::NaiveDate;
use kuva::backend::svg::SvgBackend;
use kuva::plot::legend::{LegendEntry, LegendShape};
use kuva::plot::{
    BarPlot as BarPanel, BoxPlot as BoxPanel, DensityPlot, Histogram as HistogramPanel,
    LinePlot as LinePanel, PieLabelPosition, PiePlot as PiePanel, StackedAreaPlot, TextPlot,
};
use kuva::render::figure::Figure as PanelGrid;
use kuva::render::layout::Layout;
use kuva::render::plots::Plot as Panel;
use kuva::render::render::{render_multiple, Scene};
use kuva::DateTimeAxis;

use crate::chart::{
    AreaPlot, Axes, BarPlot, BoxPlot, DistPlot, Figure, LinePlot, Orientation, PiePlot, Plot,
};
use crate::colormap::Palette;
use crate::style::Theme;

/// Body of panels with nothing to draw
const NO_DATA: &str = "No data";

/// Colors of one figure, resolved from its theme
struct Ink {
    palette: Palette,
    foreground: String,
    theme: kuva::Theme,
}

impl Ink {
    fn new(theme: Theme) -> Self {
        let foreground = theme.foreground().to_hex();
        let base = kuva::Theme::light();
        let grid_color = theme
            .grid_color()
            .map(|c| c.to_hex())
            .unwrap_or_else(|| base.grid_color.clone());

        Self {
            palette: theme.palette(),
            theme: kuva::Theme {
                background: theme.panel_background().to_hex(),
                axis_color: foreground.clone(),
                tick_color: foreground.clone(),
                text_color: foreground.clone(),
                grid_color,
                show_grid: theme.grid_color().is_some(),
                ..base
            },
            foreground,
        }
    }

    fn series(&self, i: usize) -> String {
        self.palette.color(i).to_hex()
    }
}

/// Draw a figure as a standalone SVG document
pub fn render_svg(figure: &Figure) -> String {
    let (width, height) = figure.size.pixels(figure.style.dpi);
    let (width, height) = (f64::from(width), f64::from(height));
    let ink = Ink::new(figure.style.theme);

    let mut panels: Vec<(Vec<Panel>, Layout)> = figure
        .axes
        .iter()
        .take(figure.layout.cells())
        .map(|axes| panel(axes, &ink))
        .collect();

    tracing::debug!(
        "Rendering {} panel(s) in a {}x{} grid at {}x{} px",
        panels.len(),
        figure.layout.rows,
        figure.layout.cols,
        width,
        height
    );

    let single =
        figure.layout.cells() == 1 && figure.title.is_none() && figure.legend.is_none();

    let scene = match panels.pop() {
        Some((plots, layout)) if single && panels.is_empty() => {
            render_multiple(plots, layout.with_width(width).with_height(height))
        }
        last => {
            panels.extend(last);
            grid(figure, panels, &ink, width, height)
        }
    };

    SvgBackend::new().render_scene(&scene)
}

fn grid(
    figure: &Figure,
    panels: Vec<(Vec<Panel>, Layout)>,
    ink: &Ink,
    width: f64,
    height: f64,
) -> Scene {
    let (plots, layouts): (Vec<_>, Vec<_>) = panels.into_iter().unzip();
    let mut grid = PanelGrid::new(figure.layout.rows, figure.layout.cols)
        .with_plots(plots)
        .with_layouts(layouts)
        .with_figure_size(width, height);

    if let Some(title) = &figure.title {
        grid = grid.with_title(title.as_str());
    }
    if figure.share_x {
        grid = grid.with_shared_x_all();
    }
    if let Some(legend) = &figure.legend {
        let entries = legend
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry {
                label: label.clone(),
                color: ink.series(i),
                shape: LegendShape::Rect,
                dasharray: None,
            })
            .collect();
        grid = grid
            .with_shared_legend_bottom()
            .with_shared_legend_entries(entries);
    }

    grid.render()
}

/// Panel title; pies without a title are named by their y label
fn panel_title(axes: &Axes) -> Option<&str> {
    match (&axes.plot, &axes.title) {
        (_, Some(title)) => Some(title),
        (Plot::Pie(_), None) => axes.y_label.as_deref(),
        _ => None,
    }
}

fn panel(axes: &Axes, ink: &Ink) -> (Vec<Panel>, Layout) {
    let months = match &axes.plot {
        Plot::Area(area) => month_timestamps(&area.x_labels),
        Plot::Line(line) => month_timestamps(&line.x_labels),
        _ => None,
    };

    let plots = match &axes.plot {
        Plot::Bar(bar) => bar_panel(bar, axes.show_legend, ink),
        Plot::Area(area) => {
            let x = x_positions(&area.x_labels, &months);
            area_panel(area, x, axes.show_legend, ink)
        }
        Plot::Line(line) => {
            let x = x_positions(&line.x_labels, &months);
            line_panel(line, x, axes.show_legend, ink)
        }
        Plot::Pie(pie) => pie_panel(pie, ink),
        Plot::Distribution(dist) => distribution_panel(dist, ink),
        Plot::Box(boxed) => box_panel(boxed, ink),
        Plot::Empty => Vec::new(),
    };

    if plots.is_empty() {
        return empty_panel(axes, ink);
    }

    let mut layout = Layout::auto_from_plots(&plots).with_theme(ink.theme.clone());
    if let Some(title) = panel_title(axes) {
        layout = layout.with_title(title);
    }
    if let Some(label) = &axes.x_label {
        layout = layout.with_x_label(label.as_str());
    }
    if let (Some(label), false) = (&axes.y_label, matches!(axes.plot, Plot::Pie(_))) {
        layout = layout.with_y_label(label.as_str());
    }
    if let Some(ticks) = &axes.x_ticks {
        if let ([first, second, ..], Some(last)) = (ticks.as_slice(), ticks.last()) {
            layout = layout
                .with_x_axis_min(*first)
                .with_x_axis_max(*last)
                .with_x_tick_step(second - first);
        }
    }
    if let Some(months) = months.as_deref() {
        if let (Some(first), Some(last)) = (months.first(), months.last()) {
            layout = layout.with_x_datetime(DateTimeAxis::auto(*first, *last));
        }
    }

    (plots, layout)
}

fn empty_panel(axes: &Axes, ink: &Ink) -> (Vec<Panel>, Layout) {
    let plots = vec![Panel::from(TextPlot::new().with_body(NO_DATA))];
    let mut layout = Layout::auto_from_plots(&plots).with_theme(ink.theme.clone());
    if let Some(title) = panel_title(axes) {
        layout = layout.with_title(title);
    }
    (plots, layout)
}

/// Unix timestamps of "YYYY-MM" labels, or None if any label is not a month
fn month_timestamps(labels: &[String]) -> Option<Vec<f64>> {
    labels
        .iter()
        .map(|label| {
            NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc().timestamp() as f64)
        })
        .collect()
}

fn x_positions(labels: &[String], months: &Option<Vec<f64>>) -> Vec<f64> {
    match months {
        Some(months) => months.clone(),
        None => (0..labels.len()).map(|i| i as f64).collect(),
    }
}

fn bar_panel(bar: &BarPlot, legend: bool, ink: &Ink) -> Vec<Panel> {
    if bar.categories.is_empty() || bar.series.is_empty() {
        return Vec::new();
    }

    let colors: Vec<String> = (0..bar.series.len()).map(|i| ink.series(i)).collect();
    let mut plot = bar
        .categories
        .iter()
        .enumerate()
        .fold(BarPanel::new(), |plot, (i, category)| {
            let segments = bar.series.iter().zip(&colors).map(|(series, color)| {
                let value = series.values.get(i).copied().unwrap_or(0.0);
                (value, color.clone())
            });
            plot.with_group(category.as_str(), segments)
        });

    if legend {
        plot = plot.with_legend(bar.series.iter().map(|s| s.name.as_str()).collect());
    }
    if bar.stacked {
        plot = plot.with_stacked();
    }

    vec![plot
        .with_horizontal(bar.orientation == Orientation::Horizontal)
        .into()]
}

fn area_panel(area: &AreaPlot, x: Vec<f64>, legend: bool, ink: &Ink) -> Vec<Panel> {
    if area.series.is_empty() || x.is_empty() {
        return Vec::new();
    }

    if !area.stacked {
        return area
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let mut line = LinePanel::new()
                    .with_data(x.iter().copied().zip(series.values.iter().copied()))
                    .with_color(ink.series(i))
                    .with_fill();
                if legend {
                    line = line.with_legend(series.name.as_str());
                }
                line.into()
            })
            .collect();
    }

    let mut plot = StackedAreaPlot::new().with_x(x);
    for (i, series) in area.series.iter().enumerate() {
        plot = plot
            .with_series(series.values.iter().copied())
            .with_color(ink.series(i));
        if legend {
            plot = plot.with_legend(series.name.as_str());
        }
    }
    vec![plot.into()]
}

fn line_panel(line: &LinePlot, x: Vec<f64>, legend: bool, ink: &Ink) -> Vec<Panel> {
    if x.is_empty() {
        return Vec::new();
    }

    let mut plot = LinePanel::new()
        .with_data(x.into_iter().zip(line.series.values.iter().copied()))
        .with_color(ink.series(0));
    if legend {
        plot = plot.with_legend(line.series.name.as_str());
    }
    vec![plot.into()]
}

fn pie_panel(pie: &PiePlot, ink: &Ink) -> Vec<Panel> {
    if pie.fractions().is_empty() {
        return Vec::new();
    }

    // Empty wedges are skipped but keep their color slot, so every pie of
    // a figure colors a label the same way
    let plot = pie
        .labels
        .iter()
        .zip(&pie.values)
        .enumerate()
        .filter(|(_, (_, value))| **value > 0.0)
        .fold(PiePanel::new(), |plot, (i, (label, value))| {
            plot.with_slice(label.as_str(), *value, ink.series(i))
        });

    let position = if pie.show_labels {
        PieLabelPosition::Auto
    } else {
        PieLabelPosition::None
    };
    vec![plot.with_label_position(position).into()]
}

fn distribution_panel(dist: &DistPlot, ink: &Ink) -> Vec<Panel> {
    let histogram = &dist.histogram;
    if histogram.is_empty() {
        return Vec::new();
    }

    let mut plots: Vec<Panel> = vec![HistogramPanel::from_bins(
        histogram.edges.clone(),
        histogram.density.clone(),
    )
    .with_color(ink.series(0))
    .into()];

    if !dist.kde.is_empty() {
        let (x, y): (Vec<f64>, Vec<f64>) = dist.kde.iter().copied().unzip();
        plots.push(
            DensityPlot::from_curve(x, y)
                .with_color(ink.foreground.as_str())
                .into(),
        );
    }
    plots
}

fn box_panel(plot: &BoxPlot, ink: &Ink) -> Vec<Panel> {
    if plot.stats.is_none() {
        return Vec::new();
    }

    let values = plot.values.iter().copied().filter(|v| v.is_finite());
    vec![BoxPanel::new()
        .with_group(plot.variable.as_str(), values)
        .with_color(ink.series(0))
        .with_horizontal(true)
        .into()]
}
