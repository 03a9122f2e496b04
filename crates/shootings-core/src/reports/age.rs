//! Age distribution of victims

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shootings_stats::BoxStats;

use crate::chart::{Axes, BoxPlot, Figure, GridLayout, Plot};
use crate::error::validation::MAX_DIMENSION;
use crate::filter::Scope;
use crate::record::{Attribute, IncidentRecord};
use crate::style::{global_style, FigureSize};
use crate::table::IncidentTable;

use super::distribution;

/// Size of one facet panel in inches
const FACET_PANEL_SIZE: FigureSize = FigureSize {
    width: 10.0,
    height: 6.0,
};

/// Age axis ticks, every 5 years from 0 to 100
fn age_ticks() -> Vec<f64> {
    (0..=20).map(|i| f64::from(i) * 5.0).collect()
}

/// Options for [`age_dist`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDistOptions {
    /// Facet rows by this attribute
    pub rows: Option<Attribute>,
    /// Facet columns by this attribute
    pub cols: Option<Attribute>,
    /// Only the jurisdiction is used; `time_interval` is ignored and every
    /// year of the table is included
    pub scope: Scope,
}

impl AgeDistOptions {
    pub fn with_rows(mut self, attr: Attribute) -> Self {
        self.rows = Some(attr);
        self
    }

    pub fn with_cols(mut self, attr: Attribute) -> Self {
        self.cols = Some(attr);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.scope = self.scope.with_state(state);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.scope = self.scope.with_city(city);
        self
    }
}

/// Age histogram and density curve
///
/// With facet attributes, one panel per (row value, column value) pair in
/// a grid under a shared super-title. Without, the distribution is drawn
/// above a box plot on a shared age axis ticked every 5 years.
pub fn age_dist(table: &IncidentTable, options: &AgeDistOptions) -> Figure {
    let jurisdiction = options.scope.jurisdiction();
    let title = format!("Age Distribution of Victims{}", jurisdiction.title_suffix());
    let filtered = table.in_jurisdiction(&jurisdiction);

    tracing::debug!(
        "age_dist: {:?} rows={:?} cols={:?} -> {} records",
        jurisdiction,
        options.rows,
        options.cols,
        filtered.len()
    );

    if options.rows.is_some() || options.cols.is_some() {
        facet_grid(&filtered, options.rows, options.cols, title)
    } else {
        with_box_plot(&filtered, title)
    }
}

fn with_box_plot(table: &IncidentTable, title: String) -> Figure {
    let ages = table.ages();
    let ticks = age_ticks();

    let dist = Axes::new(Plot::Distribution(distribution("Age", &ages)))
        .with_title(title)
        .with_x_ticks(ticks.clone());
    let boxed = Axes::new(Plot::Box(BoxPlot {
        variable: "Age".to_string(),
        stats: BoxStats::from_data(&ages),
        values: ages,
    }))
    .with_x_label("Age")
    .with_x_ticks(ticks);

    Figure::grid(global_style(), GridLayout::new(2, 1), vec![dist, boxed]).with_shared_x()
}

/// Distinct values of a facet attribute, or a single unnamed facet
fn facet_values(table: &IncidentTable, attr: Option<Attribute>) -> Vec<Option<String>> {
    match attr {
        Some(attr) => table
            .iter()
            .filter_map(|r| r.attribute(attr))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(Some)
            .collect(),
        None => vec![None],
    }
}

fn in_facet(record: &IncidentRecord, attr: Option<Attribute>, value: &Option<String>) -> bool {
    match (attr, value) {
        (Some(attr), Some(value)) => record.attribute(attr).as_ref() == Some(value),
        _ => true,
    }
}

fn facet_grid(
    table: &IncidentTable,
    rows: Option<Attribute>,
    cols: Option<Attribute>,
    title: String,
) -> Figure {
    let row_values = facet_values(table, rows);
    let col_values = facet_values(table, cols);

    let mut panels = Vec::with_capacity(row_values.len() * col_values.len());
    for row_value in &row_values {
        for col_value in &col_values {
            let ages: Vec<f64> = table
                .iter()
                .filter(|r| in_facet(r, rows, row_value) && in_facet(r, cols, col_value))
                .filter_map(|r| r.age)
                .collect();

            let label = [(rows, row_value), (cols, col_value)]
                .into_iter()
                .filter_map(|facet| match facet {
                    (Some(attr), Some(value)) => Some(format!("{} = {}", attr, value)),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" | ");

            panels.push(
                Axes::new(Plot::Distribution(distribution("Age", &ages)))
                    .with_title(label)
                    .with_x_label("Age"),
            );
        }
    }

    let layout = GridLayout::new(row_values.len(), col_values.len());
    let style = global_style();
    let size = facet_figure_size(layout, style.dpi);

    Figure::grid(style, layout, panels)
        .with_title(title)
        .with_size(size)
}

/// One full-size panel per cell, shrunk uniformly when the grid would
/// exceed the export limit at `dpi`
fn facet_figure_size(layout: GridLayout, dpi: u32) -> FigureSize {
    let width = FACET_PANEL_SIZE.width * layout.cols as f64;
    let height = FACET_PANEL_SIZE.height * layout.rows as f64;
    let limit = f64::from(MAX_DIMENSION) / f64::from(dpi.max(1));
    let scale = (limit / width).min(limit / height).min(1.0);

    if scale < 1.0 {
        tracing::debug!(
            "Facet grid {}x{} shrunk to {:.0}% to stay within {} px",
            layout.rows,
            layout.cols,
            scale * 100.0,
            MAX_DIMENSION
        );
    }
    FigureSize::new(width * scale, height * scale)
}
