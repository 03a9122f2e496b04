//! Race proportions

use serde::{Deserialize, Serialize};

use crate::chart::{Axes, Figure, GridLayout, PiePlot, Plot};
use crate::filter::Scope;
use crate::pivot::{value_counts, PivotTable};
use crate::record::Attribute;
use crate::style::{global_style, FigureSize};
use crate::table::IncidentTable;

/// Figure size of the one-pie-per-value layout
pub const RACE_PIE_FACETED_SIZE: FigureSize = FigureSize {
    width: 15.0,
    height: 7.0,
};

/// Options for [`race_pie`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacePieOptions {
    /// Draw one pie per value of this attribute
    pub attr: Option<Attribute>,
    pub scope: Scope,
}

impl RacePieOptions {
    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attr = Some(attr);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// Pie chart of victims' race
///
/// With an attribute, one unlabeled pie per attribute value sits in a
/// single row with a legend of races shared by the whole figure.
pub fn race_pie(table: &IncidentTable, options: &RacePieOptions) -> Figure {
    let scope = &options.scope;
    let title = scope.title("Race Proportion", table);
    let filtered = scope.apply(table);

    tracing::debug!(
        "race_pie: {:?} {:?} attr={:?} -> {} records",
        scope.jurisdiction(),
        scope.time_interval,
        options.attr,
        filtered.len()
    );

    match options.attr {
        Some(attr) => {
            let pivot = PivotTable::count(filtered.iter(), Attribute::Race, attr);
            let races = pivot.index().to_vec();

            let pies: Vec<Axes> = pivot
                .column_series()
                .into_iter()
                .map(|series| {
                    Axes::new(Plot::Pie(PiePlot {
                        labels: races.clone(),
                        values: series.values,
                        show_labels: false,
                    }))
                    .with_y_label(series.name)
                })
                .collect();

            let layout = GridLayout::new(1, pies.len());
            Figure::grid(global_style(), layout, pies)
                .with_title(title)
                .with_size(RACE_PIE_FACETED_SIZE)
                .with_legend(races)
        }
        None => {
            let (labels, values) = value_counts(filtered.iter().filter_map(|r| r.race.clone()))
                .into_iter()
                .unzip();

            Figure::single(
                global_style(),
                Axes::new(Plot::Pie(PiePlot {
                    labels,
                    values,
                    show_labels: true,
                }))
                .with_title(title),
            )
        }
    }
}
