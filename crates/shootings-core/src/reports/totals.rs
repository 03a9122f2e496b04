//! Total deaths per region

use crate::chart::{Axes, BarPlot, Figure, Orientation, Plot};
use crate::filter::Jurisdiction;
use crate::pivot::PivotTable;
use crate::record::Attribute;
use crate::style::global_style;
use crate::table::IncidentTable;

/// Manner of death the regions are ranked by
pub const SHOT: &str = "Shot";

/// Number of regions shown
pub const TOP_REGIONS: usize = 10;

/// Stacked horizontal bars of deaths by manner of death for the ten
/// regions with the most "Shot" deaths
///
/// With a state, regions are that state's cities; otherwise they are the
/// states of the whole table. The largest region is the last category so
/// it is drawn at the top.
pub fn count_total(table: &IncidentTable, state: Option<&str>) -> Figure {
    let jurisdiction = Jurisdiction::from_options(state, None);
    let (regions, base) = match jurisdiction {
        Jurisdiction::State(_) => (Attribute::City, "Deaths by City"),
        _ => (Attribute::State, "Deaths by State"),
    };
    let title = format!("{}{}", base, jurisdiction.title_suffix());

    let filtered = table.in_jurisdiction(&jurisdiction);
    let pivot = PivotTable::count(filtered.iter(), regions, Attribute::MannerOfDeath)
        .sort_rows_by_column_desc(SHOT)
        .head(TOP_REGIONS)
        .reverse_rows();

    tracing::debug!(
        "count_total: {:?} -> {} records, {} regions",
        jurisdiction,
        filtered.len(),
        pivot.len()
    );

    let bar = BarPlot {
        orientation: Orientation::Horizontal,
        stacked: true,
        categories: pivot.index().to_vec(),
        series: pivot.column_series(),
    };

    Figure::single(
        global_style(),
        Axes::new(Plot::Bar(bar))
            .with_title(title)
            .with_x_label("Total Deaths"),
    )
}
