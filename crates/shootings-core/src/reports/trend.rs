//! Monthly death trend

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chart::{AreaPlot, Axes, Figure, LinePlot, Plot, Series};
use crate::filter::Scope;
use crate::pivot::PivotTable;
use crate::record::Attribute;
use crate::style::global_style;
use crate::table::{IncidentTable, MonthKey};

/// Options for [`show_trend`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendOptions {
    /// Split monthly counts by this attribute
    pub attr: Option<Attribute>,
    pub scope: Scope,
}

impl TrendOptions {
    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attr = Some(attr);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// Deaths per month, as a single line or stacked by an attribute
///
/// The monthly index runs from January of the first year to December of
/// the last year of the effective range; months without deaths are zero.
pub fn show_trend(table: &IncidentTable, options: &TrendOptions) -> Figure {
    let scope = &options.scope;
    let title = scope.title("Death Trend", table);
    let filtered = scope.apply(table);

    let keys: Vec<MonthKey> = scope
        .effective_years(table)
        .map(MonthKey::months_in)
        .unwrap_or_default();
    let months: Vec<String> = keys.iter().map(MonthKey::to_string).collect();

    tracing::debug!(
        "show_trend: {:?} {:?} -> {} records over {} months",
        scope.jurisdiction(),
        scope.time_interval,
        filtered.len(),
        months.len()
    );

    let axes = match options.attr {
        Some(attr) => {
            let pivot = PivotTable::from_pairs(filtered.iter().filter_map(|r| {
                Some((MonthKey::of(r.date).to_string(), r.attribute(attr)?))
            }))
            .reindex(&months);

            Axes::new(Plot::Area(AreaPlot {
                stacked: true,
                x_labels: months,
                series: pivot.column_series(),
            }))
            .with_x_label("Date")
        }
        None => {
            let mut counts: BTreeMap<MonthKey, f64> = BTreeMap::new();
            for record in filtered.iter() {
                *counts.entry(MonthKey::of(record.date)).or_insert(0.0) += 1.0;
            }
            let values = keys
                .iter()
                .map(|k| counts.get(k).copied().unwrap_or(0.0))
                .collect();

            Axes::new(Plot::Line(LinePlot {
                x_labels: months,
                series: Series::new("Deaths", values),
            }))
        }
    };

    Figure::single(
        global_style(),
        axes.with_title(title).with_y_label("Monthly Deaths"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::YearRange;
    use crate::record::IncidentRecord;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, state: &str, race: &str) -> IncidentRecord {
        IncidentRecord::new(NaiveDate::from_ymd_opt(y, m, 10).unwrap(), state, "X", "Shot")
            .with_race(race)
    }

    fn table() -> IncidentTable {
        IncidentTable::from_records(vec![
            record(2015, 1, "CA", "W"),
            record(2015, 1, "CA", "B"),
            record(2015, 3, "CA", "W"),
            record(2016, 12, "WA", "H"),
        ])
    }

    #[test]
    fn test_trend_line_zero_fills_months() {
        let figure = show_trend(&table(), &TrendOptions::default());
        assert_eq!(
            figure.display_title(),
            Some("Death Trend in the US in the Years 2015-2016")
        );

        let line = figure.plot().as_line().unwrap();
        assert_eq!(line.x_labels.len(), 24);
        assert_eq!(line.x_labels[0], "2015-01");
        assert_eq!(line.x_labels[23], "2016-12");
        assert_eq!(line.series.values[0], 2.0);
        assert_eq!(line.series.values[1], 0.0);
        assert_eq!(line.series.values[2], 1.0);
        assert_eq!(line.series.total(), 4.0);
        assert_eq!(figure.axes[0].y_label.as_deref(), Some("Monthly Deaths"));
    }

    #[test]
    fn test_trend_state_keeps_table_span() {
        let options = TrendOptions::default().with_scope(Scope::nationwide().with_state("CA"));
        let figure = show_trend(&table(), &options);

        assert_eq!(
            figure.display_title(),
            Some("Death Trend in the State of CA in the Years 2015-2016")
        );
        let line = figure.plot().as_line().unwrap();
        assert_eq!(line.x_labels.len(), 24);
        assert_eq!(line.series.total(), 3.0);
    }

    #[test]
    fn test_trend_by_attribute_is_stacked_area() {
        let options = TrendOptions::default()
            .with_attr(Attribute::Race)
            .with_scope(Scope::nationwide().with_years(YearRange::year(2015)));
        let figure = show_trend(&table(), &options);

        assert_eq!(
            figure.display_title(),
            Some("Death Trend in the US in the Years 2015-2015")
        );
        let area = figure.plot().as_area().unwrap();
        assert!(area.stacked);
        assert_eq!(area.x_labels.len(), 12);
        let names: Vec<&str> = area.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "W"]);
        assert_eq!(area.series[1].values[0], 1.0);
        assert_eq!(area.series[1].values[2], 1.0);
        assert_eq!(figure.axes[0].x_label.as_deref(), Some("Date"));
    }

    #[test]
    fn test_trend_empty_table() {
        let figure = show_trend(&IncidentTable::default(), &TrendOptions::default());
        assert_eq!(figure.display_title(), Some("Death Trend in the US"));
        assert!(figure.plot().as_line().unwrap().x_labels.is_empty());
    }
}
