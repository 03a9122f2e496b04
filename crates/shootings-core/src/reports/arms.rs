//! Most used arms

use serde::{Deserialize, Serialize};

use crate::chart::{Axes, BarPlot, Figure, Orientation, Plot, Series};
use crate::filter::Scope;
use crate::pivot::{value_counts, PivotTable};
use crate::record::Attribute;
use crate::style::global_style;
use crate::table::IncidentTable;

/// Number of armed categories shown by default
pub const DEFAULT_TOP_ARMS: usize = 5;

/// Armed category the attribute groups are ranked by
const GUN: &str = "Gun";

/// Options for [`top_arms`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopArmsOptions {
    /// Group counts by this attribute
    pub attr: Option<Attribute>,
    /// Number of armed categories kept
    pub top: usize,
    /// Show each group as percentages of its total
    pub percentage: bool,
    pub scope: Scope,
}

impl Default for TopArmsOptions {
    fn default() -> Self {
        Self {
            attr: None,
            top: DEFAULT_TOP_ARMS,
            percentage: false,
            scope: Scope::default(),
        }
    }
}

impl TopArmsOptions {
    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attr = Some(attr);
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn with_percentage(mut self) -> Self {
        self.percentage = true;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

/// Stacked vertical bars of the most frequent armed categories
///
/// With an attribute, groups are ranked by their "Gun" count, and the
/// armed categories kept are the `top` largest of the first group.
/// Without, the `top` most frequent categories overall.
pub fn top_arms(table: &IncidentTable, options: &TopArmsOptions) -> Figure {
    let scope = &options.scope;
    let title = scope.title(&format!("Top {} Arm Usage", options.top), table);
    let filtered = scope.apply(table);

    tracing::debug!(
        "top_arms: {:?} {:?} attr={:?} top={} percentage={} -> {} records",
        scope.jurisdiction(),
        scope.time_interval,
        options.attr,
        options.top,
        options.percentage,
        filtered.len()
    );

    let (categories, series) = match options.attr {
        Some(attr) => {
            let mut pivot = PivotTable::count(filtered.iter(), attr, Attribute::Armed)
                .sort_rows_by_column_desc(GUN)
                .sort_columns_by_row_desc(0)
                .truncate_columns(options.top);
            if options.percentage {
                pivot = pivot.to_row_percentages();
            }
            (pivot.index().to_vec(), pivot.column_series())
        }
        None => {
            let mut counts = value_counts(filtered.iter().filter_map(|r| r.armed.clone()));
            counts.truncate(options.top);
            let (labels, mut values): (Vec<String>, Vec<f64>) = counts.into_iter().unzip();

            if options.percentage {
                let total: f64 = values.iter().sum();
                if total > 0.0 {
                    values.iter_mut().for_each(|v| *v = *v / total * 100.0);
                }
            }
            (labels, vec![Series::new("Armed", values)])
        }
    };

    let y_label = if options.percentage {
        "Deaths Percentage"
    } else {
        "Deaths"
    };

    let bar = BarPlot {
        orientation: Orientation::Vertical,
        stacked: true,
        categories,
        series,
    };

    Figure::single(
        global_style(),
        Axes::new(Plot::Bar(bar))
            .with_title(title)
            .with_y_label(y_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::IncidentRecord;
    use chrono::NaiveDate;

    fn record(gender: &str, armed: &str) -> IncidentRecord {
        IncidentRecord::new(NaiveDate::from_ymd_opt(2018, 8, 8).unwrap(), "TX", "Austin", "Shot")
            .with_gender(gender)
            .with_armed(armed)
    }

    fn table() -> IncidentTable {
        let mut records = Vec::new();
        for (gender, armed, n) in [
            ("M", "Gun", 6),
            ("M", "Knife", 3),
            ("M", "Unarmed", 2),
            ("M", "Toy Weapon", 1),
            ("F", "Gun", 1),
            ("F", "Vehicle", 4),
        ] {
            records.extend((0..n).map(|_| record(gender, armed)));
        }
        IncidentTable::from_records(records)
    }

    #[test]
    fn test_top_arms_overall() {
        let figure = top_arms(&table(), &TopArmsOptions::default().with_top(3));
        assert_eq!(
            figure.display_title(),
            Some("Top 3 Arm Usage in the US in the Years 2018-2018")
        );

        let bar = figure.plot().as_bar().unwrap();
        assert_eq!(bar.categories, vec!["Gun", "Vehicle", "Knife"]);
        assert_eq!(bar.series[0].values, vec![7.0, 4.0, 3.0]);
        assert_eq!(bar.orientation, Orientation::Vertical);
        assert_eq!(figure.axes[0].y_label.as_deref(), Some("Deaths"));
    }

    #[test]
    fn test_top_arms_by_attribute_ranks_by_gun() {
        let figure = top_arms(
            &table(),
            &TopArmsOptions::default().with_attr(Attribute::Gender).with_top(2),
        );

        let bar = figure.plot().as_bar().unwrap();
        // M has the most guns, so it leads and picks the columns
        assert_eq!(bar.categories, vec!["M", "F"]);
        let names: Vec<&str> = bar.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Gun", "Knife"]);
        assert_eq!(bar.series[0].values, vec![6.0, 1.0]);
        assert_eq!(bar.series[1].values, vec![3.0, 0.0]);
        assert!(bar.stacked);
    }

    #[test]
    fn test_top_arms_percentage_rows_sum_to_100() {
        let options = TopArmsOptions::default()
            .with_attr(Attribute::Gender)
            .with_percentage();
        let figure = top_arms(&table(), &options);
        assert_eq!(
            figure.axes[0].y_label.as_deref(),
            Some("Deaths Percentage")
        );

        let bar = figure.plot().as_bar().unwrap();
        for i in 0..bar.categories.len() {
            assert!((bar.category_total(i) - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_top_arms_empty_selection() {
        let options =
            TopArmsOptions::default().with_scope(Scope::nationwide().with_state("CA"));
        let figure = top_arms(&table(), &options);
        let bar = figure.plot().as_bar().unwrap();
        assert!(bar.categories.is_empty());
    }
}
