//! Exploratory chart reports over an incident table
//!
//! Each report filters the table, aggregates it, and returns the `Figure`
//! it built. Reports never fail: empty selections give figures with no
//! data.

mod age;
mod arms;
mod race;
mod totals;
mod trend;

pub use age::{age_dist, AgeDistOptions};
pub use arms::{top_arms, TopArmsOptions, DEFAULT_TOP_ARMS};
pub use race::{race_pie, RacePieOptions, RACE_PIE_FACETED_SIZE};
pub use totals::{count_total, SHOT, TOP_REGIONS};
pub use trend::{show_trend, TrendOptions};

use shootings_stats::{GaussianKde, Histogram, SummaryStats, DEFAULT_CURVE_POINTS, DEFAULT_CUT};

use crate::chart::DistPlot;

/// Histogram, density curve, and summary of one numeric sample
pub(crate) fn distribution(variable: &str, data: &[f64]) -> DistPlot {
    let kde = GaussianKde::scott(data)
        .map(|kde| kde.curve(DEFAULT_CUT, DEFAULT_CURVE_POINTS))
        .unwrap_or_default();

    DistPlot {
        variable: variable.to_string(),
        histogram: Histogram::auto(data),
        kde,
        summary: SummaryStats::from_data(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_of_empty_sample() {
        let dist = distribution("Age", &[]);
        assert!(dist.histogram.is_empty());
        assert!(dist.kde.is_empty());
        assert_eq!(dist.summary.count, 0);
    }

    #[test]
    fn test_distribution_has_curve() {
        let dist = distribution("Age", &[21.0, 25.0, 30.0, 34.0, 47.0, 52.0]);
        assert_eq!(dist.variable, "Age");
        assert_eq!(dist.kde.len(), DEFAULT_CURVE_POINTS);
        assert_eq!(dist.histogram.total(), 6);
    }
}
