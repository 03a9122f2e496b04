//! shootings-stats - Statistical primitives for distribution charts
//!
//! This crate provides the numeric building blocks behind the age
//! distribution reports:
//!
//! - **Summary**: count, mean, spread, median of a sample
//! - **Histogram**: density-normalized binning with automatic bin counts
//! - **KDE**: Gaussian kernel density estimate with Scott's bandwidth
//! - **Box plot**: quartiles, whiskers, and outliers
//!
//! Non-finite values (NaN, ±inf) are treated as missing everywhere.

pub mod boxplot;
pub mod histogram;
pub mod kde;
pub mod summary;

pub use boxplot::*;
pub use histogram::*;
pub use kde::*;
pub use summary::*;

/// Collect the finite values of a sample, sorted ascending
pub(crate) fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// Quantile of sorted data using linear interpolation between order statistics
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
