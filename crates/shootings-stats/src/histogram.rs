//! Density-normalized histograms
//!
//! Bin count selection follows the Freedman-Diaconis rule, capped so that
//! small panels in a facet grid stay legible.

use serde::{Deserialize, Serialize};

use crate::{quantile_sorted, sorted_finite};

/// Upper bound on automatically chosen bin counts
pub const MAX_AUTO_BINS: usize = 50;

/// A histogram over equal-width bins
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` entries
    pub edges: Vec<f64>,
    /// Number of values per bin
    pub counts: Vec<usize>,
    /// Count normalized so the histogram area is 1
    pub density: Vec<f64>,
}

impl Histogram {
    /// Build a histogram with an automatically chosen bin count
    pub fn auto(data: &[f64]) -> Self {
        let sorted = sorted_finite(data);
        let bins = auto_bin_count(&sorted);
        Self::from_sorted(&sorted, bins)
    }

    /// Build a histogram with a fixed bin count
    pub fn with_bins(data: &[f64], bins: usize) -> Self {
        let sorted = sorted_finite(data);
        Self::from_sorted(&sorted, bins)
    }

    fn from_sorted(sorted: &[f64], bins: usize) -> Self {
        if sorted.is_empty() || bins == 0 {
            return Self::default();
        }

        let mut lo = sorted[0];
        let mut hi = sorted[sorted.len() - 1];
        if hi <= lo {
            // Single distinct value: center a unit-width bin on it
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for &value in sorted {
            // The last bin is closed on the right
            let idx = (((value - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let n = sorted.len() as f64;
        let density = counts.iter().map(|&c| c as f64 / (n * width)).collect();

        Self {
            edges,
            counts,
            density,
        }
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Width shared by every bin
    pub fn bin_width(&self) -> Option<f64> {
        if self.edges.len() < 2 {
            return None;
        }
        Some(self.edges[1] - self.edges[0])
    }

    /// Tallest density value, 0.0 when empty
    pub fn max_density(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }
}

/// Freedman-Diaconis bin count for sorted finite data
fn auto_bin_count(sorted: &[f64]) -> usize {
    let n = sorted.len();
    if n == 0 {
        return 0;
    }

    let range = sorted[n - 1] - sorted[0];
    if range <= 0.0 {
        return 1;
    }

    let iqr = match (quantile_sorted(sorted, 0.25), quantile_sorted(sorted, 0.75)) {
        (Some(q1), Some(q3)) => q3 - q1,
        _ => 0.0,
    };

    let bins = if iqr > 0.0 {
        let width = 2.0 * iqr / (n as f64).cbrt();
        (range / width).ceil() as usize
    } else {
        (n as f64).sqrt().ceil() as usize
    };

    bins.clamp(1, MAX_AUTO_BINS)
}
