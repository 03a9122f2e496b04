//! Summary statistics for a numeric sample
//!
//! Used to annotate distribution panels and to size KDE bandwidths.

use serde::{Deserialize, Serialize};

use crate::{quantile_sorted, sorted_finite};

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of missing/NaN values
    pub missing: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub sample_std_dev: f64,
    /// Median (50th percentile)
    pub median: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let sorted = sorted_finite(data);
        let missing = data.len() - sorted.len();

        if sorted.is_empty() {
            return Self::empty(missing);
        }

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let squared: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();

        let std_dev = (squared / count as f64).sqrt();
        let sample_std_dev = if count > 1 {
            (squared / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Self {
            count,
            missing,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            std_dev,
            sample_std_dev,
            median: quantile_sorted(&sorted, 0.5).unwrap_or(f64::NAN),
        }
    }

    /// Create empty statistics (all NaN)
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            std_dev: f64::NAN,
            sample_std_dev: f64::NAN,
            median: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the sample had no finite values
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stats_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert!((stats.mean - 5.5).abs() < 1e-10);
        assert!((stats.median - 5.5).abs() < 1e-10);
        assert!((stats.range() - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_stats_with_nan() {
        let data = vec![1.0, 2.0, f64::NAN, 4.0, 5.0];
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_sample_std_dev_uses_bessel_correction() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStats::from_data(&data);

        assert!((stats.std_dev - 2.0).abs() < 1e-10);
        assert!((stats.sample_std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_summary_stats_empty() {
        let stats = SummaryStats::from_data(&[f64::NAN]);
        assert!(stats.is_empty());
        assert_eq!(stats.missing, 1);
        assert!(stats.mean.is_nan());
    }
}
