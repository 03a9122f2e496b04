//! Box plot statistics
//!
//! Whiskers reach the most extreme values inside 1.5 IQR of the box;
//! anything beyond is reported as an outlier.

use serde::{Deserialize, Serialize};

use crate::{quantile_sorted, sorted_finite};

/// Five number summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Get the interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower fence for outlier detection (Q1 - 1.5 * IQR)
    pub fn lower_fence(&self) -> f64 {
        self.q1 - 1.5 * self.iqr()
    }

    /// Upper fence for outlier detection (Q3 + 1.5 * IQR)
    pub fn upper_fence(&self) -> f64 {
        self.q3 + 1.5 * self.iqr()
    }
}

/// Everything needed to draw one box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxStats {
    pub summary: FiveNumberSummary,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
    pub count: usize,
}

impl BoxStats {
    /// Compute box statistics, `None` for a sample with no finite values
    pub fn from_data(data: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(data);
        if sorted.is_empty() {
            return None;
        }

        let summary = FiveNumberSummary {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        };

        let (lower, upper) = (summary.lower_fence(), summary.upper_fence());
        let inside = sorted.iter().copied().filter(|&x| x >= lower && x <= upper);
        let whisker_low = inside.clone().next().unwrap_or(summary.q1);
        let whisker_high = inside.last().unwrap_or(summary.q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&x| x < lower || x > upper)
            .collect();

        Some(Self {
            summary,
            whisker_low,
            whisker_high,
            outliers,
            count: sorted.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_stats_quartiles() {
        let data: Vec<f64> = (1..=9).map(|x| x as f64).collect();
        let stats = BoxStats::from_data(&data).unwrap();

        assert_eq!(stats.summary.q1, 3.0);
        assert_eq!(stats.summary.median, 5.0);
        assert_eq!(stats.summary.q3, 7.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 9.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_flags_outliers() {
        let data = vec![20.0, 22.0, 24.0, 25.0, 26.0, 28.0, 30.0, 91.0];
        let stats = BoxStats::from_data(&data).unwrap();

        assert_eq!(stats.outliers, vec![91.0]);
        assert_eq!(stats.whisker_high, 30.0);
        assert_eq!(stats.summary.max, 91.0);
    }

    #[test]
    fn test_box_stats_empty() {
        assert!(BoxStats::from_data(&[]).is_none());
        assert!(BoxStats::from_data(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_fences() {
        let summary = FiveNumberSummary {
            min: 0.0,
            q1: 10.0,
            median: 15.0,
            q3: 20.0,
            max: 40.0,
        };
        assert_eq!(summary.iqr(), 10.0);
        assert_eq!(summary.lower_fence(), -5.0);
        assert_eq!(summary.upper_fence(), 35.0);
    }
}
