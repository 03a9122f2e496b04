//! Gaussian kernel density estimation

use serde::{Deserialize, Serialize};

use crate::sorted_finite;
use crate::summary::SummaryStats;

/// Default number of grid points for a KDE curve
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Default bandwidth multiples to extend the curve past the data
pub const DEFAULT_CUT: f64 = 3.0;

/// Gaussian KDE over a finite sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianKde {
    data: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Build a KDE using Scott's rule: `sample_std * n^(-1/5)`
    ///
    /// Returns `None` when fewer than two finite values exist or the
    /// sample has no spread.
    pub fn scott(data: &[f64]) -> Option<Self> {
        let data = sorted_finite(data);
        if data.len() < 2 {
            return None;
        }

        let stats = SummaryStats::from_data(&data);
        let bandwidth = stats.sample_std_dev * (data.len() as f64).powf(-0.2);
        if bandwidth.is_nan() || bandwidth <= 0.0 {
            return None;
        }

        Some(Self { data, bandwidth })
    }

    /// Kernel bandwidth
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluate the density at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * self.bandwidth);
        let sum: f64 = self
            .data
            .iter()
            .map(|xi| {
                let z = (x - xi) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum / self.data.len() as f64
    }

    /// Evaluate on an evenly spaced grid covering the data extended by
    /// `cut` bandwidths on each side
    pub fn curve(&self, cut: f64, points: usize) -> Vec<(f64, f64)> {
        if points == 0 {
            return Vec::new();
        }

        let lo = self.data[0] - cut * self.bandwidth;
        let hi = self.data[self.data.len() - 1] + cut * self.bandwidth;
        let step = if points > 1 {
            (hi - lo) / (points - 1) as f64
        } else {
            0.0
        };

        (0..points)
            .map(|i| {
                let x = lo + step * i as f64;
                (x, self.evaluate(x))
            })
            .collect()
    }
}
