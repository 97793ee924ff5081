//! Running spacing-quality statistics
//!
//! After step k the palette could at best be evenly spaced with a minimum gap
//! of 1/k. The quality ratio compares the achieved minimum gap against that
//! optimum, and [`SpacingStats`] folds the per-step ratios into a running
//! worst case and running average.

use serde::{Deserialize, Serialize};

/// Quality ratio for one step: the achieved narrowest gap over the optimal
/// even spacing 1/k
pub fn quality_ratio(narrowest_gap_width: f64, k: usize) -> f64 {
    // Divide by the rounded 1/k rather than multiply by k: the two forms can
    // differ in the last ulp and the reported statistics are sensitive to it
    narrowest_gap_width / (1.0 / k as f64)
}

/// Worst-case and average-case quality accumulators for one run
///
/// Seeded as if the two-color starting state had already contributed two
/// perfect ratios, so the running average starts at 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingStats {
    worst_ratio: f64,
    ratio_total: f64,
    sample_count: usize,
}

impl SpacingStats {
    /// Fresh accumulators in the seeded starting state
    pub fn new() -> Self {
        Self {
            worst_ratio: 1.0,
            ratio_total: 2.0,
            sample_count: 2,
        }
    }

    /// Fold in one step's quality ratio and return the updated running average
    pub fn record(&mut self, ratio: f64) -> f64 {
        if ratio < self.worst_ratio {
            self.worst_ratio = ratio;
        }
        self.ratio_total += ratio;
        self.sample_count += 1;
        self.running_average()
    }

    /// The minimum ratio seen so far; never increases across a run
    pub fn worst_ratio(&self) -> f64 {
        self.worst_ratio
    }

    /// The mean of all ratios folded in so far, seed ratios included
    pub fn running_average(&self) -> f64 {
        self.ratio_total / self.sample_count as f64
    }

    /// Ratios folded in so far, seed ratios included
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

impl Default for SpacingStats {
    fn default() -> Self {
        Self::new()
    }
}
