//! The sequential split-and-evaluate loop
//!
//! Each step finds the widest gap in the palette, places one new color inside
//! it according to the [`SplitRule`], then measures how far the narrowest gap
//! has drifted from the optimal even spacing. The horizon is fixed: steps run
//! k = 2 through 99, growing the palette from 2 to 100 colors.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::metrics::{quality_ratio, SpacingStats};
use crate::palette::Palette;
use crate::strategy::SplitRule;

/// Exclusive upper bound on the step counter
pub const STEP_LIMIT: usize = 100;

/// The first step counter value; the two endpoint colors are already in place
/// before any step runs
pub const FIRST_STEP: usize = 2;

/// The measurements taken after one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Label of the rule that drove the step
    pub label: String,
    /// The step counter, also the denominator index of the optimal spacing
    pub k: usize,
    /// This step's quality ratio
    pub ratio: f64,
    /// Worst ratio seen so far in the run
    pub worst_ratio: f64,
    /// Running average ratio over the run, seed ratios included
    pub average_ratio: f64,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, k: {}, wK: {}, wMin: {}, wAvg: {}",
            self.label, self.k, self.ratio, self.worst_ratio, self.average_ratio
        )
    }
}

/// A completed run: every step report plus the final palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Label of the rule the run used
    pub label: String,
    /// Divisor the run used
    pub divisor: f64,
    /// Per-step reports in step order
    pub steps: Vec<StepReport>,
    /// The palette as it stood when the horizon was reached
    pub palette: Palette,
}

impl RunReport {
    /// The run's overall worst-case quality
    pub fn worst_ratio(&self) -> f64 {
        self.steps.last().map(|step| step.worst_ratio).unwrap_or(1.0)
    }

    /// The run's overall average quality
    pub fn average_ratio(&self) -> f64 {
        self.steps
            .last()
            .map(|step| step.average_ratio)
            .unwrap_or(1.0)
    }
}

/// Drives one palette through the fixed splitting horizon under one rule
#[derive(Debug, Clone)]
pub struct Simulation {
    rule: SplitRule,
    palette: Palette,
    stats: SpacingStats,
    k: usize,
}

impl Simulation {
    /// A fresh run: endpoint palette, seeded statistics, counter at
    /// [`FIRST_STEP`]
    pub fn new(rule: SplitRule) -> Self {
        Self {
            rule,
            palette: Palette::new(),
            stats: SpacingStats::new(),
            k: FIRST_STEP,
        }
    }

    /// The rule this run evaluates
    pub fn rule(&self) -> &SplitRule {
        &self.rule
    }

    /// The palette as assigned so far
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Place one color and measure the result; `None` once the horizon is
    /// exhausted
    pub fn step(&mut self) -> Option<StepReport> {
        if self.k >= STEP_LIMIT {
            return None;
        }
        let k = self.k;

        let widest = self.palette.widest_gap();
        let color = self.rule.split(widest);
        debug!(
            k,
            left = widest.left,
            right = widest.right,
            color,
            "split widest gap"
        );

        self.palette.insert(color);
        trace!(k, palette = ?self.palette.as_slice(), "palette after insert");

        let narrowest = self.palette.narrowest_gap();
        let ratio = quality_ratio(narrowest.width(), k);
        let average_ratio = self.stats.record(ratio);

        self.k += 1;
        Some(StepReport {
            label: self.rule.label().to_string(),
            k,
            ratio,
            worst_ratio: self.stats.worst_ratio(),
            average_ratio,
        })
    }

    /// Drive the remaining steps and collect the whole run
    pub fn run(mut self) -> RunReport {
        let mut steps = Vec::with_capacity(STEP_LIMIT - self.k);
        while let Some(report) = self.step() {
            steps.push(report);
        }
        RunReport {
            label: self.rule.label().to_string(),
            divisor: self.rule.divisor(),
            steps,
            palette: self.palette,
        }
    }
}
