//! Split strategies: where a new color lands inside the widest gap
//!
//! A strategy is a single positive divisor: each new color is placed
//! `width / divisor` to the right of the widest gap's left endpoint. A divisor
//! of 2 halves the gap; larger divisors land closer to the left endpoint.
//! Divisors in (0, 1] are accepted but place the new color at or beyond the
//! gap's right endpoint, which degrades the palette without breaking the run.

use serde::{Deserialize, Serialize};

use crate::error::{SpreadError, SpreadResult};
use crate::interval::Gap;

/// Divisor of the binary-splitting strategy
pub const TWO: f64 = 2.0;

/// Golden ratio divisor, as the fixed decimal the experiments were run with
/// rather than a computed (1 + sqrt 5) / 2
pub const PHI: f64 = 1.61803398875;

/// The default divisor
pub const SEVEN_FOURTHS: f64 = 7.0 / 4.0;

/// A fixed fractional-split rule with a display label for report lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRule {
    divisor: f64,
    label: String,
}

impl SplitRule {
    /// Split the widest gap in half
    pub fn halves() -> Self {
        Self {
            divisor: TWO,
            label: "<<TWO>>".to_string(),
        }
    }

    /// Split the widest gap at the golden ratio
    pub fn golden() -> Self {
        Self {
            divisor: PHI,
            label: "<<PHI>>".to_string(),
        }
    }

    /// Split the widest gap at 4/7 of its width, the default rule
    pub fn seven_fourths() -> Self {
        Self {
            divisor: SEVEN_FOURTHS,
            label: "<<SEVEN_FOURTHS>>".to_string(),
        }
    }

    /// Parse a divisor argument, keeping the raw string as the display label.
    ///
    /// Rejects anything that does not parse to a finite number greater than
    /// zero.
    pub fn parse(arg: &str) -> SpreadResult<Self> {
        let divisor: f64 = arg
            .trim()
            .parse()
            .map_err(|_| SpreadError::UnparsableDivisor(arg.to_string()))?;
        Self::with_divisor(divisor, arg)
    }

    /// Build a rule from an already-parsed divisor and a display label
    pub fn with_divisor(divisor: f64, label: impl Into<String>) -> SpreadResult<Self> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(SpreadError::DivisorOutOfRange { value: divisor });
        }
        Ok(Self {
            divisor,
            label: label.into(),
        })
    }

    /// The divisor driving the split
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// The label stamped on report lines
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The point where this rule splits a gap
    pub fn split(&self, gap: Gap) -> f64 {
        gap.left + gap.width() / self.divisor
    }
}

impl Default for SplitRule {
    fn default() -> Self {
        Self::seven_fourths()
    }
}
