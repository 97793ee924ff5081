//! Gap scans over sorted point sequences
//!
//! A palette is a sorted list of points in [0, 1]; the gaps between adjacent
//! points are what the splitting strategy and the quality metrics look at.
//! Both scans walk adjacent pairs once and break ties by scan order, so the
//! leftmost extreme gap always wins.

use serde::{Deserialize, Serialize};

/// Width seed for the narrowest-gap scan. Every real gap in a [0, 1] palette
/// is narrower than this, so the first pair always replaces it.
const WIDTH_ABOVE_ANY_GAP: f64 = 1.1;

/// A gap between two adjacent points of a sorted sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Left endpoint (the smaller point)
    pub left: f64,
    /// Right endpoint (the larger point)
    pub right: f64,
}

impl Gap {
    /// Width of the gap
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Find the widest gap between adjacent points.
///
/// Ties break toward the leftmost widest gap. The slice must be sorted
/// ascending and hold at least two points.
pub fn widest_gap(points: &[f64]) -> Gap {
    debug_assert!(points.len() >= 2, "gap scan needs at least two points");

    let mut widest = 0.0;
    let mut at = 0;
    for (i, pair) in points.windows(2).enumerate() {
        let width = pair[1] - pair[0];
        if width > widest {
            widest = width;
            at = i;
        }
    }

    Gap {
        left: points[at],
        right: points[at + 1],
    }
}

/// Find the narrowest gap between adjacent points.
///
/// Ties break toward the leftmost narrowest gap. The slice must be sorted
/// ascending and hold at least two points.
pub fn narrowest_gap(points: &[f64]) -> Gap {
    debug_assert!(points.len() >= 2, "gap scan needs at least two points");

    let mut narrowest = WIDTH_ABOVE_ANY_GAP;
    let mut at = 0;
    for (i, pair) in points.windows(2).enumerate() {
        let width = pair[1] - pair[0];
        if width < narrowest {
            narrowest = width;
            at = i;
        }
    }

    Gap {
        left: points[at],
        right: points[at + 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gap_width() {
        let gap = Gap {
            left: 0.25,
            right: 0.75,
        };
        assert_relative_eq!(gap.width(), 0.5);
    }

    #[test]
    fn test_widest_gap_basic() {
        let points = [0.0, 0.1, 0.6, 1.0];
        let gap = widest_gap(&points);
        assert_eq!(gap.left, 0.1);
        assert_eq!(gap.right, 0.6);
    }

    #[test]
    fn test_narrowest_gap_basic() {
        let points = [0.0, 0.1, 0.6, 1.0];
        let gap = narrowest_gap(&points);
        assert_eq!(gap.left, 0.0);
        assert_eq!(gap.right, 0.1);
    }

    #[test]
    fn test_two_points_both_scans_agree() {
        let points = [0.0, 1.0];
        assert_eq!(widest_gap(&points), narrowest_gap(&points));
        assert_relative_eq!(widest_gap(&points).width(), 1.0);
    }

    #[test]
    fn test_ties_pick_leftmost() {
        // All gaps equal, so both scans must settle on the first pair
        let points = [0.0, 0.5, 1.0];
        let widest = widest_gap(&points);
        assert_eq!((widest.left, widest.right), (0.0, 0.5));
        let narrowest = narrowest_gap(&points);
        assert_eq!((narrowest.left, narrowest.right), (0.0, 0.5));
    }

    #[test]
    fn test_later_equal_gap_does_not_replace() {
        // Widest ties at positions 0 and 2; leftmost wins
        let points = [0.0, 0.4, 0.6, 1.0];
        let widest = widest_gap(&points);
        assert_eq!((widest.left, widest.right), (0.0, 0.4));
    }
}
