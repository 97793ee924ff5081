//! The assigned-color sequence

use serde::{Deserialize, Serialize};

use crate::interval::{narrowest_gap, widest_gap, Gap};

/// The ordered sequence of colors assigned so far, each a point in [0, 1]
///
/// Starts as the two fixed endpoint colors 0.0 and 1.0 and grows by one point
/// per insertion. Assigned colors never move; the sequence is re-sorted after
/// every insertion, so it always reads ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    points: Vec<f64>,
}

impl Palette {
    /// A fresh palette holding the two endpoint colors
    pub fn new() -> Self {
        Self {
            points: vec![0.0, 1.0],
        }
    }

    /// Insert a color and restore ascending order.
    ///
    /// Appends then re-sorts rather than splicing at a computed position,
    /// matching how the gap scans expect the sequence to be maintained.
    pub fn insert(&mut self, color: f64) {
        self.points.push(color);
        self.points
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Number of colors assigned so far
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the palette holds no colors (never true for a palette built
    /// through [`Palette::new`])
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The colors in ascending order
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// The widest gap between adjacent colors
    pub fn widest_gap(&self) -> Gap {
        widest_gap(&self.points)
    }

    /// The narrowest gap between adjacent colors
    pub fn narrowest_gap(&self) -> Gap {
        narrowest_gap(&self.points)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Palette> for Vec<f64> {
    fn from(palette: Palette) -> Self {
        palette.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_palette_holds_endpoints() {
        let palette = Palette::new();
        assert_eq!(palette.as_slice(), &[0.0, 1.0]);
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut palette = Palette::new();
        palette.insert(0.5);
        palette.insert(0.25);
        palette.insert(0.75);
        assert_eq!(palette.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_insert_grows_by_one() {
        let mut palette = Palette::new();
        for i in 0..10 {
            palette.insert(0.05 * (i as f64 + 1.0));
            assert_eq!(palette.len(), 3 + i);
        }
    }

    #[test]
    fn test_duplicate_insert_is_kept() {
        let mut palette = Palette::new();
        palette.insert(0.5);
        palette.insert(0.5);
        assert_eq!(palette.as_slice(), &[0.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_gap_scans_delegate() {
        let mut palette = Palette::new();
        palette.insert(0.6);
        let widest = palette.widest_gap();
        assert_eq!((widest.left, widest.right), (0.0, 0.6));
        let narrowest = palette.narrowest_gap();
        assert_eq!((narrowest.left, narrowest.right), (0.6, 1.0));
    }

    #[test]
    fn test_into_vec() {
        let mut palette = Palette::new();
        palette.insert(0.5);
        let points: Vec<f64> = palette.into();
        assert_eq!(points, vec![0.0, 0.5, 1.0]);
    }
}
