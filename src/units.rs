// src/units.rs

// Physical-unit helpers for sizing figures.

use serde::{Deserialize, Serialize};

use crate::constants::{CM_PER_INCH, MAX_HEIGHT, POINTS_PER_INCH};

/// Converts centimetres to inches.
pub const fn cm_to_inch(value: f64) -> f64 {
    value / CM_PER_INCH
}

/// Height that gives `width` the golden-ratio aspect (width : height = 1.618 : 1).
pub fn golden_ratio_height(width: f64) -> f64 {
    width / (0.5 * 5f64.sqrt() + 0.5)
}

/// Converts a length in typographic points to device pixels at `dpi`.
pub fn points_to_pixels(points: f64, dpi: f64) -> f64 {
    points * dpi / POINTS_PER_INCH
}

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A figure `width` inches wide with golden-ratio height.
    pub fn golden(width: f64) -> Self {
        Self {
            width,
            height: golden_ratio_height(width),
        }
    }

    /// Caps the height at the journal's maximum figure height.
    pub fn clamped_to_max_height(self) -> Self {
        Self {
            width: self.width,
            height: self.height.min(MAX_HEIGHT),
        }
    }

    /// Pixel dimensions at `dpi`, rounded to the nearest pixel.
    pub fn to_pixels(self, dpi: f64) -> (u32, u32) {
        (
            (self.width * dpi).round().max(1.0) as u32,
            (self.height * dpi).round().max(1.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GOLDEN_RATIO, TWO_COLUMN_WIDTH};

    #[test]
    fn test_cm_to_inch() {
        assert_eq!(cm_to_inch(0.0), 0.0);
        assert_eq!(cm_to_inch(2.54), 1.0);
        assert_eq!(cm_to_inch(8.7), 8.7 / 2.54);
        assert!((cm_to_inch(10.0) - 2.0 * cm_to_inch(5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_golden_ratio_height() {
        for width in [0.5, 1.0, 3.42, 7.0, 100.0] {
            let height = golden_ratio_height(width);
            assert_eq!(height, width / ((0.5 * 5f64.sqrt()) + 0.5));
            assert!((width / height - GOLDEN_RATIO).abs() < 1e-12);
        }
    }

    #[test]
    fn test_points_to_pixels() {
        assert_eq!(points_to_pixels(72.0, 100.0), 100.0);
        assert_eq!(points_to_pixels(10.0, 72.0), 10.0);
    }

    #[test]
    fn test_figure_size() {
        let size = FigureSize::golden(TWO_COLUMN_WIDTH);
        assert!((size.width / size.height - GOLDEN_RATIO).abs() < 1e-12);
        assert_eq!(size.to_pixels(100.0), (701, 433));

        let tall = FigureSize::new(3.0, 20.0).clamped_to_max_height();
        assert_eq!(tall.height, MAX_HEIGHT);
        assert_eq!(tall.width, 3.0);
    }
}
