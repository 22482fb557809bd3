// src/artists.rs

// Recorded draw primitives. The plot functions build these and push them onto
// an `Axes`; the renderer turns them into plotters elements later.

use log::debug;
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use plotters::style::RGBColor;

use crate::constants::{
    BOX_WHISKER_IQR_FACTOR, COLOR_ERRORBAR, ERRORBAR_CAPTHICK_PT, LINE_WIDTH_PT,
};

/// Error magnitudes: one value shared by every point, or one per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorValues<'a> {
    Scalar(f64),
    PerPoint(&'a [f64]),
}

impl ErrorValues<'_> {
    /// Materializes the errors for `len` points. Per-point errors are copied as
    /// given, so a length mismatch survives until render time.
    pub fn to_array(&self, len: usize) -> Array1<f64> {
        match *self {
            ErrorValues::Scalar(value) => Array1::from_elem(len, value),
            ErrorValues::PerPoint(values) => Array1::from(values.to_vec()),
        }
    }
}

impl From<f64> for ErrorValues<'_> {
    fn from(value: f64) -> Self {
        ErrorValues::Scalar(value)
    }
}

impl<'a> From<&'a [f64]> for ErrorValues<'a> {
    fn from(values: &'a [f64]) -> Self {
        ErrorValues::PerPoint(values)
    }
}

impl<'a> From<&'a Vec<f64>> for ErrorValues<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        ErrorValues::PerPoint(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ErrorValues<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        ErrorValues::PerPoint(values.as_slice())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Cross,
}

/// Vertical error-bar styling. Lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBarStyle {
    pub ecolor: RGBColor,
    pub elinewidth: f64,
    /// Cap half-length; the drawn cap spans twice this.
    pub capsize: f64,
    pub capthick: f64,
}

impl Default for ErrorBarStyle {
    fn default() -> Self {
        Self {
            ecolor: COLOR_ERRORBAR,
            elinewidth: LINE_WIDTH_PT,
            capsize: 0.0,
            capthick: ERRORBAR_CAPTHICK_PT,
        }
    }
}

/// Line through the points with optional markers and vertical error bars.
#[derive(Debug, Clone)]
pub struct ErrorBarLine {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub yerr_lower: Array1<f64>,
    pub yerr_upper: Array1<f64>,
    pub color: RGBColor,
    pub line_style: LineStyle,
    pub line_width: f64,
    pub marker: Marker,
    pub marker_size: f64,
    pub error_style: ErrorBarStyle,
}

/// Scatter markers; `sizes` are marker areas in points².
#[derive(Debug, Clone)]
pub struct ScatterPoints {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub sizes: Array1<f64>,
    pub color: RGBColor,
    pub alpha: f64,
    pub marker: Marker,
}

/// Vertical bars centred on `x`, rising from zero.
#[derive(Debug, Clone)]
pub struct Bars {
    pub x: Array1<f64>,
    pub heights: Array1<f64>,
    /// Bar width in data units.
    pub width: f64,
    pub color: RGBColor,
    pub yerr_lower: Array1<f64>,
    pub yerr_upper: Array1<f64>,
    pub error_style: ErrorBarStyle,
}

/// Line styling of one box-plot element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxElementStyle {
    pub color: RGBColor,
    pub line_style: LineStyle,
    pub line_width: f64,
}

/// Box-and-whisker plot of several sample sets.
#[derive(Debug, Clone)]
pub struct BoxPlot {
    pub positions: Array1<f64>,
    pub samples: Vec<Array1<f64>>,
    /// Box width in data units.
    pub width: f64,
    pub box_style: BoxElementStyle,
    pub whisker_style: BoxElementStyle,
    pub cap_style: BoxElementStyle,
    pub median_style: BoxElementStyle,
    pub flier_color: RGBColor,
    pub flier_marker: Marker,
    pub flier_size: f64,
}

impl BoxPlot {
    /// Statistics per sample set; `None` for a set with no finite samples.
    pub fn stats(&self) -> Vec<Option<BoxStats>> {
        self.samples
            .iter()
            .map(|s| BoxStats::from_samples(&s.to_vec()))
            .collect()
    }

    /// Caps span half the box width.
    pub fn cap_width(&self) -> f64 {
        self.width * 0.5
    }
}

/// Five-number summary plus outliers of one sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest sample within 1.5 IQR below Q1.
    pub whisker_low: f64,
    /// Highest sample within 1.5 IQR above Q3.
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_samples(samples: &[f64]) -> Option<BoxStats> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.len() < samples.len() {
            debug!(
                "Box plot: ignoring {} non-finite samples",
                samples.len() - sorted.len()
            );
        }
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - BOX_WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + BOX_WHISKER_IQR_FACTOR * iqr;

        let inside: Array1<f64> = sorted
            .iter()
            .copied()
            .filter(|&v| v >= low_fence && v <= high_fence)
            .collect();
        // Whiskers never retract into the box.
        let whisker_low = inside.min().map(|&v| v.min(q1)).unwrap_or(q1);
        let whisker_high = inside.max().map(|&v| v.max(q3)).unwrap_or(q3);
        let fliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Some(BoxStats {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}

/// Linear-interpolation percentile of sorted, non-empty data; `q` in [0, 1].
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let idx = (sorted.len() - 1) as f64 * q;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let fraction = idx - lower as f64;
        sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
    }
}

/// Anything an `Axes` can hold.
#[derive(Debug, Clone)]
pub enum Artist {
    ErrorBar(ErrorBarLine),
    Scatter(ScatterPoints),
    Bar(Bars),
    Box(BoxPlot),
}

impl Artist {
    pub fn kind(&self) -> &'static str {
        match self {
            Artist::ErrorBar(_) => "errorbar",
            Artist::Scatter(_) => "scatter",
            Artist::Bar(_) => "bar",
            Artist::Box(_) => "boxplot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_values_broadcast() {
        assert_eq!(ErrorValues::from(0.5).to_array(3).to_vec(), vec![0.5, 0.5, 0.5]);
        let per_point = [1.0, 2.0];
        // Per-point errors are never padded or truncated.
        assert_eq!(ErrorValues::from(&per_point).to_array(5).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_box_stats_quartiles() {
        let stats = BoxStats::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn test_box_stats_interpolates() {
        let stats = BoxStats::from_samples(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((stats.q1 - 1.75).abs() < 1e-12);
        assert!((stats.median - 2.5).abs() < 1e-12);
        assert!((stats.q3 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_box_stats_outliers() {
        let stats = BoxStats::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        // q1 = 2.25, q3 = 4.75, fence = 4.75 + 1.5 * 2.5 = 8.5
        assert_eq!(stats.whisker_high, 5.0);
        assert_eq!(stats.fliers, vec![100.0]);
    }

    #[test]
    fn test_percentile_endpoints() {
        let sorted = [1.0, 3.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 1.0), 3.0);
        assert_eq!(percentile(&sorted, 0.5), 2.0);
        assert_eq!(percentile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn test_box_stats_empty() {
        assert!(BoxStats::from_samples(&[]).is_none());
        assert!(BoxStats::from_samples(&[f64::NAN]).is_none());
    }
}
