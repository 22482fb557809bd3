// src/plot_functions/draw_box.rs

use plotters::style::RGBColor;

use crate::artists::{Artist, BoxElementStyle, BoxPlot, LineStyle, Marker};
use crate::axes::Axes;
use crate::constants::{
    BOX_FLIER_SIZE_PT, BOX_LINE_WIDTH_PT, BOX_MAX_WIDTH, BOX_MEDIAN_LINE_WIDTH_PT,
    BOX_WIDTH_FACTOR, COLOR_BOX_MEDIAN_DEFAULT, COLOR_BOX_STRUCTURE,
};

/// Box-and-whisker plot, one box per sample set in `y`, placed at the matching `x`.
///
/// Box, whiskers and caps are solid black, outliers are black crosses, and the
/// median line is 2 pt wide in `median_color` (default magenta). `_error` is
/// not used: the spread comes from the samples themselves.
#[allow(clippy::too_many_arguments)]
pub fn draw_box<'a>(
    ax: &'a mut Axes,
    x: &[f64],
    y: &[Vec<f64>],
    _error: &[f64],
    xlims: (f64, f64),
    ylims: (f64, f64),
    median_color: Option<RGBColor>,
) -> &'a mut Axes {
    let structure = BoxElementStyle {
        color: COLOR_BOX_STRUCTURE,
        line_style: LineStyle::Solid,
        line_width: BOX_LINE_WIDTH_PT,
    };

    ax.add_artist(Artist::Box(BoxPlot {
        positions: x.to_vec().into(),
        samples: y.iter().map(|s| s.clone().into()).collect(),
        width: box_width(x),
        box_style: structure,
        whisker_style: structure,
        cap_style: structure,
        median_style: BoxElementStyle {
            color: median_color.unwrap_or(COLOR_BOX_MEDIAN_DEFAULT),
            line_style: LineStyle::Solid,
            line_width: BOX_MEDIAN_LINE_WIDTH_PT,
        },
        flier_color: COLOR_BOX_STRUCTURE,
        flier_marker: Marker::Cross,
        flier_size: BOX_FLIER_SIZE_PT,
    }));

    ax.set_xlim(xlims);
    ax.set_ylim(ylims);

    ax
}

/// Box width in data units: 15% of the span of the positions (at least 1),
/// capped at 0.5.
fn box_width(positions: &[f64]) -> f64 {
    let (min, max) = positions
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
            (lo.min(p), hi.max(p))
        });
    let span = if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    };
    (BOX_WIDTH_FACTOR * span.max(1.0)).min(BOX_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_width() {
        assert!((box_width(&[1.0, 2.0, 3.0]) - 0.3).abs() < 1e-12);
        assert!((box_width(&[1.0]) - 0.15).abs() < 1e-12);
        assert_eq!(box_width(&[0.0, 10.0]), 0.5);
        assert!((box_width(&[]) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_black_structure_colored_median() {
        let mut ax = Axes::new();
        let samples = vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 4.0, 20.0]];
        draw_box(
            &mut ax,
            &[1.0, 2.0],
            &samples,
            &[],
            (0.0, 3.0),
            (0.0, 25.0),
            Some(RGBColor(0, 0, 255)),
        );
        match &ax.artists()[0] {
            Artist::Box(boxes) => {
                for style in [boxes.box_style, boxes.whisker_style, boxes.cap_style] {
                    assert_eq!(style.color, RGBColor(0, 0, 0));
                    assert_eq!(style.line_style, LineStyle::Solid);
                }
                assert_eq!(boxes.median_style.color, RGBColor(0, 0, 255));
                assert_eq!(boxes.median_style.line_width, 2.0);
                assert_eq!(boxes.flier_marker, Marker::Cross);
                assert_eq!(boxes.positions.to_vec(), vec![1.0, 2.0]);
                assert_eq!(boxes.stats().len(), 2);
            }
            other => panic!("expected boxplot artist, got {}", other.kind()),
        }
    }
}
