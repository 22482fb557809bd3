// src/plot_functions/draw_scatter.rs

use plotters::style::RGBColor;

use crate::artists::{Artist, ErrorValues, Marker, ScatterPoints};
use crate::axes::Axes;
use crate::constants::{COLOR_SCATTER_DEFAULT, SCATTER_ALPHA, SCATTER_MARKER_SCALE};

/// Scatter plot whose marker area grows linearly with the error value.
///
/// Marker area in points² is `error * markerscale` (default scale 100), so the
/// caller picks `markerscale` to get legible sizes. Markers are drawn half
/// transparent so overlapping points stay visible.
#[allow(clippy::too_many_arguments)]
pub fn draw_scatter<'a, 'e>(
    ax: &'a mut Axes,
    x: &[f64],
    y: &[f64],
    error: impl Into<ErrorValues<'e>>,
    xlims: (f64, f64),
    ylims: (f64, f64),
    color: Option<RGBColor>,
    markerscale: Option<f64>,
) -> &'a mut Axes {
    let markerscale = markerscale.unwrap_or(SCATTER_MARKER_SCALE);
    let sizes = error.into().to_array(x.len()) * markerscale;

    ax.add_artist(Artist::Scatter(ScatterPoints {
        x: x.to_vec().into(),
        y: y.to_vec().into(),
        sizes,
        color: color.unwrap_or(COLOR_SCATTER_DEFAULT),
        alpha: SCATTER_ALPHA,
        marker: Marker::Circle,
    }));

    ax.set_xlim(xlims);
    ax.set_ylim(ylims);

    ax
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_area_is_linear_in_error() {
        let mut ax = Axes::new();
        draw_scatter(
            &mut ax,
            &[1.0, 2.0, 3.0],
            &[1.0, 2.0, 3.0],
            &[0.5, 1.0, 2.0],
            (0.0, 4.0),
            (0.0, 4.0),
            None,
            Some(40.0),
        );
        match &ax.artists()[0] {
            Artist::Scatter(points) => {
                assert_eq!(points.sizes.to_vec(), vec![20.0, 40.0, 80.0]);
                assert_eq!(points.alpha, 0.5);
                assert_eq!(points.color, RGBColor(0, 128, 0));
            }
            other => panic!("expected scatter artist, got {}", other.kind()),
        }
    }

    #[test]
    fn test_default_markerscale() {
        let mut ax = Axes::new();
        draw_scatter(&mut ax, &[1.0], &[1.0], 0.3, (0.0, 2.0), (0.0, 2.0), None, None);
        match &ax.artists()[0] {
            Artist::Scatter(points) => assert!((points.sizes[0] - 30.0).abs() < 1e-12),
            other => panic!("expected scatter artist, got {}", other.kind()),
        }
    }
}
