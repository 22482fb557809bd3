// src/plot_functions/draw_bar.rs

use ndarray::Array1;
use plotters::style::RGBColor;

use crate::artists::{Artist, Bars, ErrorBarStyle};
use crate::axes::Axes;
use crate::constants::{BAR_WIDTH, COLOR_BAR_DEFAULT};

/// Bar chart with upper-only error bars.
///
/// The lower whisker is always zero, so `error` only extends above each bar.
/// `error_style` is handed to the error bars unchanged. Bars are centred on
/// `x` and `width` wide in data units (default 0.75); `color` defaults to
/// light blue.
#[allow(clippy::too_many_arguments)]
pub fn draw_bar<'a>(
    ax: &'a mut Axes,
    x: &[f64],
    y: &[f64],
    error: &[f64],
    xlims: (f64, f64),
    ylims: (f64, f64),
    error_style: ErrorBarStyle,
    color: Option<RGBColor>,
    width: Option<f64>,
) -> &'a mut Axes {
    let yerr_lower = Array1::zeros(error.len());
    let yerr_upper = Array1::from(error.to_vec());

    ax.add_artist(Artist::Bar(Bars {
        x: x.to_vec().into(),
        heights: y.to_vec().into(),
        width: width.unwrap_or(BAR_WIDTH),
        color: color.unwrap_or(COLOR_BAR_DEFAULT),
        yerr_lower,
        yerr_upper,
        error_style,
    }));

    ax.set_xlim(xlims);
    ax.set_ylim(ylims);

    ax
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_style_passes_through() {
        let style = ErrorBarStyle {
            ecolor: RGBColor(10, 20, 30),
            elinewidth: 2.0,
            capsize: 3.0,
            capthick: 0.5,
        };
        let mut ax = Axes::new();
        draw_bar(
            &mut ax,
            &[1.0, 2.0],
            &[3.0, 4.0],
            &[0.5, 0.5],
            (0.0, 3.0),
            (0.0, 5.0),
            style,
            Some(RGBColor(1, 2, 3)),
            Some(0.5),
        );
        match &ax.artists()[0] {
            Artist::Bar(bars) => {
                assert_eq!(bars.error_style, style);
                assert_eq!(bars.width, 0.5);
                assert_eq!(bars.color, RGBColor(1, 2, 3));
            }
            other => panic!("expected bar artist, got {}", other.kind()),
        }
    }

    #[test]
    fn test_defaults() {
        let mut ax = Axes::new();
        draw_bar(
            &mut ax,
            &[1.0],
            &[1.0],
            &[0.1],
            (0.0, 2.0),
            (0.0, 2.0),
            ErrorBarStyle::default(),
            None,
            None,
        );
        match &ax.artists()[0] {
            Artist::Bar(bars) => {
                assert_eq!(bars.width, 0.75);
                assert_eq!(bars.color, RGBColor(173, 216, 230));
            }
            other => panic!("expected bar artist, got {}", other.kind()),
        }
    }
}
