// src/plot_functions/draw_line.rs

use plotters::style::RGBColor;

use crate::artists::{Artist, ErrorBarLine, ErrorBarStyle, ErrorValues, LineStyle, Marker};
use crate::axes::Axes;
use crate::constants::{
    COLOR_ERRORBAR, COLOR_LINE_DEFAULT, ERRORBAR_CAPSIZE_PT, ERRORBAR_CAPTHICK_PT, LINE_WIDTH_PT,
    MARKER_SIZE_PT,
};

/// Dashed line with circular markers and symmetric black error bars.
///
/// `color` defaults to red and only affects the line and markers; error bars
/// are always black with 5 pt caps. Sets both axis limits and returns `ax`.
pub fn draw_line<'a, 'e>(
    ax: &'a mut Axes,
    x: &[f64],
    y: &[f64],
    error: impl Into<ErrorValues<'e>>,
    xlims: (f64, f64),
    ylims: (f64, f64),
    color: Option<RGBColor>,
) -> &'a mut Axes {
    let error = error.into().to_array(x.len());
    ax.add_artist(Artist::ErrorBar(ErrorBarLine {
        x: x.to_vec().into(),
        y: y.to_vec().into(),
        yerr_lower: error.clone(),
        yerr_upper: error,
        color: color.unwrap_or(COLOR_LINE_DEFAULT),
        line_style: LineStyle::Dashed,
        line_width: LINE_WIDTH_PT,
        marker: Marker::Circle,
        marker_size: MARKER_SIZE_PT,
        error_style: ErrorBarStyle {
            ecolor: COLOR_ERRORBAR,
            elinewidth: LINE_WIDTH_PT,
            capsize: ERRORBAR_CAPSIZE_PT,
            capthick: ERRORBAR_CAPTHICK_PT,
        },
    }));

    ax.set_xlim(xlims);
    ax.set_ylim(ylims);

    ax
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_black_error_bars() {
        let mut ax = Axes::new();
        draw_line(
            &mut ax,
            &[1.0, 2.0, 3.0],
            &[2.0, 4.0, 3.0],
            &[0.1, 0.2, 0.3],
            (0.0, 4.0),
            (0.0, 5.0),
            Some(RGBColor(0, 0, 255)),
        );

        match &ax.artists()[0] {
            Artist::ErrorBar(line) => {
                assert_eq!(line.yerr_lower, line.yerr_upper);
                assert_eq!(line.yerr_upper.to_vec(), vec![0.1, 0.2, 0.3]);
                assert_eq!(line.color, RGBColor(0, 0, 255));
                assert_eq!(line.error_style.ecolor, RGBColor(0, 0, 0));
                assert_eq!(line.error_style.capsize, 5.0);
                assert_eq!(line.error_style.capthick, 1.0);
                assert_eq!(line.line_style, LineStyle::Dashed);
                assert_eq!(line.marker, Marker::Circle);
            }
            other => panic!("expected errorbar artist, got {}", other.kind()),
        }
    }

    #[test]
    fn test_scalar_error_and_default_color() {
        let mut ax = Axes::new();
        draw_line(&mut ax, &[0.0, 1.0], &[0.0, 1.0], 0.5, (0.0, 1.0), (0.0, 1.0), None);
        match &ax.artists()[0] {
            Artist::ErrorBar(line) => {
                assert_eq!(line.yerr_upper.to_vec(), vec![0.5, 0.5]);
                assert_eq!(line.color, RGBColor(255, 0, 0));
            }
            other => panic!("expected errorbar artist, got {}", other.kind()),
        }
    }
}
