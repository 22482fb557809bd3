// tests/figure_helpers_test.rs

use figconfig::artists::{Artist, ErrorBarStyle, LineStyle, Marker};
use figconfig::axes::{Side, TickDirection};
use figconfig::constants::GOLDEN_RATIO;
use figconfig::{
    cm_to_inch, draw_bar, draw_box, draw_line, draw_scatter, golden_ratio_height, stylize_axes,
    Axes, MAX_HEIGHT, ONE_AND_HALF_COLUMN_WIDTH, ONE_COLUMN_WIDTH, TWO_COLUMN_WIDTH,
};
use plotters::style::RGBColor;

#[test]
fn test_golden_ratio_height_matches_formula() {
    for width in [0.1, 1.0, ONE_COLUMN_WIDTH, TWO_COLUMN_WIDTH, 42.0] {
        let height = golden_ratio_height(width);
        assert_eq!(height, width / ((0.5 * 5f64.sqrt()) + 0.5));
        assert!((width / height - GOLDEN_RATIO).abs() < 1e-12);
    }
}

#[test]
fn test_cm_to_inch_is_linear() {
    assert_eq!(cm_to_inch(0.0), 0.0);
    for value in [-3.0, 1.0, 2.54, 17.8, 100.0] {
        assert_eq!(cm_to_inch(value), value / 2.54);
        assert!((cm_to_inch(3.0 * value) - 3.0 * cm_to_inch(value)).abs() < 1e-12);
    }
}

#[test]
fn test_publication_widths() {
    assert!((ONE_COLUMN_WIDTH - 3.425).abs() < 1e-3);
    assert!((ONE_AND_HALF_COLUMN_WIDTH - 4.488).abs() < 1e-3);
    assert!((TWO_COLUMN_WIDTH - 7.008).abs() < 1e-3);
    assert!((MAX_HEIGHT - 8.858).abs() < 1e-3);
}

#[test]
fn test_bar_errors_are_upper_only() {
    let mut ax = Axes::new();
    draw_bar(
        &mut ax,
        &[1.0, 2.0, 3.0],
        &[-5.0, 0.0, 8.0],
        &[1.0, 2.0, 3.0],
        (0.0, 4.0),
        (-6.0, 12.0),
        ErrorBarStyle::default(),
        None,
        None,
    );
    match &ax.artists()[0] {
        Artist::Bar(bars) => {
            assert_eq!(bars.yerr_lower.to_vec(), vec![0.0, 0.0, 0.0]);
            assert_eq!(bars.yerr_upper.to_vec(), vec![1.0, 2.0, 3.0]);
            assert_eq!(bars.color, RGBColor(173, 216, 230));
        }
        other => panic!("expected bar artist, got {}", other.kind()),
    }
}

#[test]
fn test_draw_calls_set_exact_limits() {
    let xlims = (-0.5, 3.25);
    let ylims = (1e-3, 7.0);
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 3.0];

    let mut ax = Axes::new();
    draw_line(&mut ax, &x, &y, 0.2, xlims, ylims, None);
    assert_eq!((ax.xlim(), ax.ylim()), (xlims, ylims));

    let mut ax = Axes::new();
    draw_scatter(&mut ax, &x, &y, &[1.0, 2.0, 3.0], xlims, ylims, None, None);
    assert_eq!((ax.xlim(), ax.ylim()), (xlims, ylims));

    let mut ax = Axes::new();
    draw_bar(&mut ax, &x, &y, &[0.1, 0.1, 0.1], xlims, ylims, ErrorBarStyle::default(), None, None);
    assert_eq!((ax.xlim(), ax.ylim()), (xlims, ylims));

    let mut ax = Axes::new();
    draw_box(&mut ax, &x, &[vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]], &[], xlims, ylims, None);
    assert_eq!((ax.xlim(), ax.ylim()), (xlims, ylims));
}

#[test]
fn test_line_style_is_fixed() {
    let mut ax = Axes::new();
    draw_line(&mut ax, &[0.0, 1.0], &[0.0, 1.0], &[0.1, 0.2], (0.0, 1.0), (0.0, 1.0), Some(RGBColor(0, 0, 255)));
    match &ax.artists()[0] {
        Artist::ErrorBar(line) => {
            assert_eq!(line.line_style, LineStyle::Dashed);
            assert_eq!(line.marker, Marker::Circle);
            assert_eq!(line.color, RGBColor(0, 0, 255));
            assert_eq!(line.error_style.ecolor, RGBColor(0, 0, 0));
            assert_eq!(line.yerr_lower, line.yerr_upper);
        }
        other => panic!("expected errorbar artist, got {}", other.kind()),
    }
}

#[test]
fn test_stylize_with_empty_ticks_keeps_existing() {
    let mut ax = Axes::new();
    ax.set_xticks(&[0.1, 0.9]);
    ax.set_yticklabels(&["low", "high"]);
    stylize_axes(&mut ax, "T", "X", "Y", &[], &[], &[], &[]);
    assert_eq!(ax.xticks(), Some(&[0.1, 0.9][..]));
    assert!(ax.yticks().is_none());
    assert!(ax.xticklabels().is_none());
    assert_eq!(ax.yticklabels().map(|l| l.to_vec()), Some(vec!["low".to_string(), "high".to_string()]));
}

#[test]
fn test_stylize_with_ticks_replaces_them() {
    let mut ax = Axes::new();
    ax.set_xticks(&[0.5]);
    stylize_axes(
        &mut ax,
        "T",
        "X",
        "Y",
        &[1.0, 2.0],
        &[0.0, 5.0, 10.0],
        &["a", "b"],
        &["lo", "mid", "hi"],
    );
    assert_eq!(ax.xticks(), Some(&[1.0, 2.0][..]));
    assert_eq!(ax.yticks(), Some(&[0.0, 5.0, 10.0][..]));
    assert_eq!(ax.xticklabels().map(|l| l.join(",")), Some("a,b".to_string()));
    assert_eq!(ax.yticklabels().map(|l| l.join(",")), Some("lo,mid,hi".to_string()));
}

#[test]
fn test_stylize_hides_top_and_right() {
    let mut ax = Axes::new();
    stylize_axes(&mut ax, "Title $\\alpha$", "x label", "", &[], &[], &[], &[]);
    assert!(!ax.spines().is_visible(Side::Top));
    assert!(!ax.spines().is_visible(Side::Right));
    assert!(ax.spines().is_visible(Side::Bottom));
    assert!(ax.spines().is_visible(Side::Left));
    assert_eq!(ax.title(), "Title $\\alpha$");
    assert_eq!(ax.xlabel(), "x label");
    assert_eq!(ax.ylabel(), "");
    assert_eq!(ax.x_tick_params().direction, TickDirection::Out);
    assert!(!ax.y_tick_params().secondary);
}
