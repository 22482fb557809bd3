// src/plot_framework.rs

// Figure container and the renderer that turns an `Axes` into plotters
// elements. Each subplot cell gets a cartesian chart spanning the axes box;
// artists are clipped to the axis limits and drawn as chart series. Spines,
// tick marks and text are drawn on the cell around the chart's plotting area.

use std::path::Path;

use log::{debug, info, warn};
use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, EmptyElement, PathElement, Rectangle, Text};
use plotters::series::{DashedLineSeries, LineSeries, PointSeries};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontDesc, FontFamily, FontStyle, FontTransform, RGBColor, TextStyle};

use crate::artists::{
    Artist, Bars, BoxElementStyle, BoxPlot, ErrorBarLine, ErrorBarStyle, LineStyle, Marker,
    ScatterPoints,
};
use crate::axes::{Axes, TickDirection, TickParams};
use crate::constants::{
    AXIS_LABEL_PAD_PT, DASH_ON_OFF, DEFAULT_DPI, MAX_AUTO_TICKS, MIN_TEXT_SIZE_PT, SUBPLOT_BOTTOM,
    SUBPLOT_LEFT, SUBPLOT_RIGHT, SUBPLOT_TOP, TICK_PAD_PT, TITLE_PAD_PT,
};
use crate::error::{drawing, PlotError, Result};
use crate::font_config::{global_style, GlobalStyle, MathTextMode};
use crate::mathtext::render_mathtext;
use crate::ticks::{auto_ticks, format_ticks};
use crate::units::{points_to_pixels, FigureSize};

// Approximate glyph width relative to font size, used when the backend cannot
// measure text.
const CHAR_WIDTH_RATIO: f64 = 0.6;

type AxesChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// A grid of axes with a physical size.
#[derive(Debug, Clone)]
pub struct Figure {
    size: FigureSize,
    dpi: f64,
    rows: usize,
    cols: usize,
    axes: Vec<Axes>,
}

impl Figure {
    /// Figure with a single axes.
    pub fn new(size: FigureSize) -> Self {
        Self::subplots(size, 1, 1)
    }

    /// Figure with a `rows` x `cols` grid of axes (at least 1 x 1).
    pub fn subplots(size: FigureSize, rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            size,
            dpi: DEFAULT_DPI,
            rows,
            cols,
            axes: (0..rows * cols).map(|_| Axes::new()).collect(),
        }
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn size(&self) -> FigureSize {
        self.size
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.size.to_pixels(self.dpi)
    }

    pub fn axes(&self, row: usize, col: usize) -> Option<&Axes> {
        if row < self.rows && col < self.cols {
            self.axes.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn axes_mut(&mut self, row: usize, col: usize) -> Option<&mut Axes> {
        if row < self.rows && col < self.cols {
            self.axes.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Renders every subplot onto `root`, which is cleared to white first.
    pub fn render_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(drawing)?;
        let cells = root.split_evenly((self.rows, self.cols));
        for (index, (cell, axes)) in cells.iter().zip(&self.axes).enumerate() {
            debug!(
                "Rendering subplot {} of {} ({} artists)",
                index + 1,
                self.axes.len(),
                axes.artists().len()
            );
            render_axes(cell, axes, self.dpi)?;
        }
        Ok(())
    }

    /// Saves the figure; the format follows the extension (`.png` or `.svg`).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "png" => self.save_png(path),
            "svg" => self.save_svg(path),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let root = BitMapBackend::new(path, self.pixel_size()).into_drawing_area();
        self.render_on(&root)?;
        root.present().map_err(drawing)?;
        info!("Figure saved as '{}'.", path.display());
        Ok(())
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let root = SVGBackend::new(path, self.pixel_size()).into_drawing_area();
        self.render_on(&root)?;
        root.present().map_err(drawing)?;
        info!("Figure saved as '{}'.", path.display());
        Ok(())
    }
}


/// Inner axes box of one cell, in cell pixels. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlotBox {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl PlotBox {
    fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }

    fn center_y(&self) -> i32 {
        (self.top + self.bottom) / 2
    }
}

/// Axis limits as a clip region in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DataBox {
    x: (f64, f64),
    y: (f64, f64),
}

impl DataBox {
    /// Limits may be given in either order.
    pub(crate) fn new(xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        Self {
            x: sorted(xlim),
            y: sorted(ylim),
        }
    }

    pub(crate) fn contains_x(&self, v: f64) -> bool {
        within(v, self.x)
    }

    pub(crate) fn contains_y(&self, v: f64) -> bool {
        within(v, self.y)
    }

    pub(crate) fn contains(&self, p: (f64, f64)) -> bool {
        self.contains_x(p.0) && self.contains_y(p.1)
    }

    /// Liang-Barsky clipping of the segment `a`-`b`; `None` when nothing is inside.
    pub(crate) fn clip_segment(
        &self,
        a: (f64, f64),
        b: (f64, f64),
    ) -> Option<((f64, f64), (f64, f64))> {
        if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
            return None;
        }
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        let edges = [
            (-dx, a.0 - self.x.0),
            (dx, self.x.1 - a.0),
            (-dy, a.1 - self.y.0),
            (dy, self.y.1 - a.1),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        let at = |t: f64| (a.0 + t * dx, a.1 + t * dy);
        Some((at(t0), at(t1)))
    }

    /// Visible pieces of a polyline. Non-finite points and excursions outside
    /// the box break the line.
    pub(crate) fn clip_polyline(&self, points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
        let mut pieces = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for pair in points.windows(2) {
            match self.clip_segment(pair[0], pair[1]) {
                Some((start, end)) => {
                    if current.last() != Some(&start) {
                        flush_piece(&mut pieces, &mut current);
                        current.push(start);
                    }
                    current.push(end);
                }
                None => flush_piece(&mut pieces, &mut current),
            }
        }
        flush_piece(&mut pieces, &mut current);
        pieces
    }

    /// Intersection of the rectangle spanned by `a` and `b` with the box.
    pub(crate) fn clip_rect(&self, a: (f64, f64), b: (f64, f64)) -> Option<[(f64, f64); 2]> {
        if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
            return None;
        }
        let x0 = a.0.min(b.0).max(self.x.0);
        let x1 = a.0.max(b.0).min(self.x.1);
        let y0 = a.1.min(b.1).max(self.y.0);
        let y1 = a.1.max(b.1).min(self.y.1);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some([(x0, y0), (x1, y1)])
    }
}

fn flush_piece(pieces: &mut Vec<Vec<(f64, f64)>>, current: &mut Vec<(f64, f64)>) {
    let piece = std::mem::take(current);
    if piece.len() >= 2 {
        pieces.push(piece);
    }
}

fn sorted(lim: (f64, f64)) -> (f64, f64) {
    if lim.0 <= lim.1 {
        lim
    } else {
        (lim.1, lim.0)
    }
}

fn within(v: f64, (lo, hi): (f64, f64)) -> bool {
    let eps = (hi - lo).abs() * 1e-9;
    v >= lo - eps && v <= hi + eps
}

/// Widens zero-width limits so the mapping stays finite; rejects non-finite limits.
/// Plotters maps every value of a single-value range to one pixel.
fn nonsingular(axis: &str, lim: (f64, f64)) -> Result<(f64, f64)> {
    if !lim.0.is_finite() || !lim.1.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "{axis} limits must be finite, got ({}, {})",
            lim.0, lim.1
        )));
    }
    if lim.0 == lim.1 {
        let pad = if lim.0 == 0.0 { 0.5 } else { lim.0.abs() * 0.05 };
        warn!(
            "Identical {axis} limits ({}); expanding by {pad} on each side",
            lim.0
        );
        return Ok((lim.0 - pad, lim.1 + pad));
    }
    Ok(lim)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn stroke_px(points: f64, dpi: f64) -> u32 {
    points_to_pixels(points, dpi).round().max(1.0) as u32
}

fn check_lengths(kind: &str, lengths: &[(&str, usize)]) -> Result<()> {
    if let Some((first_name, first_len)) = lengths.first() {
        for (name, len) in &lengths[1..] {
            if len != first_len {
                return Err(PlotError::InvalidData(format!(
                    "{kind}: '{first_name}' has {first_len} values but '{name}' has {len}"
                )));
            }
        }
    }
    Ok(())
}

/// Cartesian chart over the axes box of `area`, inset by the subplot margins.
fn build_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    xlim: (f64, f64),
    ylim: (f64, f64),
) -> Result<AxesChart<'a, DB>> {
    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as f64, h as f64);
    ChartBuilder::on(area)
        .margin_top(px(h * (1.0 - SUBPLOT_TOP)))
        .margin_bottom(px(h * SUBPLOT_BOTTOM))
        .margin_left(px(w * SUBPLOT_LEFT))
        .margin_right(px(w * (1.0 - SUBPLOT_RIGHT)))
        .build_cartesian_2d(xlim.0..xlim.1, ylim.0..ylim.1)
        .map_err(drawing)
}

/// Maps a data point to pixels relative to the cell origin.
fn cell_coord<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &AxesChart<'_, DB>,
    point: (f64, f64),
) -> (i32, i32) {
    let (base_x, base_y) = area.get_base_pixel();
    let (x, y) = chart.backend_coord(&point);
    (x - base_x, y - base_y)
}

fn plot_box<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &AxesChart<'_, DB>,
    xlim: (f64, f64),
    ylim: (f64, f64),
) -> PlotBox {
    let (left, bottom) = cell_coord(area, chart, (xlim.0, ylim.0));
    let (right, top) = cell_coord(area, chart, (xlim.1, ylim.1));
    PlotBox {
        left,
        top,
        right,
        bottom,
    }
}

/// Renders one axes (artists, frame, ticks and text) into `area`.
pub fn render_axes<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    axes: &Axes,
    dpi: f64,
) -> Result<()> {
    let xlim = nonsingular("x", axes.xlim())?;
    let ylim = nonsingular("y", axes.ylim())?;
    let mut chart = build_chart(area, xlim, ylim)?;
    let clip = DataBox::new(xlim, ylim);

    for artist in axes.artists() {
        match artist {
            Artist::ErrorBar(line) => draw_error_bar_line(&mut chart, &clip, line, dpi)?,
            Artist::Scatter(points) => draw_scatter_points(&mut chart, &clip, points, dpi)?,
            Artist::Bar(bars) => draw_bars(&mut chart, &clip, bars, dpi)?,
            Artist::Box(boxes) => draw_box_plot(&mut chart, &clip, boxes, dpi)?,
        }
    }

    let frame = plot_box(area, &chart, xlim, ylim);
    draw_spines(area, &frame, axes, dpi)?;

    let x_ticks = tick_positions(axes.xticks(), xlim, axes.xticklabels(), "x")
        .into_iter()
        .filter(|(v, _)| clip.contains_x(*v))
        .map(|(v, label)| (cell_coord(area, &chart, (v, ylim.0)).0, label))
        .collect::<Vec<_>>();
    let y_ticks = tick_positions(axes.yticks(), ylim, axes.yticklabels(), "y")
        .into_iter()
        .filter(|(v, _)| clip.contains_y(*v))
        .map(|(v, label)| (cell_coord(area, &chart, (xlim.0, v)).1, label))
        .collect::<Vec<_>>();

    draw_x_tick_marks(area, &frame, &x_ticks, axes.x_tick_params(), dpi)?;
    draw_y_tick_marks(area, &frame, &y_ticks, axes.y_tick_params(), dpi)?;

    let has_text = !axes.title().is_empty()
        || !axes.xlabel().is_empty()
        || !axes.ylabel().is_empty()
        || (axes.x_tick_params().labels && !x_ticks.is_empty())
        || (axes.y_tick_params().labels && !y_ticks.is_empty());
    if has_text {
        let text = TextRenderer::new(area, &global_style(), dpi);
        draw_axes_text(area, &frame, axes, &x_ticks, &y_ticks, &text)?;
    }
    Ok(())
}

/// Tick positions paired with their labels.
fn tick_positions(
    explicit: Option<&[f64]>,
    lim: (f64, f64),
    labels: Option<&[String]>,
    axis: &str,
) -> Vec<(f64, String)> {
    let ticks = match explicit {
        Some(ticks) => ticks.to_vec(),
        None => auto_ticks(lim.0, lim.1, MAX_AUTO_TICKS),
    };
    let labels = match labels {
        Some(labels) => {
            if labels.len() != ticks.len() {
                warn!(
                    "{axis} axis has {} ticks but {} tick labels",
                    ticks.len(),
                    labels.len()
                );
            }
            (0..ticks.len())
                .map(|i| labels.get(i).cloned().unwrap_or_default())
                .collect()
        }
        None => format_ticks(&ticks),
    };
    ticks.into_iter().zip(labels).collect()
}

/// Vertical error bars with optional caps. Plotters' `ErrorBar` element also
/// marks the centre value, so stems and caps are composed here.
fn draw_error_bars<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    rows: impl Iterator<Item = (f64, f64, f64, f64)>,
    style: &ErrorBarStyle,
    dpi: f64,
) -> Result<()> {
    let stem_style = style.ecolor.stroke_width(stroke_px(style.elinewidth, dpi));
    let cap_style = style.ecolor.stroke_width(stroke_px(style.capthick, dpi));
    let cap_half = px(points_to_pixels(style.capsize, dpi));

    let mut stems = Vec::new();
    let mut caps = Vec::new();
    for (x, y, lower, upper) in rows {
        if !clip.contains_x(x) {
            continue;
        }
        let (low, high) = ((x, y - lower), (x, y + upper));
        if let Some((start, end)) = clip.clip_segment(low, high).filter(|(a, b)| a != b) {
            stems.push(PathElement::new(vec![start, end], stem_style));
        }
        if cap_half > 0 {
            caps.extend([low, high].into_iter().filter(|&p| clip.contains(p)));
        }
    }

    chart.draw_series(stems).map_err(drawing)?;
    chart
        .draw_series(caps.into_iter().map(|p| {
            EmptyElement::at(p) + PathElement::new(vec![(-cap_half, 0), (cap_half, 0)], cap_style)
        }))
        .map_err(drawing)?;
    Ok(())
}

/// Strokes a polyline clipped to the axes, solid or dashed. Dash lengths
/// scale with the line width.
fn draw_styled_path<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    points: &[(f64, f64)],
    color: RGBColor,
    width_pt: f64,
    line_style: LineStyle,
    dpi: f64,
) -> Result<()> {
    let style = color.stroke_width(stroke_px(width_pt, dpi));
    let lw = points_to_pixels(width_pt, dpi);
    let on = (DASH_ON_OFF.0 * lw).round().max(1.0) as u32;
    let off = (DASH_ON_OFF.1 * lw).round().max(1.0) as u32;
    for piece in clip.clip_polyline(points) {
        match line_style {
            LineStyle::Solid => {
                chart
                    .draw_series(LineSeries::new(piece, style))
                    .map_err(drawing)?;
            }
            LineStyle::Dashed => {
                chart
                    .draw_series(DashedLineSeries::new(piece, on, off, style))
                    .map_err(drawing)?;
            }
        }
    }
    Ok(())
}

/// Same-size markers at `points`; points outside the axes are skipped.
fn draw_markers<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    points: impl Iterator<Item = (f64, f64)>,
    marker: Marker,
    diameter: f64,
    color: RGBColor,
    dpi: f64,
) -> Result<()> {
    let radius = (diameter / 2.0).round().max(0.0) as u32;
    let inside = points.filter(|&p| clip.contains(p));
    match marker {
        Marker::None => {}
        Marker::Circle => {
            chart
                .draw_series(PointSeries::<_, _, Circle<_, _>, _>::new(
                    inside,
                    radius,
                    color.filled(),
                ))
                .map_err(drawing)?;
        }
        Marker::Cross => {
            chart
                .draw_series(PointSeries::<_, _, Cross<_, _>, _>::new(
                    inside,
                    radius,
                    color.stroke_width(stroke_px(1.0, dpi)),
                ))
                .map_err(drawing)?;
        }
    }
    Ok(())
}

fn draw_error_bar_line<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    line: &ErrorBarLine,
    dpi: f64,
) -> Result<()> {
    check_lengths(
        "errorbar",
        &[
            ("x", line.x.len()),
            ("y", line.y.len()),
            ("error", line.yerr_upper.len()),
            ("lower error", line.yerr_lower.len()),
        ],
    )?;

    let rows = (0..line.x.len()).map(|i| (line.x[i], line.y[i], line.yerr_lower[i], line.yerr_upper[i]));
    draw_error_bars(chart, clip, rows, &line.error_style, dpi)?;

    let points: Vec<(f64, f64)> = line.x.iter().copied().zip(line.y.iter().copied()).collect();
    draw_styled_path(chart, clip, &points, line.color, line.line_width, line.line_style, dpi)?;
    draw_markers(
        chart,
        clip,
        points.into_iter(),
        line.marker,
        points_to_pixels(line.marker_size, dpi),
        line.color,
        dpi,
    )
}

fn draw_scatter_points<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    points: &ScatterPoints,
    dpi: f64,
) -> Result<()> {
    check_lengths(
        "scatter",
        &[
            ("x", points.x.len()),
            ("y", points.y.len()),
            ("error", points.sizes.len()),
        ],
    )?;
    // Marker size is an area in points²; the diameter is its square root.
    let markers: Vec<((f64, f64), u32)> = (0..points.x.len())
        .map(|i| ((points.x[i], points.y[i]), points.sizes[i]))
        .filter(|&(p, _)| clip.contains(p))
        .map(|(p, size)| {
            let diameter = points_to_pixels(size.max(0.0).sqrt(), dpi);
            (p, (diameter / 2.0).round() as u32)
        })
        .collect();

    let color = points.color.mix(points.alpha);
    match points.marker {
        Marker::None => {}
        Marker::Circle => {
            chart
                .draw_series(markers.iter().map(|&(p, r)| Circle::new(p, r, color.filled())))
                .map_err(drawing)?;
        }
        Marker::Cross => {
            let style = color.stroke_width(stroke_px(1.0, dpi));
            chart
                .draw_series(markers.iter().map(|&(p, r)| Cross::new(p, r, style)))
                .map_err(drawing)?;
        }
    }
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    bars: &Bars,
    dpi: f64,
) -> Result<()> {
    check_lengths(
        "bar",
        &[
            ("x", bars.x.len()),
            ("y", bars.heights.len()),
            ("error", bars.yerr_upper.len()),
        ],
    )?;
    let half = bars.width / 2.0;
    let fill = bars.color.filled();
    let rects: Vec<_> = bars
        .x
        .iter()
        .zip(bars.heights.iter())
        .filter_map(|(&x, &height)| clip.clip_rect((x - half, 0.0), (x + half, height)))
        .map(|corners| Rectangle::new(corners, fill))
        .collect();
    chart.draw_series(rects).map_err(drawing)?;

    let rows = (0..bars.x.len()).map(|i| {
        (
            bars.x[i],
            bars.heights[i],
            bars.yerr_lower[i],
            bars.yerr_upper[i],
        )
    });
    draw_error_bars(chart, clip, rows, &bars.error_style, dpi)
}

fn draw_box_plot<DB: DrawingBackend>(
    chart: &mut AxesChart<'_, DB>,
    clip: &DataBox,
    boxes: &BoxPlot,
    dpi: f64,
) -> Result<()> {
    check_lengths(
        "boxplot",
        &[("x", boxes.positions.len()), ("y", boxes.samples.len())],
    )?;
    let half = boxes.width / 2.0;
    let cap_half = boxes.cap_width() / 2.0;

    for (index, (&pos, stats)) in boxes.positions.iter().zip(boxes.stats()).enumerate() {
        let stats = stats.ok_or_else(|| {
            PlotError::InvalidData(format!("boxplot: sample set {index} has no finite values"))
        })?;
        let mut stroke = |points: &[(f64, f64)], style: &BoxElementStyle| {
            draw_styled_path(chart, clip, points, style.color, style.line_width, style.line_style, dpi)
        };

        // Whiskers and caps first so the box outline sits on top.
        stroke(&[(pos, stats.q1), (pos, stats.whisker_low)], &boxes.whisker_style)?;
        stroke(&[(pos, stats.q3), (pos, stats.whisker_high)], &boxes.whisker_style)?;
        for cap_y in [stats.whisker_low, stats.whisker_high] {
            stroke(&[(pos - cap_half, cap_y), (pos + cap_half, cap_y)], &boxes.cap_style)?;
        }
        let outline = [
            (pos - half, stats.q1),
            (pos + half, stats.q1),
            (pos + half, stats.q3),
            (pos - half, stats.q3),
            (pos - half, stats.q1),
        ];
        stroke(&outline, &boxes.box_style)?;
        stroke(&[(pos - half, stats.median), (pos + half, stats.median)], &boxes.median_style)?;

        draw_markers(
            chart,
            clip,
            stats.fliers.iter().map(|&flier| (pos, flier)),
            boxes.flier_marker,
            points_to_pixels(boxes.flier_size, dpi),
            boxes.flier_color,
            dpi,
        )?;
    }
    Ok(())
}

/// Frame edges, each drawn only when its spine is visible.
fn draw_spines<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &PlotBox,
    axes: &Axes,
    dpi: f64,
) -> Result<()> {
    let spines = axes.spines();
    let style = BLACK.stroke_width(stroke_px(spines.width, dpi));
    let (l, r, t, b) = (frame.left, frame.right, frame.top, frame.bottom);
    let edges = [
        (spines.top, [(l, t), (r, t)]),
        (spines.right, [(r, t), (r, b)]),
        (spines.bottom, [(l, b), (r, b)]),
        (spines.left, [(l, t), (l, b)]),
    ];
    for (visible, [start, end]) in edges {
        if visible {
            area.draw(&PathElement::new(vec![start, end], style))
                .map_err(drawing)?;
        }
    }
    Ok(())
}

/// Start and end offset of a tick relative to its spine, measured outward.
fn tick_extent(params: &TickParams, dpi: f64) -> (i32, i32) {
    let length = points_to_pixels(params.length, dpi);
    let (inner, outer) = match params.direction {
        TickDirection::Out => (0.0, length),
        TickDirection::In => (-length, 0.0),
        TickDirection::InOut => (-length / 2.0, length / 2.0),
    };
    (px(inner), px(outer))
}

fn draw_x_tick_marks<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &PlotBox,
    ticks: &[(i32, String)],
    params: &TickParams,
    dpi: f64,
) -> Result<()> {
    let style = BLACK.stroke_width(stroke_px(params.width, dpi));
    let (inner, outer) = tick_extent(params, dpi);
    for &(x, _) in ticks {
        if params.primary {
            let edge = frame.bottom;
            area.draw(&PathElement::new(vec![(x, edge + inner), (x, edge + outer)], style))
                .map_err(drawing)?;
        }
        if params.secondary {
            let edge = frame.top;
            area.draw(&PathElement::new(vec![(x, edge - inner), (x, edge - outer)], style))
                .map_err(drawing)?;
        }
    }
    Ok(())
}

fn draw_y_tick_marks<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &PlotBox,
    ticks: &[(i32, String)],
    params: &TickParams,
    dpi: f64,
) -> Result<()> {
    let style = BLACK.stroke_width(stroke_px(params.width, dpi));
    let (inner, outer) = tick_extent(params, dpi);
    for &(y, _) in ticks {
        if params.primary {
            let edge = frame.left;
            area.draw(&PathElement::new(vec![(edge - inner, y), (edge - outer, y)], style))
                .map_err(drawing)?;
        }
        if params.secondary {
            let edge = frame.right;
            area.draw(&PathElement::new(vec![(edge + inner, y), (edge + outer, y)], style))
                .map_err(drawing)?;
        }
    }
    Ok(())
}

/// Width of `text` in pixels when the backend cannot measure it.
fn estimated_width(text: &str, size_pt: f64, dpi: f64) -> f64 {
    let size_px = points_to_pixels(size_pt.max(MIN_TEXT_SIZE_PT), dpi);
    text.chars().count() as f64 * size_px * CHAR_WIDTH_RATIO
}

/// Font selection and sizing for one render pass.
struct TextRenderer {
    family: String,
    font_size: f64,
    title_size: f64,
    mathtext: MathTextMode,
    dpi: f64,
}

impl TextRenderer {
    /// Picks the first configured face the backend can load, falling back to
    /// the generic family.
    fn new<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, style: &GlobalStyle, dpi: f64) -> Self {
        let size_px = points_to_pixels(style.font_size, dpi);
        let family = style
            .font_faces
            .iter()
            .find(|face| {
                let candidate = TextStyle::from(FontDesc::new(
                    FontFamily::from(face.as_str()),
                    size_px,
                    FontStyle::Normal,
                ));
                area.estimate_text_size("0", &candidate).is_ok()
            })
            .cloned()
            .unwrap_or_else(|| {
                debug!(
                    "None of {:?} is available, using '{}'",
                    style.font_faces, style.font_family
                );
                style.font_family.clone()
            });
        Self {
            family,
            font_size: style.font_size,
            title_size: style.title_font_size(),
            mathtext: style.mathtext,
            dpi,
        }
    }

    /// Sizes below the minimum legible size are raised to it.
    fn font(&self, size_pt: f64, rotated: bool) -> FontDesc<'_> {
        let font = FontDesc::new(
            FontFamily::from(self.family.as_str()),
            points_to_pixels(size_pt.max(MIN_TEXT_SIZE_PT), self.dpi),
            FontStyle::Normal,
        );
        if rotated {
            font.transform(FontTransform::Rotate270)
        } else {
            font
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        text: &str,
        pos: (i32, i32),
        size_pt: f64,
        anchor: Pos,
        rotated: bool,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let style = self.font(size_pt, rotated).color(&BLACK).pos(anchor);
        area.draw(&Text::new(render_mathtext(text, self.mathtext), pos, style))
            .map_err(drawing)
    }

    /// Rendered width of `text` in pixels.
    fn width<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>, text: &str, size_pt: f64) -> f64 {
        let rendered = render_mathtext(text, self.mathtext);
        let style = TextStyle::from(self.font(size_pt, false));
        match area.estimate_text_size(&rendered, &style) {
            Ok((w, _)) => w as f64,
            Err(_) => estimated_width(&rendered, size_pt, self.dpi),
        }
    }
}

fn draw_axes_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &PlotBox,
    axes: &Axes,
    x_ticks: &[(i32, String)],
    y_ticks: &[(i32, String)],
    text: &TextRenderer,
) -> Result<()> {
    let dpi = text.dpi;
    let size = text.font_size;
    let size_px = points_to_pixels(size, dpi);
    let pad = points_to_pixels(TICK_PAD_PT, dpi);
    let label_pad = points_to_pixels(AXIS_LABEL_PAD_PT, dpi);

    // X tick labels hang below the bottom spine.
    let x_params = axes.x_tick_params();
    let x_out = if x_params.primary { tick_extent(x_params, dpi).1.max(0) } else { 0 };
    let x_label_top = (frame.bottom + x_out) as f64 + pad;
    let mut below_axis = x_label_top;
    if x_params.labels && !x_ticks.is_empty() {
        for (x, label) in x_ticks {
            text.draw(
                area,
                label,
                (*x, px(x_label_top)),
                size,
                Pos::new(HPos::Center, VPos::Top),
                false,
            )?;
        }
        below_axis += size_px;
    }

    // Y tick labels sit left of the left spine, right-aligned.
    let y_params = axes.y_tick_params();
    let y_out = if y_params.primary { tick_extent(y_params, dpi).1.max(0) } else { 0 };
    let y_label_right = (frame.left - y_out) as f64 - pad;
    let mut widest = 0.0f64;
    if y_params.labels && !y_ticks.is_empty() {
        for (y, label) in y_ticks {
            text.draw(
                area,
                label,
                (px(y_label_right), *y),
                size,
                Pos::new(HPos::Right, VPos::Center),
                false,
            )?;
            widest = widest.max(text.width(area, label, size));
        }
    }

    text.draw(
        area,
        axes.xlabel(),
        (frame.center_x(), px(below_axis + label_pad)),
        size,
        Pos::new(HPos::Center, VPos::Top),
        false,
    )?;
    text.draw(
        area,
        axes.ylabel(),
        (px(y_label_right - widest - label_pad - size_px), frame.center_y()),
        size,
        Pos::new(HPos::Center, VPos::Top),
        true,
    )?;
    text.draw(
        area,
        axes.title(),
        (frame.center_x(), frame.top - px(points_to_pixels(TITLE_PAD_PT, dpi))),
        text.title_size,
        Pos::new(HPos::Center, VPos::Bottom),
        false,
    )
}
