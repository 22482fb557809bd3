// src/constants.rs

use plotters::style::RGBColor;

use crate::units::cm_to_inch;

// Unit conversion.
pub const CM_PER_INCH: f64 = 2.54;
pub const POINTS_PER_INCH: f64 = 72.0;

// (sqrt(5) + 1) / 2, inlined so it can be used in const context.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

// --- PNAS figure sizes (inches) ---
pub const ONE_COLUMN_WIDTH: f64 = cm_to_inch(8.7); // 3.42
pub const ONE_AND_HALF_COLUMN_WIDTH: f64 = cm_to_inch(11.4); // 4.5
pub const TWO_COLUMN_WIDTH: f64 = cm_to_inch(17.8); // 7
pub const MAX_HEIGHT: f64 = cm_to_inch(22.5);
// Text size minimum 6-8 points.
pub const MIN_TEXT_SIZE_PT: f64 = 6.0;

// --- Figure defaults ---
pub const DEFAULT_DPI: f64 = 100.0;
pub const DEFAULT_AXES_LIMITS: (f64, f64) = (0.0, 1.0);

// Subplot margins as fractions of each grid cell.
pub const SUBPLOT_LEFT: f64 = 0.125;
pub const SUBPLOT_RIGHT: f64 = 0.9;
pub const SUBPLOT_BOTTOM: f64 = 0.11;
pub const SUBPLOT_TOP: f64 = 0.88;

// --- Global font defaults ---
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_FONT_FACE: &str = "Arial";
pub const DEFAULT_FONT_SIZE_PT: f64 = 10.0;

// --- Line plot styling ---
pub const COLOR_LINE_DEFAULT: RGBColor = RGBColor(255, 0, 0);
pub const COLOR_ERRORBAR: RGBColor = RGBColor(0, 0, 0);
pub const LINE_WIDTH_PT: f64 = 1.5;
pub const MARKER_SIZE_PT: f64 = 6.0;
pub const ERRORBAR_CAPSIZE_PT: f64 = 5.0;
pub const ERRORBAR_CAPTHICK_PT: f64 = 1.0;
// Dash and gap length of the "--" line style, in multiples of the line width.
pub const DASH_ON_OFF: (f64, f64) = (3.7, 1.6);

// --- Scatter plot styling ---
pub const COLOR_SCATTER_DEFAULT: RGBColor = RGBColor(0, 128, 0);
pub const SCATTER_MARKER_SCALE: f64 = 100.0;
pub const SCATTER_ALPHA: f64 = 0.5;

// --- Bar chart styling ---
pub const COLOR_BAR_DEFAULT: RGBColor = RGBColor(173, 216, 230);
pub const BAR_WIDTH: f64 = 0.75;

// --- Box plot styling ---
pub const COLOR_BOX_MEDIAN_DEFAULT: RGBColor = RGBColor(255, 0, 255);
pub const COLOR_BOX_STRUCTURE: RGBColor = RGBColor(0, 0, 0);
pub const BOX_MEDIAN_LINE_WIDTH_PT: f64 = 2.0;
pub const BOX_LINE_WIDTH_PT: f64 = 1.0;
pub const BOX_WHISKER_IQR_FACTOR: f64 = 1.5;
pub const BOX_WIDTH_FACTOR: f64 = 0.15;
pub const BOX_MAX_WIDTH: f64 = 0.5;
pub const BOX_FLIER_SIZE_PT: f64 = 6.0;

// --- Axis frame styling ---
pub const SPINE_WIDTH_PT: f64 = 0.8;
pub const TICK_WIDTH_PT: f64 = 0.8;
pub const TICK_LENGTH_PT: f64 = 3.5;
pub const TICK_PAD_PT: f64 = 3.5;
pub const STYLIZED_TICK_WIDTH_PT: f64 = 1.0;
pub const AXIS_LABEL_PAD_PT: f64 = 4.0;
pub const TITLE_PAD_PT: f64 = 6.0;
pub const MAX_AUTO_TICKS: usize = 9;

// src/constants.rs
