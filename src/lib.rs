// src/lib.rs - Library interface: figure styling helpers for publication plots

pub mod artists;
pub mod axes;
pub mod colors;
pub mod constants;
pub mod error;
pub mod font_config;
pub mod mathtext;
pub mod plot_framework;
pub mod plot_functions;
pub mod ticks;
pub mod units;

pub use axes::Axes;
pub use constants::{MAX_HEIGHT, ONE_AND_HALF_COLUMN_WIDTH, ONE_COLUMN_WIDTH, TWO_COLUMN_WIDTH};
pub use error::{PlotError, Result};
pub use font_config::{configure_global_style, configure_global_style_with, GlobalStyle};
pub use plot_framework::Figure;
pub use plot_functions::{draw_bar, draw_box, draw_line, draw_scatter, stylize_axes};
pub use units::{cm_to_inch, golden_ratio_height, FigureSize};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
