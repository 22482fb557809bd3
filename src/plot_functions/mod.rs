// src/plot_functions/mod.rs

pub mod draw_bar;
pub mod draw_box;
pub mod draw_line;
pub mod draw_scatter;
pub mod stylize_axes;

pub use draw_bar::draw_bar;
pub use draw_box::draw_box;
pub use draw_line::draw_line;
pub use draw_scatter::draw_scatter;
pub use stylize_axes::stylize_axes;

// src/plot_functions/mod.rs
