// src/error.rs

use thiserror::Error;

/// Errors raised while rendering or saving a figure.
///
/// Drawing onto an `Axes` never fails; malformed input only surfaces once the
/// recorded artists are turned into plotters elements.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported output format: '{0}' (expected .png or .svg)")]
    UnsupportedFormat(String),

    #[error("Unknown color: '{0}'")]
    UnknownColor(String),

    #[error("Invalid style file: {0}")]
    Style(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, PlotError>;

/// Wraps any plotters drawing error into [`PlotError::Drawing`].
pub(crate) fn drawing<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}
