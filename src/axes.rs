// src/axes.rs

// The drawing surface the plot helpers operate on. An `Axes` only records what
// should be drawn (artists plus frame state); `plot_framework` renders it.

use log::debug;

use crate::artists::Artist;
use crate::constants::{DEFAULT_AXES_LIMITS, SPINE_WIDTH_PT, TICK_LENGTH_PT, TICK_WIDTH_PT};

/// One edge of the plot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Visibility of the four frame lines ("spines").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    /// Line width in points.
    pub width: f64,
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
            width: SPINE_WIDTH_PT,
        }
    }
}

impl Spines {
    pub fn set_visible(&mut self, side: Side, visible: bool) {
        match side {
            Side::Top => self.top = visible,
            Side::Right => self.right = visible,
            Side::Bottom => self.bottom = visible,
            Side::Left => self.left = visible,
        }
    }

    pub fn is_visible(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDirection {
    In,
    Out,
    InOut,
}

/// Tick mark settings for one axis.
///
/// For the x axis the primary side is the bottom and the secondary side the
/// top; for the y axis they are left and right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickParams {
    pub direction: TickDirection,
    /// Tick line width in points.
    pub width: f64,
    /// Tick length in points.
    pub length: f64,
    pub primary: bool,
    pub secondary: bool,
    /// Draw tick labels on the primary side.
    pub labels: bool,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            direction: TickDirection::Out,
            width: TICK_WIDTH_PT,
            length: TICK_LENGTH_PT,
            primary: true,
            secondary: false,
            labels: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Axes {
    xlim: (f64, f64),
    ylim: (f64, f64),
    spines: Spines,
    x_tick_params: TickParams,
    y_tick_params: TickParams,
    title: String,
    xlabel: String,
    ylabel: String,
    xticks: Option<Vec<f64>>,
    yticks: Option<Vec<f64>>,
    xticklabels: Option<Vec<String>>,
    yticklabels: Option<Vec<String>>,
    artists: Vec<Artist>,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            xlim: DEFAULT_AXES_LIMITS,
            ylim: DEFAULT_AXES_LIMITS,
            spines: Spines::default(),
            x_tick_params: TickParams::default(),
            y_tick_params: TickParams::default(),
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            xticks: None,
            yticks: None,
            xticklabels: None,
            yticklabels: None,
            artists: Vec::new(),
        }
    }
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all artists and restores the default frame.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn add_artist(&mut self, artist: Artist) {
        debug!("Axes: adding {} artist", artist.kind());
        self.artists.push(artist);
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    // --- Limits ---

    pub fn set_xlim(&mut self, xlim: (f64, f64)) {
        self.xlim = xlim;
    }

    pub fn set_ylim(&mut self, ylim: (f64, f64)) {
        self.ylim = ylim;
    }

    pub fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    pub fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    // --- Frame ---

    pub fn spines(&self) -> &Spines {
        &self.spines
    }

    pub fn spines_mut(&mut self) -> &mut Spines {
        &mut self.spines
    }

    pub fn x_tick_params(&self) -> &TickParams {
        &self.x_tick_params
    }

    pub fn x_tick_params_mut(&mut self) -> &mut TickParams {
        &mut self.x_tick_params
    }

    pub fn y_tick_params(&self) -> &TickParams {
        &self.y_tick_params
    }

    pub fn y_tick_params_mut(&mut self) -> &mut TickParams {
        &mut self.y_tick_params
    }

    // --- Text ---

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_xlabel(&mut self, label: &str) {
        self.xlabel = label.to_string();
    }

    pub fn set_ylabel(&mut self, label: &str) {
        self.ylabel = label.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    // --- Ticks ---

    pub fn set_xticks(&mut self, ticks: &[f64]) {
        self.xticks = Some(ticks.to_vec());
    }

    pub fn set_yticks(&mut self, ticks: &[f64]) {
        self.yticks = Some(ticks.to_vec());
    }

    pub fn set_xticklabels<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.xticklabels = Some(labels.iter().map(|s| s.as_ref().to_string()).collect());
    }

    pub fn set_yticklabels<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.yticklabels = Some(labels.iter().map(|s| s.as_ref().to_string()).collect());
    }

    /// Explicit x tick positions, or `None` when ticks are chosen automatically.
    pub fn xticks(&self) -> Option<&[f64]> {
        self.xticks.as_deref()
    }

    pub fn yticks(&self) -> Option<&[f64]> {
        self.yticks.as_deref()
    }

    pub fn xticklabels(&self) -> Option<&[String]> {
        self.xticklabels.as_deref()
    }

    pub fn yticklabels(&self) -> Option<&[String]> {
        self.yticklabels.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ax = Axes::new();
        assert_eq!(ax.xlim(), (0.0, 1.0));
        assert_eq!(ax.ylim(), (0.0, 1.0));
        assert!(ax.spines().top && ax.spines().right);
        assert!(ax.xticks().is_none());
        assert!(ax.artists().is_empty());
        assert_eq!(ax.x_tick_params().direction, TickDirection::Out);
    }

    #[test]
    fn test_spine_visibility() {
        let mut spines = Spines::default();
        spines.set_visible(Side::Right, false);
        assert!(!spines.is_visible(Side::Right));
        assert!(spines.is_visible(Side::Left));
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut ax = Axes::new();
        ax.set_title("t");
        ax.set_xticks(&[1.0]);
        ax.spines_mut().top = false;
        ax.clear();
        assert_eq!(ax.title(), "");
        assert!(ax.xticks().is_none());
        assert!(ax.spines().top);
    }
}
