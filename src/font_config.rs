// src/font_config.rs

// Process-wide font and text configuration.
// Every text element rendered by the crate (titles, axis labels, tick labels)
// reads its family and size from here, so a script configures the look once
// before drawing anything.

use std::sync::{OnceLock, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FONT_FACE, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PT};

/// Named font sizes relative to the base font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelativeFontSize {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl RelativeFontSize {
    pub fn scale(self) -> f64 {
        match self {
            RelativeFontSize::XxSmall => 0.579,
            RelativeFontSize::XSmall => 0.694,
            RelativeFontSize::Small => 0.833,
            RelativeFontSize::Medium => 1.0,
            RelativeFontSize::Large => 1.2,
            RelativeFontSize::XLarge => 1.44,
            RelativeFontSize::XxLarge => 1.728,
        }
    }
}

/// How `$...$` segments in labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathTextMode {
    /// Math segments use the regular (upright) text font.
    Regular,
    /// Math segments are rendered in italics, the usual typesetting convention.
    Italic,
}

/// Global text style shared by every figure in the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStyle {
    /// Generic family used when none of `font_faces` is available.
    pub font_family: String,
    /// Preferred faces, tried in order.
    pub font_faces: Vec<String>,
    /// Base font size in points.
    pub font_size: f64,
    pub mathtext: MathTextMode,
    pub title_size: RelativeFontSize,
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_faces: vec![DEFAULT_FONT_FACE.to_string()],
            font_size: DEFAULT_FONT_SIZE_PT,
            mathtext: MathTextMode::Regular,
            title_size: RelativeFontSize::Medium,
        }
    }
}

impl GlobalStyle {
    /// Title font size in points.
    pub fn title_font_size(&self) -> f64 {
        self.font_size * self.title_size.scale()
    }

    /// Family name handed to the text renderer: the first preferred face, or
    /// the generic family if no face is listed.
    pub fn font_name(&self) -> &str {
        self.font_faces
            .first()
            .map(String::as_str)
            .unwrap_or(self.font_family.as_str())
    }
}

static GLOBAL_STYLE: OnceLock<RwLock<GlobalStyle>> = OnceLock::new();

fn style_cell() -> &'static RwLock<GlobalStyle> {
    GLOBAL_STYLE.get_or_init(|| RwLock::new(GlobalStyle::default()))
}

/// Installs the default publication style: Arial (sans-serif) at 10 pt,
/// regular math text, medium titles.
///
/// Call once before drawing. Any later configuration call overwrites this one.
pub fn configure_global_style() {
    configure_global_style_with(GlobalStyle::default());
}

/// Installs `style` as the process-wide text style, replacing the previous one.
pub fn configure_global_style_with(style: GlobalStyle) {
    debug!(
        "Global style: {} ({}) {} pt, title {:?}, mathtext {:?}",
        style.font_name(),
        style.font_family,
        style.font_size,
        style.title_size,
        style.mathtext
    );
    // A poisoned lock only means another thread panicked mid-write; the value is
    // replaced wholesale either way.
    let mut guard = match style_cell().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = style;
}

/// Snapshot of the current global style.
pub fn global_style() -> GlobalStyle {
    match style_cell().read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = GlobalStyle::default();
        assert_eq!(style.font_family, "sans-serif");
        assert_eq!(style.font_name(), "Arial");
        assert_eq!(style.font_size, 10.0);
        assert_eq!(style.mathtext, MathTextMode::Regular);
        assert_eq!(style.title_font_size(), 10.0);
    }

    #[test]
    fn test_font_name_falls_back_to_family() {
        let style = GlobalStyle {
            font_faces: Vec::new(),
            ..GlobalStyle::default()
        };
        assert_eq!(style.font_name(), "sans-serif");
    }

    #[test]
    fn test_relative_sizes() {
        let style = GlobalStyle {
            title_size: RelativeFontSize::Large,
            font_size: 10.0,
            ..GlobalStyle::default()
        };
        assert!((style.title_font_size() - 12.0).abs() < 1e-12);
        assert!(RelativeFontSize::XxSmall.scale() < RelativeFontSize::Small.scale());
    }

    #[test]
    fn test_style_deserializes_with_defaults() {
        let style: GlobalStyle =
            serde_json::from_str(r#"{"font_size": 8, "title_size": "x-large"}"#).unwrap();
        assert_eq!(style.font_size, 8.0);
        assert_eq!(style.title_size, RelativeFontSize::XLarge);
        assert_eq!(style.font_name(), "Arial");
    }
}
