// src/colors.rs

// Named colors accepted by the plotting helpers, so scripts can pass the same
// color names they would write in a style sheet.

use plotters::style::RGBColor;

use crate::error::{PlotError, Result};

const NAMED_COLORS: &[(&str, RGBColor)] = &[
    ("black", RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255)),
    ("red", RGBColor(255, 0, 0)),
    ("green", RGBColor(0, 128, 0)),
    ("blue", RGBColor(0, 0, 255)),
    ("lightblue", RGBColor(173, 216, 230)),
    ("magenta", RGBColor(255, 0, 255)),
    ("cyan", RGBColor(0, 255, 255)),
    ("yellow", RGBColor(255, 255, 0)),
    ("orange", RGBColor(255, 165, 0)),
    ("purple", RGBColor(128, 0, 128)),
    ("gray", RGBColor(128, 128, 128)),
    ("grey", RGBColor(128, 128, 128)),
    ("lightgray", RGBColor(211, 211, 211)),
    ("darkgray", RGBColor(169, 169, 169)),
    ("navy", RGBColor(0, 0, 128)),
    ("teal", RGBColor(0, 128, 128)),
    ("brown", RGBColor(165, 42, 42)),
    ("pink", RGBColor(255, 192, 203)),
    ("steelblue", RGBColor(70, 130, 180)),
    // Tableau 10, the usual default color cycle.
    ("tab:blue", RGBColor(31, 119, 180)),
    ("tab:orange", RGBColor(255, 127, 14)),
    ("tab:green", RGBColor(44, 160, 44)),
    ("tab:red", RGBColor(214, 39, 40)),
    ("tab:purple", RGBColor(148, 103, 189)),
    ("tab:brown", RGBColor(140, 86, 75)),
    ("tab:pink", RGBColor(227, 119, 194)),
    ("tab:gray", RGBColor(127, 127, 127)),
    ("tab:olive", RGBColor(188, 189, 34)),
    ("tab:cyan", RGBColor(23, 190, 207)),
];

// Single-letter shorthands.
const SHORT_COLORS: &[(&str, &str)] = &[
    ("k", "black"),
    ("w", "white"),
    ("r", "red"),
    ("g", "green"),
    ("b", "blue"),
    ("m", "magenta"),
    ("c", "cyan"),
    ("y", "yellow"),
];

/// Parses a color name (`"lightblue"`, `"tab:red"`, `"k"`) or a `#rrggbb` / `#rgb` hex string.
pub fn parse_color(spec: &str) -> Result<RGBColor> {
    let key = spec.trim().to_ascii_lowercase();
    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| PlotError::UnknownColor(spec.to_string()));
    }
    let name = SHORT_COLORS
        .iter()
        .find(|(short, _)| *short == key)
        .map(|(_, full)| *full)
        .unwrap_or(key.as_str());
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .ok_or_else(|| PlotError::UnknownColor(spec.to_string()))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(RGBColor(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(RGBColor(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("lightblue").unwrap(), RGBColor(173, 216, 230));
        assert_eq!(parse_color("Magenta").unwrap(), RGBColor(255, 0, 255));
        assert_eq!(parse_color("k").unwrap(), RGBColor(0, 0, 0));
        assert_eq!(parse_color("tab:blue").unwrap(), RGBColor(31, 119, 180));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ff8000").unwrap(), RGBColor(255, 128, 0));
        assert_eq!(parse_color("#fff").unwrap(), RGBColor(255, 255, 255));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn test_unknown_color() {
        match parse_color("notacolor") {
            Err(PlotError::UnknownColor(name)) => assert_eq!(name, "notacolor"),
            other => panic!("expected UnknownColor, got {other:?}"),
        }
    }
}
