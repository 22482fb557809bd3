// src/ticks.rs

// Automatic tick placement and tick label formatting, used whenever an axis has
// no explicit tick positions or labels. Placement comes from plotters' key-point
// locator; labels go through its float printer.

use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::data::float::FloatPrettyPrinter;

/// Most decimals a tick label will ever show.
const MAX_LABEL_DECIMALS: i32 = 6;

/// Evenly spaced "nice" ticks inside `[lo, hi]` (either order), at most `max_ticks`.
pub fn auto_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || max_ticks == 0 {
        return Vec::new();
    }
    let (min, max) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let ticks = RangedCoordf64::from(min..max).key_points(max_ticks);
    let step = match ticks.as_slice() {
        [a, b, ..] => (b - a).abs(),
        _ => return ticks,
    };
    // Key points accumulate representation error (0.6000000000000001).
    let decimals = decimals_for(step);
    ticks.into_iter().map(|v| round_to(v, decimals)).collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Decimal digits of the shortest representation of `value`.
fn decimals_for(value: f64) -> i32 {
    let repr = FloatPrettyPrinter {
        allow_scientific: false,
        min_decimal: 0,
        max_decimal: MAX_LABEL_DECIMALS,
    }
    .print(value);
    repr.split_once('.')
        .map(|(_, frac)| frac.len() as i32)
        .unwrap_or(0)
}

/// Formats tick values with the fewest decimals that represent every value exactly.
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let decimals = ticks.iter().map(|&v| decimals_for(v)).max().unwrap_or(0);
    let printer = FloatPrettyPrinter {
        allow_scientific: false,
        min_decimal: decimals,
        max_decimal: decimals,
    };
    ticks
        .iter()
        .map(|&v| printer.print(if v == 0.0 { 0.0 } else { v }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval() {
        assert_eq!(
            auto_ticks(0.0, 1.0, 9),
            vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]
        );
    }

    #[test]
    fn test_ticks_stay_inside_limits() {
        let ticks = auto_ticks(-3.3, 47.0, 9);
        assert!(ticks.len() <= 9);
        assert!(ticks.iter().all(|&t| (-3.3..=47.0).contains(&t)));
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_reversed_limits() {
        assert_eq!(auto_ticks(10.0, 0.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_coarser_step_when_few_ticks_allowed() {
        assert_eq!(auto_ticks(0.0, 1.0, 5), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_degenerate_ranges() {
        assert_eq!(auto_ticks(2.0, 2.0, 9), vec![2.0]);
        assert!(auto_ticks(f64::NAN, 1.0, 9).is_empty());
        assert!(auto_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_format_ticks() {
        assert_eq!(format_ticks(&[0.0, 0.5, 1.0]), vec!["0.0", "0.5", "1.0"]);
        assert_eq!(format_ticks(&[0.0, 10.0, 20.0]), vec!["0", "10", "20"]);
        assert_eq!(format_ticks(&[0.0, 0.25]), vec!["0.00", "0.25"]);
        assert_eq!(format_ticks(&[-0.0]), vec!["0"]);
        assert_eq!(format_ticks(&[-1.5, 2.0]), vec!["-1.5", "2.0"]);
    }
}
