// src/plot_functions/stylize_axes.rs

use crate::axes::{Axes, Side, TickDirection, TickParams};
use crate::constants::STYLIZED_TICK_WIDTH_PT;

/// Minimalist frame: hides the top and right spines, points ticks outward on
/// the bottom and left only, and sets title and axis labels.
///
/// Each tick sequence is applied only when it is non-empty; an empty slice
/// leaves the current ticks or labels alone.
#[allow(clippy::too_many_arguments)]
pub fn stylize_axes(
    ax: &mut Axes,
    title: &str,
    xlabel: &str,
    ylabel: &str,
    xticks: &[f64],
    yticks: &[f64],
    xticklabels: &[&str],
    yticklabels: &[&str],
) {
    ax.spines_mut().set_visible(Side::Top, false);
    ax.spines_mut().set_visible(Side::Right, false);

    outward_primary_only(ax.x_tick_params_mut());
    outward_primary_only(ax.y_tick_params_mut());

    ax.set_title(title);
    ax.set_xlabel(xlabel);
    ax.set_ylabel(ylabel);

    if !xticks.is_empty() {
        ax.set_xticks(xticks);
    }
    if !yticks.is_empty() {
        ax.set_yticks(yticks);
    }
    if !xticklabels.is_empty() {
        ax.set_xticklabels(xticklabels);
    }
    if !yticklabels.is_empty() {
        ax.set_yticklabels(yticklabels);
    }
}

fn outward_primary_only(params: &mut TickParams) {
    params.secondary = false;
    params.direction = TickDirection::Out;
    params.width = STYLIZED_TICK_WIDTH_PT;
}
