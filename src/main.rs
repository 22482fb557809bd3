// src/main.rs

// Renders a two-column demo figure with one panel per chart type.

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use log::info;

use figconfig::colors::parse_color;
use figconfig::font_config::GlobalStyle;
use figconfig::{
    configure_global_style, configure_global_style_with, crate_version, draw_bar, draw_box,
    draw_line, draw_scatter, stylize_axes, Figure, FigureSize, TWO_COLUMN_WIDTH,
};
use figconfig::artists::ErrorBarStyle;

const DEFAULT_OUTPUT: &str = "figconfig_demo.png";

fn print_usage(program: &str) {
    eprintln!("figconfig {}", crate_version());
    eprintln!("Usage: {} [OUTPUT.png|OUTPUT.svg] [--style STYLE.json]", program);
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let mut output = DEFAULT_OUTPUT.to_string();
    let mut style_path: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--style" => {
                let Some(path) = args.get(i + 1) else {
                    print_usage(&args[0]);
                    std::process::exit(1);
                };
                style_path = Some(path.clone());
                i += 2;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            other => {
                output = other.to_string();
                i += 1;
            }
        }
    }

    // --- Global Style ---
    match &style_path {
        Some(path) => {
            let style: GlobalStyle = serde_json::from_str(&fs::read_to_string(path)?)?;
            info!("Loaded style from '{}'", path);
            configure_global_style_with(style);
        }
        None => configure_global_style(),
    }

    // --- Figure ---
    let size = FigureSize::golden(TWO_COLUMN_WIDTH);
    let mut fig = Figure::subplots(size, 2, 2);

    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.1, 3.9, 6.2, 7.8, 10.1];
    let err = [0.4, 0.6, 0.5, 0.8, 0.7];

    if let Some(ax) = fig.axes_mut(0, 0) {
        draw_line(ax, &x, &y, &err, (0.0, 6.0), (0.0, 12.0), None);
        stylize_axes(ax, "Line", "$t$ (s)", "Signal", &[], &[], &[], &[]);
    }

    if let Some(ax) = fig.axes_mut(0, 1) {
        draw_scatter(ax, &x, &y, &err, (0.0, 6.0), (0.0, 12.0), Some(parse_color("tab:blue")?), None);
        stylize_axes(ax, "Scatter", "$x$", "$y$", &[], &[], &[], &[]);
    }

    if let Some(ax) = fig.axes_mut(1, 0) {
        let style = ErrorBarStyle {
            capsize: 4.0,
            ..ErrorBarStyle::default()
        };
        draw_bar(ax, &[1.0, 2.0, 3.0], &[4.0, 7.0, 5.5], &[0.5, 0.9, 0.6], (0.0, 4.0), (0.0, 9.0), style, None, None);
        stylize_axes(
            ax,
            "Bar",
            "",
            "Count",
            &[1.0, 2.0, 3.0],
            &[],
            &["A", "B", "C"],
            &[],
        );
    }

    if let Some(ax) = fig.axes_mut(1, 1) {
        let samples = vec![
            vec![1.0, 2.0, 2.5, 3.0, 3.2, 4.0, 9.5],
            vec![2.0, 3.5, 4.0, 4.2, 5.0, 6.0],
            vec![0.5, 1.5, 2.0, 2.2, 3.0],
        ];
        draw_box(ax, &[1.0, 2.0, 3.0], &samples, &[], (0.0, 4.0), (0.0, 10.0), None);
        stylize_axes(
            ax,
            "Box",
            "",
            r"$\Delta$ (a.u.)",
            &[1.0, 2.0, 3.0],
            &[],
            &["ctrl", "low", "high"],
            &[],
        );
    }

    fig.save(Path::new(&output))?;
    println!("Demo figure saved as '{}'.", output);
    Ok(())
}
