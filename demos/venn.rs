//! Renders the Euler diagram of a truth table to a PNG file.
//!
//! The table is given by its result column, in the standard enumeration order
//! (first variable is the most significant bit, rows from all-false to all-true).
//!
//! Run with:
//!   cargo run --example venn -- --vars A B --outputs 0110 -o xor.png
//!   cargo run --example venn -- --vars A B C --outputs 00010111 --theme dark -o majority.png

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use euler_rs::canvas::Canvas;
use euler_rs::layout::CanvasSize;
use euler_rs::render::{render_with_config, RenderConfig};
use euler_rs::table::TruthTable;
use euler_rs::theme::{Theme, WHITE};
use image::Rgba;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw the Euler diagram of a truth table")]
struct Cli {
    /// Result column as a string of 0s and 1s, one digit per row
    #[arg(long)]
    outputs: String,

    /// Variable names, in column order
    #[arg(long, num_args = 1..=4, default_values_t = ["A".to_string(), "B".to_string()])]
    vars: Vec<String>,

    /// Color scheme: light or dark
    #[arg(long, default_value = "light")]
    theme: Theme,

    /// Window width; the canvas takes 70% of it
    #[arg(long, default_value_t = 1920.0)]
    window_width: f64,

    /// Window height; the canvas takes 80% of it
    #[arg(long, default_value_t = 1080.0)]
    window_height: f64,

    /// Circle radius in pixels
    #[arg(long, default_value_t = 165.0)]
    radius: f64,

    /// Outline width in pixels
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,

    /// Label font size in pixels
    #[arg(long, default_value_t = 40.0)]
    font_size: f64,

    /// Output PNG file
    #[arg(short, long, default_value = "venn.png")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_outputs(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => bail!("invalid digit '{}' in result column, expected 0 or 1", other),
        })
        .collect()
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let outputs = parse_outputs(&args.outputs)?;
    let table = TruthTable::from_outputs(args.vars.iter().map(String::as_str), &outputs)?;
    println!("{}", table);

    let size = CanvasSize::fit_window(args.window_width, args.window_height);
    let background = match args.theme {
        Theme::Light => WHITE,
        Theme::Dark => Rgba([0x1e, 0x1e, 0x1e, 0xff]),
    };
    let mut canvas = Canvas::with_background(size.width, size.height, background);
    let config = RenderConfig {
        line_width: args.line_width,
        radius: args.radius,
        label_font_size: args.font_size,
        ..RenderConfig::default()
    };
    let stats = render_with_config(&mut canvas, &table, size, args.theme, &config)?;

    println!("Canvas: {}x{}", size.width, size.height);
    println!("Shaded {} of {} sampled points", stats.shaded, stats.sampled);
    for label in canvas.labels() {
        println!("  label {:>3} at {}", label.text, label.position);
    }

    canvas.save_png(&args.output)?;
    println!("Saved {}", args.output.display());

    Ok(())
}
