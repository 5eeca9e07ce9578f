use anyhow::Context as _;
use clap::Parser;
use std::path::PathBuf;

use ringchart::chart::{DEFAULT_BASE_RADIUS, DEFAULT_STROKE_WIDTH, ProgressChart};
use ringchart::config;
use ringchart::render::{self, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "ringchart", version, about, long_about = None)]
struct Cli {
    /// Chart data file (TOML with `data`, optional `labels` and `colors`)
    input: PathBuf,

    /// Output image path (.png or .svg)
    #[arg(short, long)]
    output: PathBuf,

    /// Output format, inferred from the output extension when omitted
    #[arg(short, long)]
    format: Option<OutputFormat>,

    #[arg(long, default_value_t = 220.0)]
    width: f64,

    #[arg(long, default_value_t = 220.0)]
    height: f64,

    /// Radius of the innermost ring
    #[arg(long, default_value_t = DEFAULT_BASE_RADIUS)]
    radius: f64,

    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,

    /// Skip the legend and center the rings
    #[arg(long)]
    hide_legend: bool,

    /// Stroke each ring with the `colors` entry from the data file
    #[arg(long)]
    custom_colors: bool,

    /// Corner radius of the background rectangle
    #[arg(long, default_value_t = 0.0)]
    border_radius: f64,

    /// Theme file (TOML); defaults to the user config path
    #[arg(long)]
    theme: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = config::load_chart_data(&cli.input)
        .with_context(|| format!("Failed to load chart data from {}", cli.input.display()))?;
    let theme = config::load_theme_or_default(cli.theme.as_deref()).into_theme();

    let mut chart = ProgressChart::new(dataset, cli.width, cli.height);
    chart.hide_legend = cli.hide_legend;
    chart.custom_ring_colors = cli.custom_colors;
    chart.radius = cli.radius;
    chart.stroke_width = cli.stroke_width;
    chart.style.border_radius = cli.border_radius;

    let format = cli
        .format
        .or_else(|| OutputFormat::from_path(&cli.output))
        .with_context(|| format!("Cannot infer output format from {}", cli.output.display()))?;

    render::render_to_file(&chart, &theme, &cli.output, format)?;
    log::info!("Wrote {format} chart to {}", cli.output.display());
    Ok(())
}
