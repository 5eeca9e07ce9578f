use std::path::Path;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

use crate::chart::model::ProgressChart;
use crate::chart::theme::ChartTheme;
use crate::chart::view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG write error: {0}")]
    Png(#[from] cairo::IoError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn render_to_file(
    chart: &ProgressChart,
    theme: &ChartTheme,
    path: &Path,
    format: OutputFormat,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Png => render_png(chart, theme, path),
        OutputFormat::Svg => render_svg(chart, theme, path),
    }
}

pub fn render_png(
    chart: &ProgressChart,
    theme: &ChartTheme,
    path: &Path,
) -> Result<(), RenderError> {
    let (width, height) = surface_size(chart);
    let surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, width.ceil() as i32, height.ceil() as i32)?;
    draw_with_margins(&surface, chart, theme)?;

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

pub fn render_svg(
    chart: &ProgressChart,
    theme: &ChartTheme,
    path: &Path,
) -> Result<(), RenderError> {
    let (width, height) = surface_size(chart);
    let surface = cairo::SvgSurface::new(width, height, Some(path))?;
    draw_with_margins(&surface, chart, theme)?;
    // the SVG hits the disk during finish; a failed write only shows up in
    // the surface status afterwards
    surface.finish();
    surface.status()?;
    Ok(())
}

fn draw_with_margins<S: AsRef<cairo::Surface>>(
    surface: &S,
    chart: &ProgressChart,
    theme: &ChartTheme,
) -> Result<(), RenderError> {
    let cr = cairo::Context::new(surface)?;
    cr.translate(chart.style.margin, chart.style.margin);
    view::draw(&cr, chart, theme)?;
    Ok(())
}

/// Chart dimensions plus the style margins. `margin` pads every side;
/// `margin_right` overrides the right one when set.
fn surface_size(chart: &ProgressChart) -> (f64, f64) {
    let style = chart.style;
    let right = if style.margin_right > 0.0 {
        style.margin_right
    } else {
        style.margin
    };
    (
        style.margin + chart.width + right,
        style.margin + chart.height + style.margin,
    )
}
