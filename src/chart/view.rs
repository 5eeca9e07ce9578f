use crate::chart::geometry::{ArcSector, Ring};
use crate::chart::legend::{self, LegendRow};
use crate::chart::model::ProgressChart;
use crate::chart::theme::ChartTheme;
use crate::chart::{LEGEND_SWATCH_RADIUS, LEGEND_SWATCH_SIZE, TRACK_OPACITY};
use cairo::Context;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, PI};

struct RingRenderer<'a> {
    ring: &'a Ring,
    stroke_width: f64,
    color: Srgba<f64>,
}

impl<'a> RingRenderer<'a> {
    fn new(ring: &'a Ring, stroke_width: f64, color: Srgba<f64>) -> Self {
        Self {
            ring,
            stroke_width,
            color,
        }
    }

    fn draw_track(&self, cr: &Context, theme: &ChartTheme) -> Result<(), cairo::Error> {
        set_source_color(cr, theme.color(TRACK_OPACITY, self.ring.index));
        cr.set_line_cap(cairo::LineCap::Butt);
        stroke_arc(cr, &self.ring.track, self.stroke_width)
    }

    fn draw_progress(&self, cr: &Context) -> Result<(), cairo::Error> {
        // a zero-length arc with a round cap would paint a lone dot
        if self.ring.progress.sweep() <= 0.0 {
            return Ok(());
        }
        set_source_color(cr, self.color);
        cr.set_line_cap(cairo::LineCap::Round);
        cr.set_line_join(cairo::LineJoin::Round);
        stroke_arc(cr, &self.ring.progress, self.stroke_width)
    }
}

/// Renders the whole chart into the given context: background, track arcs,
/// progress arcs, then the legend. Pure function of its inputs; nothing is
/// retained across calls.
pub fn draw(cr: &Context, chart: &ProgressChart, theme: &ChartTheme) -> Result<(), cairo::Error> {
    cr.save()?;
    draw_background(cr, chart, theme)?;

    let origin = chart.group_origin();
    cr.translate(origin.x, origin.y);

    let rings = chart.rings();
    let count = rings.len();
    let renderers: Vec<RingRenderer<'_>> = rings
        .iter()
        .map(|ring| {
            RingRenderer::new(
                ring,
                chart.stroke_width,
                progress_color(chart, theme, ring.index, count),
            )
        })
        .collect();

    for renderer in &renderers {
        renderer.draw_track(cr, theme)?;
    }
    for renderer in &renderers {
        renderer.draw_progress(cr)?;
    }

    if !chart.hide_legend {
        draw_legend(cr, chart, theme)?;
    }
    cr.restore()
}

fn draw_background(
    cr: &Context,
    chart: &ProgressChart,
    theme: &ChartTheme,
) -> Result<(), cairo::Error> {
    let gradient = theme.background_gradient(chart.height);
    cr.set_source(&gradient)?;
    rounded_rect(
        cr,
        0.0,
        0.0,
        chart.width,
        chart.height,
        chart.style.border_radius,
    );
    cr.fill()
}

fn draw_legend(cr: &Context, chart: &ProgressChart, theme: &ChartTheme) -> Result<(), cairo::Error> {
    for row in legend::build_rows(&chart.dataset, chart.width, chart.height) {
        draw_swatch(cr, chart, theme, &row)?;
        draw_label(cr, theme, &row)?;
    }
    Ok(())
}

fn draw_swatch(
    cr: &Context,
    chart: &ProgressChart,
    theme: &ChartTheme,
    row: &LegendRow,
) -> Result<(), cairo::Error> {
    let color = if chart.custom_ring_colors {
        ring_custom_color(chart, theme, row.ring_index, swatch_opacity(row.ring_index))
    } else {
        theme.color(swatch_opacity(row.ring_index), row.ring_index)
    };
    set_source_color(cr, color);
    rounded_rect(
        cr,
        row.swatch.x,
        row.swatch.y,
        LEGEND_SWATCH_SIZE,
        LEGEND_SWATCH_SIZE,
        LEGEND_SWATCH_RADIUS,
    );
    cr.fill()
}

fn draw_label(cr: &Context, theme: &ChartTheme, row: &LegendRow) -> Result<(), cairo::Error> {
    set_source_color(cr, theme.label_color.srgba());
    cr.select_font_face(
        &theme.label_font_family,
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );
    cr.set_font_size(theme.label_font_size);
    cr.move_to(row.label_pos.x, row.label_pos.y);
    cr.show_text(&row.text)
}

fn progress_color(
    chart: &ProgressChart,
    theme: &ChartTheme,
    index: usize,
    count: usize,
) -> Srgba<f64> {
    if chart.custom_ring_colors {
        ring_custom_color(chart, theme, index, progress_opacity(index, count))
    } else {
        theme.color(progress_opacity(index, count), index)
    }
}

fn ring_custom_color(
    chart: &ProgressChart,
    theme: &ChartTheme,
    index: usize,
    fallback_opacity: f64,
) -> Srgba<f64> {
    match chart.dataset.color(index) {
        Some(color) => color.srgba(),
        None => {
            log::warn!("no custom color for ring {index}, falling back to the theme hue");
            theme.color(fallback_opacity, index)
        }
    }
}

/// Outer rings are drawn more prominently.
fn progress_opacity(index: usize, count: usize) -> f64 {
    (index as f64 / count as f64) * 0.6 + 0.6
}

fn swatch_opacity(ring_index: usize) -> f64 {
    0.6 * (ring_index as f64 + 1.0)
}

fn set_source_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn stroke_arc(cr: &Context, arc: &ArcSector, stroke_width: f64) -> Result<(), cairo::Error> {
    cr.set_line_width(stroke_width);
    cr.new_path();
    cr.arc(
        arc.center.x,
        arc.center.y,
        arc.radius,
        arc.start_angle,
        arc.end_angle,
    );
    cr.stroke()
}

fn rounded_rect(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r = radius.clamp(0.0, width.min(height) / 2.0);
    if r <= 0.0 {
        cr.rectangle(x, y, width, height);
        return;
    }
    cr.new_sub_path();
    cr.arc(x + width - r, y + r, r, -FRAC_PI_2, 0.0);
    cr.arc(x + width - r, y + height - r, r, 0.0, FRAC_PI_2);
    cr.arc(x + r, y + height - r, r, FRAC_PI_2, PI);
    cr.arc(x + r, y + r, r, PI, PI + FRAC_PI_2);
    cr.close_path();
}
