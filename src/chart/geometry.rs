use crate::chart::{RING_AREA_INSET, START_ANGLE, TRACK_SWEEP};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Radius of ring `index` out of `count`: the outer radii step outward from
/// `base_radius` so the ring stack fills the chart height minus a fixed inset.
pub fn ring_radius(index: usize, count: usize, height: f64, base_radius: f64) -> f64 {
    ((height / 2.0 - RING_AREA_INSET) / count as f64) * index as f64 + base_radius
}

/// A stroke-width-defined circular arc (inner and outer radius coincide).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSector {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSector {
    /// Arc covering `fraction` of the circle, opening at 12 o'clock.
    pub fn sector(center: Point, radius: f64, fraction: f64) -> Self {
        Self {
            center,
            radius,
            start_angle: START_ANGLE,
            end_angle: START_ANGLE + fraction * 2.0 * PI,
        }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One concentric gauge: a full-circle track plus a progress arc whose sweep
/// is proportional to the entry's ratio.
#[derive(Debug, Clone)]
pub struct Ring {
    pub index: usize,
    pub value: f64,
    pub radius: f64,
    pub progress: ArcSector,
    pub track: ArcSector,
}

/// Lays out one ring per value, innermost first. An empty slice yields no
/// rings; the radius step (which divides by the ring count) is never evaluated.
pub fn build_rings(values: &[f64], height: f64, base_radius: f64, center: Point) -> Vec<Ring> {
    let count = values.len();

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let radius = ring_radius(index, count, height, base_radius);
            Ring {
                index,
                value,
                radius,
                progress: ArcSector::sector(center, radius, value),
                // tracks always sit at the group origin; only progress arcs
                // honor the center offset
                track: ArcSector::sector(Point::default(), radius, TRACK_SWEEP),
            }
        })
        .collect()
}
