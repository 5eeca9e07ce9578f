use std::f64::consts::PI;

pub mod geometry;
pub mod legend;
pub mod model;
pub mod theme;
pub mod view;

pub use geometry::{ArcSector, Point, Ring, build_rings, ring_radius};
pub use legend::LegendRow;
pub use model::{ChartStyle, DataSet, ProgressChart, ProgressChartData};
pub use theme::{ChartTheme, HexColor};
pub use view::draw;

pub const DEFAULT_STROKE_WIDTH: f64 = 16.0;
pub const DEFAULT_BASE_RADIUS: f64 = 32.0;
pub const RING_AREA_INSET: f64 = 32.0; // headroom between the outermost ring and the chart edge
pub const START_ANGLE: f64 = -PI / 2.0; // arcs open at 12 o'clock and run clockwise
pub const TRACK_SWEEP: f64 = 0.999; // kept short of a full turn; a closed circle degenerates the arc path
pub const TRACK_OPACITY: f64 = 0.2;
pub const GROUP_X_DIVISOR_WITH_LEGEND: f64 = 3.3; // rings sit left of center to leave room for the legend
pub const GROUP_X_DIVISOR_NO_LEGEND: f64 = 2.0;
pub const LEGEND_ITEM_SPACING: f64 = 30.0;
pub const LEGEND_SWATCH_SIZE: f64 = 13.0;
pub const LEGEND_SWATCH_RADIUS: f64 = 8.0; // over half the swatch size; the renderer clamps it to a pill
pub const LEGEND_X_DIVISOR: f64 = 2.5;
pub const LEGEND_SWATCH_INSET: f64 = 24.0;
pub const LEGEND_TEXT_INSET: f64 = 5.0;
pub const LEGEND_TEXT_BASELINE_OFFSET: f64 = 10.0;
