pub mod chart;
pub mod config;
pub mod render;

pub use chart::{ChartStyle, ChartTheme, DataSet, HexColor, ProgressChart, ProgressChartData, draw};
pub use render::{OutputFormat, RenderError, render_png, render_svg, render_to_file};
