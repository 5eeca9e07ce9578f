use crate::chart::geometry::{Point, Ring, build_rings};
use crate::chart::theme::HexColor;
use crate::chart::{
    DEFAULT_BASE_RADIUS, DEFAULT_STROKE_WIDTH, GROUP_X_DIVISOR_NO_LEGEND,
    GROUP_X_DIVISOR_WITH_LEGEND,
};
use serde::{Deserialize, Serialize};

/// Chart input as callers hand it over: either a bare sequence of ratios in
/// [0, 1] or the structured form with optional labels and per-ring colors.
/// Ratios are not range-validated; out-of-range values draw wrong but never
/// panic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ProgressChartData {
    Bare(Vec<f64>),
    Structured {
        data: Vec<f64>,
        #[serde(default)]
        labels: Option<Vec<String>>,
        #[serde(default)]
        colors: Option<Vec<HexColor>>,
    },
}

impl ProgressChartData {
    /// Single normalization boundary: everything past here works on the
    /// structured form only.
    pub fn normalize(self) -> DataSet {
        match self {
            Self::Bare(data) => DataSet {
                data,
                labels: None,
                colors: None,
            },
            Self::Structured {
                data,
                labels,
                colors,
            } => DataSet {
                data,
                labels,
                colors,
            },
        }
    }
}

impl From<Vec<f64>> for ProgressChartData {
    fn from(data: Vec<f64>) -> Self {
        Self::Bare(data)
    }
}

impl From<DataSet> for ProgressChartData {
    fn from(dataset: DataSet) -> Self {
        Self::Structured {
            data: dataset.data,
            labels: dataset.labels,
            colors: dataset.colors,
        }
    }
}

/// Normalized chart input. `labels` and `colors` are index-aligned with
/// `data`; shorter arrays degrade to missing entries, they never fail.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataSet {
    pub data: Vec<f64>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub colors: Option<Vec<HexColor>>,
}

impl DataSet {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.as_ref()?.get(index).map(String::as_str)
    }

    pub fn color(&self, index: usize) -> Option<HexColor> {
        self.colors.as_ref()?.get(index).copied()
    }
}

/// Box-model overrides. The renderer consumes `border_radius`; the margins
/// size the export surface around the chart.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartStyle {
    pub border_radius: f64,
    pub margin: f64,
    pub margin_right: f64,
}

/// Everything one render pass needs. Plain props: the chart holds no state
/// across draws and every geometry is re-derived per call.
#[derive(Debug, Clone)]
pub struct ProgressChart {
    pub dataset: DataSet,
    pub width: f64,
    pub height: f64,
    /// Offset of the arcs within the ring group.
    pub center: Point,
    /// Unused by the renderer.
    pub absolute: bool,
    /// Unused by the renderer; `hide_legend` controls the legend.
    pub has_legend: bool,
    pub hide_legend: bool,
    pub stroke_width: f64,
    /// Radius of the innermost ring.
    pub radius: f64,
    /// Stroke rings with `dataset.colors` instead of the theme hue.
    pub custom_ring_colors: bool,
    pub style: ChartStyle,
}

impl ProgressChart {
    pub fn new(data: impl Into<ProgressChartData>, width: f64, height: f64) -> Self {
        Self {
            dataset: data.into().normalize(),
            width,
            height,
            center: Point::default(),
            absolute: false,
            has_legend: true,
            hide_legend: false,
            stroke_width: DEFAULT_STROKE_WIDTH,
            radius: DEFAULT_BASE_RADIUS,
            custom_ring_colors: false,
            style: ChartStyle::default(),
        }
    }

    pub fn rings(&self) -> Vec<Ring> {
        build_rings(&self.dataset.data, self.height, self.radius, self.center)
    }

    /// Center of the ring group. With a legend the rings shift left to make
    /// room for it on the right.
    pub fn group_origin(&self) -> Point {
        let divisor = if self.hide_legend {
            GROUP_X_DIVISOR_NO_LEGEND
        } else {
            GROUP_X_DIVISOR_WITH_LEGEND
        };
        Point::new(self.width / divisor, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_sequence_normalizes_without_labels_or_colors() {
        let dataset = ProgressChartData::Bare(vec![0.3, 0.6, 0.9]).normalize();
        assert_eq!(dataset.data, vec![0.3, 0.6, 0.9]);
        assert!(dataset.labels.is_none());
        assert!(dataset.colors.is_none());
    }

    #[test]
    fn untagged_serde_accepts_both_shapes() {
        let bare: ProgressChartData = serde_json::from_str("[0.3, 0.6, 0.9]").unwrap();
        assert!(matches!(bare, ProgressChartData::Bare(_)));

        let structured: ProgressChartData = serde_json::from_str(
            r##"{"data": [0.4, 0.8], "labels": ["Swim", "Run"], "colors": ["#ff0000", "#00ff00"]}"##,
        )
        .unwrap();
        let dataset = structured.normalize();
        assert_eq!(dataset.data, vec![0.4, 0.8]);
        assert_eq!(dataset.label(1), Some("Run"));
        assert_eq!(dataset.color(0), Some("#ff0000".parse().unwrap()));
    }

    #[test]
    fn short_label_and_color_arrays_degrade_to_none() {
        let dataset = DataSet {
            data: vec![0.2, 0.5, 0.8],
            labels: Some(vec!["only".to_string()]),
            colors: Some(vec!["#123456".parse().unwrap()]),
        };
        assert_eq!(dataset.label(0), Some("only"));
        assert_eq!(dataset.label(2), None);
        assert!(dataset.color(0).is_some());
        assert!(dataset.color(2).is_none());
    }

    #[test]
    fn group_centers_when_legend_is_hidden() {
        let mut chart = ProgressChart::new(vec![0.5], 220.0, 200.0);
        assert!((chart.group_origin().x - 220.0 / 3.3).abs() < 1e-9);

        chart.hide_legend = true;
        assert!((chart.group_origin().x - 110.0).abs() < 1e-9);
        assert!((chart.group_origin().y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn defaults_match_the_public_surface() {
        let chart = ProgressChart::new(vec![0.5], 220.0, 200.0);
        assert_eq!(chart.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(chart.radius, DEFAULT_BASE_RADIUS);
        assert!(!chart.custom_ring_colors);
        assert!(!chart.hide_legend);
        assert_eq!(chart.center, Point::default());
    }
}
