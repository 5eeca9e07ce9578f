use crate::chart::geometry::Point;
use crate::chart::model::DataSet;
use crate::chart::{
    LEGEND_ITEM_SPACING, LEGEND_SWATCH_INSET, LEGEND_TEXT_BASELINE_OFFSET, LEGEND_TEXT_INSET,
    LEGEND_X_DIVISOR,
};

/// One legend line: a color swatch plus `"{percent}% {label}"` text for the
/// ring it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub ring_index: usize,
    pub swatch: Point,
    pub label_pos: Point,
    pub text: String,
}

/// Legend rows, top to bottom. Rows run in reverse ring order on purpose:
/// the outermost ring is the most prominent and is conventionally listed
/// first, whatever the input order.
pub fn build_rows(dataset: &DataSet, width: f64, height: f64) -> Vec<LegendRow> {
    let count = dataset.len();

    (0..count)
        .map(|display_index| {
            let ring_index = count - 1 - display_index;
            // stack the rows around the vertical center
            let y = LEGEND_ITEM_SPACING - (height * 0.8) / 2.0
                + display_index as f64 * LEGEND_ITEM_SPACING;

            LegendRow {
                ring_index,
                swatch: Point::new(width / LEGEND_X_DIVISOR - LEGEND_SWATCH_INSET, y),
                label_pos: Point::new(
                    width / LEGEND_X_DIVISOR - LEGEND_TEXT_INSET,
                    y + LEGEND_TEXT_BASELINE_OFFSET,
                ),
                text: row_text(dataset, ring_index),
            }
        })
        .collect()
}

fn row_text(dataset: &DataSet, ring_index: usize) -> String {
    let percent = (100.0 * dataset.data[ring_index]).round() as i64;
    match dataset.label(ring_index) {
        Some(label) => format!("{percent}% {label}"),
        None => format!("{percent}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(data: Vec<f64>) -> DataSet {
        DataSet {
            data,
            ..DataSet::default()
        }
    }

    #[test]
    fn rows_list_the_outermost_ring_first() {
        let rows = build_rows(&dataset(vec![0.1, 0.5, 0.9]), 220.0, 220.0);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].ring_index, 2);
        assert_eq!(rows[0].text, "90%");
        assert_eq!(rows[1].ring_index, 1);
        assert_eq!(rows[2].ring_index, 0);
        assert_eq!(rows[2].text, "10%");
    }

    #[test]
    fn percentages_round_to_whole_numbers() {
        let rows = build_rows(&dataset(vec![0.666]), 220.0, 220.0);
        assert_eq!(rows[0].text, "67%");
    }

    #[test]
    fn labels_are_appended_after_the_percentage() {
        let rows = build_rows(
            &DataSet {
                data: vec![0.4, 0.8],
                labels: Some(vec!["Swim".to_string(), "Run".to_string()]),
                colors: None,
            },
            220.0,
            220.0,
        );
        assert_eq!(rows[0].text, "80% Run");
        assert_eq!(rows[1].text, "40% Swim");
    }

    #[test]
    fn missing_labels_fall_back_to_percentage_only() {
        let rows = build_rows(
            &DataSet {
                data: vec![0.4, 0.8],
                labels: Some(vec!["Swim".to_string()]),
                colors: None,
            },
            220.0,
            220.0,
        );
        // the outer ring has no label entry
        assert_eq!(rows[0].text, "80%");
        assert_eq!(rows[1].text, "40% Swim");
    }

    #[test]
    fn rows_stack_downward_at_fixed_spacing() {
        let rows = build_rows(&dataset(vec![0.2, 0.4, 0.6]), 220.0, 200.0);

        let x = 220.0 / 2.5 - 24.0;
        let y0 = 30.0 - (200.0 * 0.8) / 2.0;
        for (i, row) in rows.iter().enumerate() {
            assert!((row.swatch.x - x).abs() < 1e-9);
            assert!((row.swatch.y - (y0 + 30.0 * i as f64)).abs() < 1e-9);
            assert!((row.label_pos.x - (220.0 / 2.5 - 5.0)).abs() < 1e-9);
            assert!((row.label_pos.y - (row.swatch.y + 10.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_data_yields_no_rows() {
        assert!(build_rows(&dataset(vec![]), 220.0, 220.0).is_empty());
    }
}
