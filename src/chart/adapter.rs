//! Dataset → ChartSpec mapping, one entry point per chart kind

use thiserror::Error;

use super::spec::{ChartKind, ChartSpec, PercentOverlay, Series};
use crate::data::{DataError, Dataset, Palette};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] DataError),
}

/// A metric key plotted as one bar series, colored by palette index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesKey {
    pub key: String,
    pub color_index: usize,
}

impl SeriesKey {
    pub fn new(key: impl Into<String>, color_index: usize) -> Self {
        Self {
            key: key.into(),
            color_index,
        }
    }

    /// Keys colored by their position, wrapping around the palette
    pub fn indexed(keys: &[&str]) -> Vec<SeriesKey> {
        keys.iter()
            .enumerate()
            .map(|(idx, key)| SeriesKey::new(*key, idx))
            .collect()
    }
}

pub const DEFAULT_BAR_KEY: &str = "rate";

pub fn pie_chart(
    title: &str,
    dataset: &Dataset,
    metric: &str,
    palette: &Palette,
    overlay: Option<PercentOverlay>,
) -> Result<ChartSpec, ChartError> {
    let values = dataset.values(metric)?;
    let slice_colors = (0..values.len()).map(|idx| palette.color(idx)).collect();
    Ok(ChartSpec {
        title: title.to_string(),
        kind: ChartKind::Pie {
            slice_colors,
            overlay,
        },
        labels: dataset.labels(),
        series: vec![Series {
            label: metric.to_string(),
            values,
            color: palette.color(0),
        }],
    })
}

/// Bar chart with one series per key; an empty key list falls back to `rate`.
pub fn bar_chart(
    title: &str,
    dataset: &Dataset,
    keys: &[SeriesKey],
    palette: &Palette,
) -> Result<ChartSpec, ChartError> {
    let default_keys;
    let keys = if keys.is_empty() {
        default_keys = [SeriesKey::new(DEFAULT_BAR_KEY, 0)];
        &default_keys[..]
    } else {
        keys
    };

    let series = keys
        .iter()
        .map(|series_key| {
            Ok(Series {
                label: series_key.key.clone(),
                values: dataset.values(&series_key.key)?,
                color: palette.color(series_key.color_index),
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    Ok(ChartSpec {
        title: title.to_string(),
        kind: ChartKind::Bar,
        labels: dataset.labels(),
        series,
    })
}

/// Returns and complaints over the month axis.
pub fn line_chart(
    title: &str,
    dataset: &Dataset,
    palette: &Palette,
) -> Result<ChartSpec, ChartError> {
    Ok(ChartSpec {
        title: title.to_string(),
        kind: ChartKind::Line,
        labels: dataset.labels(),
        series: vec![
            Series {
                label: "Returns".to_string(),
                values: dataset.values("returns")?,
                color: palette.color(0),
            },
            Series {
                label: "Complaints".to_string(),
                values: dataset.values("complaints")?,
                color: palette.color(2),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        Rgb, CUSTOMER_COMPLAINTS, MONTHLY_TRENDS, SHIFT_PERFORMANCE, SUPPLIER_DEFECTS,
    };

    #[test]
    fn test_pie_single_series_with_slice_colors() {
        let palette = Palette::default();
        let spec = pie_chart(
            "Customer Complaints Breakdown",
            &CUSTOMER_COMPLAINTS,
            "value",
            &palette,
            Some(PercentOverlay::default()),
        )
        .unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].values, vec![50.0, 30.0, 20.0]);
        assert_eq!(
            spec.labels,
            vec!["Damaged Goods", "Incorrect Items", "Delayed Shipments"]
        );
        match &spec.kind {
            ChartKind::Pie { slice_colors, overlay } => {
                assert_eq!(slice_colors, &palette.colors()[..3].to_vec());
                assert!(overlay.is_some());
            }
            other => panic!("expected pie, got {}", other.name()),
        }
    }

    #[test]
    fn test_supplier_bars() {
        let spec = bar_chart(
            "Supplier Defect Rates",
            &SUPPLIER_DEFECTS,
            &[],
            &Palette::default(),
        )
        .unwrap();
        assert_eq!(spec.title, "Supplier Defect Rates");
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, "rate");
        assert_eq!(spec.series[0].values, vec![5.0, 12.0, 3.0]);
        assert_eq!(spec.labels, vec!["Supplier A", "Supplier B", "Supplier C"]);
    }

    #[test]
    fn test_shift_bars_two_aligned_series() {
        let palette = Palette::default();
        let spec = bar_chart(
            "Shift Performance",
            &SHIFT_PERFORMANCE,
            &SeriesKey::indexed(&["onTime", "defectRate"]),
            &palette,
        )
        .unwrap();
        assert_eq!(spec.labels, vec!["Morning Shift", "Evening Shift"]);
        let values: Vec<Vec<f64>> = spec.series.iter().map(|s| s.values.clone()).collect();
        assert_eq!(values, vec![vec![85.0, 70.0], vec![8.0, 12.0]]);
        assert_eq!(spec.series[0].color, palette.color(0));
        assert_eq!(spec.series[1].color, palette.color(1));
    }

    #[test]
    fn test_bar_colors_wrap_past_palette() {
        let palette = Palette::new(vec![Rgb(1, 1, 1), Rgb(2, 2, 2)]).unwrap();
        let keys = SeriesKey::indexed(&["onTime", "defectRate", "onTime"]);
        let spec = bar_chart("Wrap", &SHIFT_PERFORMANCE, &keys, &palette).unwrap();
        let colors: Vec<Rgb> = spec.series.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Rgb(1, 1, 1), Rgb(2, 2, 2), Rgb(1, 1, 1)]);
    }

    #[test]
    fn test_line_kind_serializes_as_bare_tag() {
        let spec = line_chart("Monthly Trends", &MONTHLY_TRENDS, &Palette::default()).unwrap();
        let json = serde_json::to_value(&spec.kind).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "line" }));
    }

    #[test]
    fn test_line_fixed_series() {
        let palette = Palette::default();
        let spec = line_chart("Monthly Trends", &MONTHLY_TRENDS, &palette).unwrap();
        assert_eq!(spec.labels, vec!["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(spec.kind, ChartKind::Line);
        let returns = spec.series_by_label("Returns").unwrap();
        let complaints = spec.series_by_label("Complaints").unwrap();
        assert_eq!(returns.values, vec![5.0, 7.0, 10.0, 15.0]);
        assert_eq!(complaints.values, vec![8.0, 10.0, 15.0, 20.0]);
        assert_eq!(returns.color, palette.color(0));
        assert_eq!(complaints.color, palette.color(2));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let err = bar_chart(
            "Shift Performance",
            &SHIFT_PERFORMANCE,
            &[SeriesKey::new("rate", 0)],
            &Palette::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::Data(DataError::MissingMetric { .. })));
    }
}
