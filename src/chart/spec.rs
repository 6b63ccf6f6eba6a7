//! Chart configuration handed to the drawing backend

use serde::Serialize;

use crate::data::Rgb;

/// One plotted sequence, aligned by index to the chart labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: Rgb,
}

/// Percentage labels drawn outside each pie slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentOverlay {
    /// Distance past the outer radius, as a fraction of that radius
    pub margin: f64,
}

impl Default for PercentOverlay {
    fn default() -> Self {
        Self { margin: 0.3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartKind {
    Pie {
        slice_colors: Vec<Rgb>,
        overlay: Option<PercentOverlay>,
    },
    Bar,
    Line,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Pie { .. } => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Largest plotted value, 0 for an empty chart
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}
