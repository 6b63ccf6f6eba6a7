//! Chart adapter: dataset records to chart configuration, plus the drawing boundary

pub mod adapter;
pub mod backend;
pub mod percent;
pub mod spec;

pub use adapter::{bar_chart, line_chart, pie_chart, ChartError, SeriesKey};
pub use backend::{CanvasId, ChartBackend, ChartBoard, ChartHandle, DrawnChart};
pub use spec::{ChartKind, ChartSpec, PercentOverlay, Series};
