//! Drawing backend boundary
//!
//! The controller hands finished [`ChartSpec`]s to a [`ChartBackend`] and
//! keeps only the returned handle so the chart can be torn down when the
//! content it was drawn into is replaced.

use serde::Serialize;

use super::spec::ChartSpec;

/// Name of a chart region inside the content fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CanvasId(pub &'static str);

impl CanvasId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

pub trait ChartBackend {
    /// Attach a chart to `canvas`
    fn draw(&mut self, canvas: CanvasId, spec: ChartSpec) -> ChartHandle;

    /// Release a chart previously returned by `draw`; unknown handles are ignored
    fn destroy(&mut self, handle: ChartHandle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnChart {
    pub handle: ChartHandle,
    pub canvas: CanvasId,
    pub spec: ChartSpec,
}

/// Retained charts the terminal UI paints each frame
#[derive(Debug, Default)]
pub struct ChartBoard {
    next_handle: u64,
    charts: Vec<DrawnChart>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart_on(&self, canvas: CanvasId) -> Option<&DrawnChart> {
        self.charts.iter().find(|chart| chart.canvas == canvas)
    }

    pub fn charts(&self) -> &[DrawnChart] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl ChartBackend for ChartBoard {
    fn draw(&mut self, canvas: CanvasId, spec: ChartSpec) -> ChartHandle {
        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        // One chart per canvas: a redraw replaces whatever was there.
        self.charts.retain(|chart| chart.canvas != canvas);
        self.charts.push(DrawnChart {
            handle,
            canvas,
            spec,
        });
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        self.charts.retain(|chart| chart.handle != handle);
    }
}
