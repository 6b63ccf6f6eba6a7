//! FIFO of chart constructions deferred until the fragment is committed

use std::collections::VecDeque;

use crate::chart::{
    bar_chart, line_chart, pie_chart, CanvasId, ChartError, ChartSpec, PercentOverlay, SeriesKey,
};
use crate::data::{Dataset, Palette};

/// What to build once the target canvas exists
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRequest {
    Pie {
        title: &'static str,
        dataset: Dataset,
        metric: &'static str,
    },
    Bar {
        title: &'static str,
        dataset: Dataset,
        keys: Vec<SeriesKey>,
    },
    Line {
        title: &'static str,
        dataset: Dataset,
    },
}

impl ChartRequest {
    pub fn title(&self) -> &'static str {
        match self {
            ChartRequest::Pie { title, .. }
            | ChartRequest::Bar { title, .. }
            | ChartRequest::Line { title, .. } => *title,
        }
    }

    pub fn build(
        &self,
        palette: &Palette,
        overlay: PercentOverlay,
    ) -> Result<ChartSpec, ChartError> {
        match self {
            ChartRequest::Pie {
                title,
                dataset,
                metric,
            } => pie_chart(title, dataset, metric, palette, Some(overlay)),
            ChartRequest::Bar {
                title,
                dataset,
                keys,
            } => bar_chart(title, dataset, keys, palette),
            ChartRequest::Line { title, dataset } => line_chart(title, dataset, palette),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    /// Content generation the job was scheduled against
    pub generation: u64,
    pub canvas: CanvasId,
    pub request: ChartRequest,
}

#[derive(Debug, Default)]
pub struct DeferredQueue {
    jobs: VecDeque<ChartJob>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: ChartJob) {
        self.jobs.push_back(job);
    }

    /// Take every pending job in scheduling order
    pub fn drain(&mut self) -> Vec<ChartJob> {
        self.jobs.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CUSTOMER_COMPLAINTS, MONTHLY_TRENDS};

    fn job(generation: u64, canvas: &'static str) -> ChartJob {
        ChartJob {
            generation,
            canvas: CanvasId(canvas),
            request: ChartRequest::Line {
                title: "Monthly Trends",
                dataset: MONTHLY_TRENDS,
            },
        }
    }

    #[test]
    fn test_drain_is_fifo() {
        let mut queue = DeferredQueue::new();
        queue.push(job(1, "a"));
        queue.push(job(2, "b"));
        queue.push(job(3, "c"));
        let order: Vec<u64> = queue.drain().iter().map(|j| j.generation).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pie_request_carries_overlay() {
        let request = ChartRequest::Pie {
            title: "Customer Complaints Breakdown",
            dataset: CUSTOMER_COMPLAINTS,
            metric: "value",
        };
        let overlay = PercentOverlay { margin: 0.5 };
        let spec = request.build(&Palette::default(), overlay).unwrap();
        assert_eq!(spec.title, request.title());
        match spec.kind {
            crate::chart::ChartKind::Pie { overlay: Some(o), .. } => assert_eq!(o.margin, 0.5),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
