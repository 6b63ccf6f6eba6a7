//! Content renderer
//!
//! Rendering a tab happens in two phases. The fragment is committed to the
//! [`ContentRegion`] right away; chart construction is pushed onto the
//! [`DeferredQueue`] and only runs once the caller drains it, by which time
//! the target canvases are part of the live content.

pub mod fragment;
mod queue;
mod region;

pub use fragment::{Fragment, InfoBox, Node, Tone};
pub use queue::{ChartJob, ChartRequest, DeferredQueue};
pub use region::{ContentRegion, Replaced};

use tracing::debug;

use crate::chart::{CanvasId, SeriesKey};
use crate::core::Tab;
use crate::data::Registry;

/// Fragment plus the charts to construct inside it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub fragment: Fragment,
    pub charts: Vec<(CanvasId, ChartRequest)>,
}

pub fn plan(tab: Tab, registry: &Registry) -> RenderPlan {
    match tab {
        Tab::Overview => RenderPlan {
            fragment: fragment::overview(),
            charts: Vec::new(),
        },
        Tab::Complaints => RenderPlan {
            fragment: fragment::complaints(),
            charts: vec![(
                fragment::COMPLAINTS_CANVAS,
                ChartRequest::Pie {
                    title: "Customer Complaints Breakdown",
                    dataset: registry.complaints,
                    metric: "value",
                },
            )],
        },
        Tab::Suppliers => RenderPlan {
            fragment: fragment::suppliers(),
            charts: vec![(
                fragment::SUPPLIERS_CANVAS,
                ChartRequest::Bar {
                    title: "Supplier Defect Rates",
                    dataset: registry.suppliers,
                    keys: SeriesKey::indexed(&["rate"]),
                },
            )],
        },
        Tab::Performance => RenderPlan {
            fragment: fragment::performance(),
            charts: vec![
                (
                    fragment::SHIFT_CANVAS,
                    ChartRequest::Bar {
                        title: "Shift Performance",
                        dataset: registry.shifts,
                        keys: SeriesKey::indexed(&["onTime", "defectRate"]),
                    },
                ),
                (
                    fragment::TRENDS_CANVAS,
                    ChartRequest::Line {
                        title: "Monthly Trends",
                        dataset: registry.trends,
                    },
                ),
            ],
        },
    }
}

/// Replace the region's children with `tab`'s fragment and schedule its charts.
pub fn render(
    tab: Tab,
    registry: &Registry,
    region: &mut ContentRegion,
    queue: &mut DeferredQueue,
) -> Replaced {
    let RenderPlan { fragment, charts } = plan(tab, registry);
    let replaced = region.replace(fragment);
    debug!(
        tab = %tab,
        generation = replaced.generation,
        charts = charts.len(),
        "content replaced"
    );
    for (canvas, request) in charts {
        queue.push(ChartJob {
            generation: replaced.generation,
            canvas,
            request,
        });
    }
    replaced
}
