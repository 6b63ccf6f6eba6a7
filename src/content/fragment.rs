//! Static fragment descriptions for each tab

use crate::chart::CanvasId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBox {
    pub tone: Tone,
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Paragraph(&'static str),
    Heading(&'static str),
    InfoGrid(Vec<InfoBox>),
    Canvas(CanvasId),
}

/// One card of content: a title and its children in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub title: &'static str,
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.nodes.is_empty()
    }

    pub fn canvases(&self) -> impl Iterator<Item = CanvasId> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Canvas(id) => Some(*id),
            _ => None,
        })
    }

    pub fn has_canvas(&self, canvas: CanvasId) -> bool {
        self.canvases().any(|id| id == canvas)
    }
}

pub const COMPLAINTS_CANVAS: CanvasId = CanvasId("complaintsChart");
pub const SUPPLIERS_CANVAS: CanvasId = CanvasId("suppliersChart");
pub const SHIFT_CANVAS: CanvasId = CanvasId("shiftChart");
pub const TRENDS_CANVAS: CanvasId = CanvasId("trendsChart");

pub const KEY_ISSUES: &[&str] = &[
    "15% increase in product returns",
    "20% increase in customer complaints",
    "10% increase in shipping delays",
    "10% defect rate (up from 3%)",
];

pub const ROOT_CAUSES: &[&str] = &[
    "Inconsistent inspections",
    "Supplier quality issues",
    "Training gaps",
    "Poor interdepartmental communication",
];

pub fn overview() -> Fragment {
    Fragment {
        title: "Performance Overview",
        nodes: vec![
            Node::Paragraph(
                "FlexiMove Logistics is experiencing significant quality control challenges, \
                 impacting customer satisfaction and operational efficiency.",
            ),
            Node::InfoGrid(vec![
                InfoBox {
                    tone: Tone::Red,
                    heading: "Key Issues",
                    items: KEY_ISSUES,
                },
                InfoBox {
                    tone: Tone::Yellow,
                    heading: "Root Causes",
                    items: ROOT_CAUSES,
                },
            ]),
        ],
    }
}

pub fn complaints() -> Fragment {
    Fragment {
        title: "Customer Complaints Breakdown",
        nodes: vec![Node::Canvas(COMPLAINTS_CANVAS)],
    }
}

pub fn suppliers() -> Fragment {
    Fragment {
        title: "Supplier Defect Rates",
        nodes: vec![Node::Canvas(SUPPLIERS_CANVAS)],
    }
}

pub fn performance() -> Fragment {
    Fragment {
        title: "Performance Metrics",
        nodes: vec![
            Node::Heading("Shift Performance"),
            Node::Canvas(SHIFT_CANVAS),
            Node::Heading("Monthly Trends"),
            Node::Canvas(TRENDS_CANVAS),
        ],
    }
}
