//! Braille pie chart with a percentage legend and optional slice labels

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Paragraph, Widget,
    },
};

use crate::chart::percent::{overlay_labels, slice_at, slices, tooltip_label, DrawArea};
use crate::chart::{ChartKind, ChartSpec, PercentOverlay};
use crate::data::Rgb;

const OUTER_RADIUS: f64 = 1.0;

pub struct PieChart<'a> {
    spec: &'a ChartSpec,
    block: Option<Block<'a>>,
}

impl<'a> PieChart<'a> {
    pub fn new(spec: &'a ChartSpec) -> Self {
        Self { spec, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for PieChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width < 4 || inner.height < 3 {
            return;
        }

        let (slice_colors, overlay) = match &self.spec.kind {
            ChartKind::Pie {
                slice_colors,
                overlay,
            } => (slice_colors.as_slice(), *overlay),
            _ => return,
        };
        let values = self
            .spec
            .series
            .first()
            .map(|s| s.values.as_slice())
            .unwrap_or(&[]);

        let legend: Vec<Line> = self
            .spec
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let value = values.get(i).copied().unwrap_or(0.0);
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(slice_color(slice_colors, i))),
                    Span::raw(tooltip_label(label, value, values)),
                ])
            })
            .collect();
        let legend_width = legend.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 2;
        let legend_width = legend_width.min(inner.width / 2);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(legend_width), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(legend).render(chunks[0], buf);
        render_pie(chunks[1], buf, values, slice_colors, overlay);
    }
}

fn slice_color(colors: &[Rgb], index: usize) -> Color {
    colors.get(index).copied().map(Color::from).unwrap_or(Color::Gray)
}

/// Rasterize the disc into braille dots, one point set per slice
fn render_pie(
    area: Rect,
    buf: &mut Buffer,
    values: &[f64],
    colors: &[Rgb],
    overlay: Option<PercentOverlay>,
) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let reach = OUTER_RADIUS * (1.0 + overlay.map(|o| o.margin).unwrap_or(0.0)) + 0.2;
    // Braille cells are 2x4 dots and terminal cells roughly 1:2, so dots are square.
    let dots_w = area.width as f64 * 2.0;
    let dots_h = area.height as f64 * 4.0;
    let step = (2.0 * reach / dots_w).max(2.0 * reach / dots_h);
    let half_w = step * dots_w / 2.0;
    let half_h = step * dots_h / 2.0;

    let pie = slices(values);
    let mut per_slice: Vec<Vec<(f64, f64)>> = vec![Vec::new(); pie.len()];
    for row in 0..dots_h as usize {
        let y = half_h - (row as f64 + 0.5) * step;
        for col in 0..dots_w as usize {
            let x = -half_w + (col as f64 + 0.5) * step;
            if x * x + y * y > OUTER_RADIUS * OUTER_RADIUS {
                continue;
            }
            if let Some(index) = slice_at(&pie, (-y).atan2(x)) {
                per_slice[index].push((x, y));
            }
        }
    }

    let labels = overlay
        .map(|o| {
            let disc = DrawArea {
                left: -OUTER_RADIUS,
                right: OUTER_RADIUS,
                top: -OUTER_RADIUS,
                bottom: OUTER_RADIUS,
            };
            overlay_labels(values, disc, OUTER_RADIUS, o.margin * OUTER_RADIUS)
        })
        .unwrap_or_default();
    let cell_w = 2.0 * half_w / area.width as f64;

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-half_w, half_w])
        .y_bounds([-half_h, half_h])
        .paint(move |ctx| {
            for (index, coords) in per_slice.iter().enumerate() {
                ctx.draw(&Points {
                    coords,
                    color: slice_color(colors, index),
                });
            }
            if labels.is_empty() {
                return;
            }
            ctx.layer();
            for label in &labels {
                let shift = label.text.chars().count() as f64 * cell_w / 2.0;
                ctx.print(
                    label.x - shift,
                    -label.y,
                    Span::styled(
                        label.text.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        })
        .render(area, buf);
}
