//! Chart widgets for drawn chart specs

mod pie;

pub use pie::PieChart;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;

use crate::chart::{ChartKind, ChartSpec};

/// Render a chart spec into `area`, picking the widget by chart kind
pub fn render_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            spec.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

    match &spec.kind {
        ChartKind::Pie { .. } => f.render_widget(PieChart::new(spec).block(block), area),
        ChartKind::Bar => render_bar(f, area, spec, block),
        ChartKind::Line => render_line(f, area, spec, block),
    }
}

fn legend(spec: &ChartSpec) -> Line<'static> {
    let mut spans = Vec::with_capacity(spec.series.len() * 2);
    for series in &spec.series {
        spans.push(Span::styled("■ ", Style::default().fg(series.color.into())));
        spans.push(Span::raw(format!("{}  ", series.label)));
    }
    Line::from(spans)
}

/// Bars only take integers; keep one decimal.
fn scaled(value: f64) -> u64 {
    (value.max(0.0) * 10.0).round() as u64
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn render_bar(f: &mut Frame, area: Rect, spec: &ChartSpec, block: Block) {
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    f.render_widget(Paragraph::new(legend(spec)), chunks[0]);

    let groups = spec.labels.len().max(1) as u16;
    let per_bar = spec.series.len().max(1) as u16;
    let group_gap = 3;
    let per_group = chunks[1].width.saturating_sub(group_gap * groups) / groups;
    let bar_width = (per_group.saturating_sub(per_bar - 1) / per_bar).clamp(1, 12);

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(1)
        .group_gap(group_gap)
        .max(scaled(spec.max_value()).max(1));

    for (idx, label) in spec.labels.iter().enumerate() {
        let bars: Vec<Bar> = spec
            .series
            .iter()
            .map(|series| {
                let value = series.values.get(idx).copied().unwrap_or(0.0);
                let color: Color = series.color.into();
                Bar::default()
                    .value(scaled(value))
                    .text_value(format_value(value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.as_str()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, chunks[1]);
}

fn render_line(f: &mut Frame, area: Rect, spec: &ChartSpec, block: Block) {
    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|series| {
            series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color.into()))
                .data(data)
        })
        .collect();

    let x_max = spec.labels.len().saturating_sub(1).max(1) as f64;
    let y_max = (spec.max_value() * 1.1).ceil().max(1.0);
    let axis_style = Style::default().fg(Color::DarkGray);
    let x_labels: Vec<Span> = spec.labels.iter().map(|l| Span::raw(l.clone())).collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format_value(y_max / 2.0)),
        Span::raw(format_value(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::chart::{bar_chart, line_chart, SeriesKey};
    use crate::data::{Palette, Registry};

    fn rendered(spec: &ChartSpec) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_chart(f, f.size(), spec)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_scaled_keeps_one_decimal() {
        assert_eq!(scaled(12.0), 120);
        assert_eq!(scaled(0.25), 3);
        assert_eq!(scaled(-4.0), 0);
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn test_bar_chart_renders_labels_and_legend() {
        let registry = Registry::builtin();
        let keys = SeriesKey::indexed(&["onTime", "defectRate"]);
        let spec = bar_chart("Shift Performance", &registry.shifts, &keys, &Palette::default())
            .unwrap();
        let text = rendered(&spec);
        assert!(text.contains("Shift Performance"));
        assert!(text.contains("onTime"));
        assert!(text.contains("defectRate"));
        assert!(text.contains("85"));
    }

    #[test]
    fn test_line_chart_renders_months() {
        let registry = Registry::builtin();
        let spec = line_chart("Monthly Trends", &registry.trends, &Palette::default()).unwrap();
        let text = rendered(&spec);
        assert!(text.contains("Monthly Trends"));
        assert!(text.contains("Jan"));
        assert!(text.contains("Apr"));
    }
}
