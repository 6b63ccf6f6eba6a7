//! Tab bar and content region rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs as RataTabs, Wrap};
use ratatui::Frame;

use super::layout::{tab_label, TAB_DIVIDER};
use super::widgets;
use crate::app::App;
use crate::chart::CanvasId;
use crate::content::{InfoBox, Node, Tone};
use crate::core::Tab;

/// Draw the tab bar at the top
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let bar = app.controller.tab_bar();
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let label = tab_label(*tab);
            let (shortcut, title) = label.split_at(2);
            let title_style = if bar.is_active(*tab) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(shortcut.to_string(), Style::default().fg(Color::DarkGray)),
                Span::styled(title.to_string(), title_style),
            ])
        })
        .collect();

    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    "QC Dashboard",
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .select(app.active_tab().index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .divider(TAB_DIVIDER);

    f.render_widget(tabs, area);
}

/// Draw the current fragment of the content region
pub fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    let fragment = app.controller.content().fragment();
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            fragment.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let inner = card.inner(area);
    f.render_widget(card, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut constraints: Vec<Constraint> = fragment
        .nodes
        .iter()
        .map(|node| match node {
            Node::Paragraph(text) => Constraint::Length(wrapped_height(text, inner.width) + 1),
            Node::Heading(_) => Constraint::Length(1),
            Node::InfoGrid(boxes) => {
                let rows = boxes.iter().map(|b| b.items.len()).max().unwrap_or(0) as u16;
                Constraint::Length(rows + 2)
            }
            Node::Canvas(_) => Constraint::Min(6),
        })
        .collect();
    if fragment.canvases().next().is_none() {
        constraints.push(Constraint::Min(0));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (node, chunk) in fragment.nodes.iter().zip(chunks.iter()) {
        match node {
            Node::Paragraph(text) => {
                let paragraph = Paragraph::new(*text)
                    .style(Style::default().fg(Color::White))
                    .wrap(Wrap { trim: true });
                f.render_widget(paragraph, *chunk);
            }
            Node::Heading(text) => {
                let heading = Paragraph::new(Line::from(Span::styled(
                    *text,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                f.render_widget(heading, *chunk);
            }
            Node::InfoGrid(boxes) => draw_info_grid(f, *chunk, boxes),
            Node::Canvas(canvas) => draw_canvas(f, *chunk, app, *canvas),
        }
    }
}

fn draw_info_grid(f: &mut Frame, area: Rect, boxes: &[InfoBox]) {
    if boxes.is_empty() {
        return;
    }
    let share = 100 / boxes.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(share); boxes.len()])
        .split(area);

    for (info, chunk) in boxes.iter().zip(chunks.iter()) {
        let accent = match info.tone {
            Tone::Red => Color::LightRed,
            Tone::Yellow => Color::Yellow,
        };
        let lines: Vec<Line> = info
            .items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(" • ", Style::default().fg(accent)),
                    Span::raw(*item),
                ])
            })
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                info.heading,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        f.render_widget(paragraph, *chunk);
    }
}

fn draw_canvas(f: &mut Frame, area: Rect, app: &App, canvas: CanvasId) {
    match app.controller.backend().chart_on(canvas) {
        Some(chart) => widgets::render_chart(f, area, &chart.spec),
        None => {
            let placeholder = Paragraph::new(Span::styled(
                "Loading chart…",
                Style::default().fg(Color::DarkGray),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(placeholder, area);
        }
    }
}

fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let chars = text.chars().count();
    (chars.div_ceil(width)).max(1) as u16
}
