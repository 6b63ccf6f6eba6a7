use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::core::command_hint;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    tabs::draw_tab_bar(f, areas.tab_bar, app);
    tabs::draw_content(f, areas.content, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let board = app.controller.backend();
    let mut spans = vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_tab().title())),
        Span::styled("Charts ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", board.len())),
        Span::styled("Switches ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.ctx.activations)),
    ];
    let pending = app.controller.pending();
    if pending > 0 {
        spans.push(Span::styled("Pending ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{pending}  ")));
    }
    if let Some(last) = app.command.last.as_ref() {
        spans.push(Span::styled("Last ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(":{last}")));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("tab <name> | next | prev | yank | help | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {hint_text}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("1-4", key),
        Span::styled(" tab  ", text),
        Span::styled("Tab", key),
        Span::styled(" next  ", text),
        Span::styled(":", key),
        Span::styled(" command  ", text),
        Span::styled("y", key),
        Span::styled(" yank  ", text),
        Span::styled("?", key),
        Span::styled(" help  ", text),
        Span::styled("q", key),
        Span::styled(" quit", text),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 60, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-4        Jump to tab"),
        Line::from("  Tab / l    Next tab"),
        Line::from("  S-Tab / h  Previous tab"),
        Line::from("  [ / ]      Previous / next tab"),
        Line::from("  Mouse      Click a tab, scroll to cycle"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  :          Command line"),
        Line::from("  y          Copy chart config as JSON"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Commands:"),
        Line::from("  :tab perf   :suppliers   :next   :yank"),
        Line::from(""),
        Line::from(format!("Active tab: {}", app.active_tab().title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
