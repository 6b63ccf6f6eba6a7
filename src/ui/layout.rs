use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::Tab;

pub const TAB_DIVIDER: &str = " │ ";

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    UiAreas {
        size,
        tab_bar: vertical[0],
        content: vertical[1],
        status_line: vertical[2],
        command_line: vertical[3],
    }
}

pub fn tab_label(tab: Tab) -> String {
    format!("{}:{}", tab.shortcut(), tab.title())
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Tab whose title sits under (`col`, `row`) in a bordered tab bar.
///
/// Mirrors the `Tabs` widget layout: one cell of padding either side of
/// each title and the divider between titles.
pub fn tab_at(tab_bar: Rect, col: u16, row: u16) -> Option<Tab> {
    let inner = rect_inner(tab_bar);
    if !rect_contains(inner, col, row) {
        return None;
    }
    let divider = TAB_DIVIDER.chars().count() as u16;
    let mut x = inner.x;
    for tab in Tab::ALL {
        let width = tab_label(tab).chars().count() as u16 + 2;
        if col >= x && col < x.saturating_add(width) {
            return Some(tab);
        }
        x = x.saturating_add(width + divider);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> Rect {
        areas(Rect::new(0, 0, 100, 30)).tab_bar
    }

    #[test]
    fn test_areas_stack_vertically() {
        let a = areas(Rect::new(0, 0, 100, 30));
        assert_eq!(a.tab_bar.height, 3);
        assert_eq!(a.content.height, 25);
        assert_eq!(a.status_line.y, 28);
        assert_eq!(a.command_line.y, 29);
    }

    #[test]
    fn test_tab_hit_testing() {
        // " 1:Overview " spans columns 1..13, then " │ ", then " 2:Complaints " at 16.
        assert_eq!(tab_at(bar(), 1, 1), Some(Tab::Overview));
        assert_eq!(tab_at(bar(), 12, 1), Some(Tab::Overview));
        assert_eq!(tab_at(bar(), 14, 1), None);
        assert_eq!(tab_at(bar(), 16, 1), Some(Tab::Complaints));
        assert_eq!(tab_at(bar(), 40, 1), Some(Tab::Suppliers));
        assert_eq!(tab_at(bar(), 50, 1), Some(Tab::Performance));
        assert_eq!(tab_at(bar(), 90, 1), None);
    }

    #[test]
    fn test_border_is_not_a_tab() {
        assert_eq!(tab_at(bar(), 0, 1), None);
        assert_eq!(tab_at(bar(), 5, 0), None);
        assert_eq!(tab_at(bar(), 5, 2), None);
    }
}
