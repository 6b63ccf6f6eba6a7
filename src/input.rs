//! Terminal input handling

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::core::{Action, Tab};
use crate::ui::layout;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.apply_action(Action::CloseOverlay);
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => {
            let action = normal_mode_action(key);
            app.apply_action(action);
        }
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn normal_mode_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Char(':'), _) => Action::OpenCommand,
        (KeyCode::Char('y'), _) => Action::Yank,
        (KeyCode::Tab | KeyCode::Right | KeyCode::Char(']') | KeyCode::Char('l'), _) => {
            Action::NextTab
        }
        (KeyCode::BackTab | KeyCode::Left | KeyCode::Char('[') | KeyCode::Char('h'), _) => {
            Action::PrevTab
        }
        (KeyCode::Char(ch), _) => match Tab::from_shortcut(ch) {
            Some(tab) => Action::SelectTab(tab),
            None => Action::None,
        },
        _ => Action::None,
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let areas = layout::areas(size);
    let over_tab_bar = layout::rect_contains(areas.tab_bar, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(tab) = layout::tab_at(areas.tab_bar, mouse.column, mouse.row) {
                app.apply_action(Action::SelectTab(tab));
            }
        }
        MouseEventKind::ScrollUp if over_tab_bar => app.apply_action(Action::PrevTab),
        MouseEventKind::ScrollDown if over_tab_bar => app.apply_action(Action::NextTab),
        _ => {}
    }
}
