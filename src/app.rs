use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::chart::{ChartBoard, ChartSpec, PercentOverlay};
use crate::config::Config;
use crate::controller::{DeferredRun, TabController};
use crate::core::{parse_command, Action, Command, Context, NotifyLevel, Tab};
use crate::data::Registry;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Serialize)]
struct YankedChart<'a> {
    canvas: &'static str,
    #[serde(flatten)]
    spec: &'a ChartSpec,
}

#[derive(Serialize)]
struct YankPayload<'a> {
    tab: &'static str,
    charts: Vec<YankedChart<'a>>,
}

pub struct App {
    pub controller: TabController<ChartBoard>,
    pub ctx: Context,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub help_open: bool,
    pub should_quit: bool,
    status: Option<StatusMessage>,
    yank_request: Option<String>,
}

impl App {
    pub fn new(initial: Tab, overlay: PercentOverlay) -> Self {
        Self::with_registry(Registry::builtin(), initial, overlay)
    }

    pub fn with_registry(registry: Registry, initial: Tab, overlay: PercentOverlay) -> Self {
        if let Err(err) = registry.validate() {
            warn!(error = %err, "builtin dataset failed validation");
        }
        Self {
            controller: TabController::new(registry, ChartBoard::new(), overlay, initial),
            ctx: Context::new(),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            help_open: false,
            should_quit: false,
            status: None,
            yank_request: None,
        }
    }

    /// App from config; an unusable palette falls back to the default with a warning.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Registry::builtin();
        let palette_error = match config.palette() {
            Ok(palette) => {
                registry.palette = palette;
                None
            }
            Err(err) => Some(err),
        };
        let mut app = Self::with_registry(registry, config.initial_tab, config.overlay());
        if let Some(err) = palette_error {
            warn!(error = %err, "config palette rejected, using default colors");
            app.set_status(format!("Palette: {err}"), StatusLevel::Warn);
        }
        app
    }

    pub fn active_tab(&self) -> Tab {
        self.controller.active_tab()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.controller.select_tab(tab);
        self.ctx.activations += 1;
    }

    /// Build charts scheduled by the last selection; call before every paint.
    pub fn run_deferred(&mut self) -> DeferredRun {
        let run = self.controller.run_deferred();
        if run.failed > 0 {
            self.set_status(
                format!("{} chart(s) could not be drawn", run.failed),
                StatusLevel::Error,
            );
        }
        run
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::NextTab => self.select_tab(self.active_tab().next()),
            Action::PrevTab => self.select_tab(self.active_tab().prev()),
            Action::Yank => self.yank(),
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::OpenCommand => self.enter_command(),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::CloseOverlay => self.help_open = false,
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        debug!(command = %input, "command entered");
        self.command.last = Some(input.clone());
        let action = match parse_command(&input) {
            Command::Tab(tab) => Action::SelectTab(tab),
            Command::Next => Action::NextTab,
            Command::Prev => Action::PrevTab,
            Command::Yank => Action::Yank,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(raw) => {
                Action::Notify(format!("Unknown command: {raw}"), NotifyLevel::Warn)
            }
        };
        self.apply_action(action);
    }

    /// Pretty JSON of every chart drawn on the active tab, `None` when there is none.
    pub fn yank_payload(&self) -> Option<String> {
        let charts: Vec<YankedChart> = self
            .controller
            .backend()
            .charts()
            .iter()
            .map(|chart| YankedChart {
                canvas: chart.canvas.as_str(),
                spec: &chart.spec,
            })
            .collect();
        if charts.is_empty() {
            return None;
        }
        let payload = YankPayload {
            tab: self.active_tab().key(),
            charts,
        };
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => Some(json),
            Err(err) => {
                warn!(error = %err, "serialize chart config");
                None
            }
        }
    }

    fn yank(&mut self) {
        match self.yank_payload() {
            Some(json) => {
                self.ctx.set_clipboard(json.clone());
                self.yank_request = Some(json);
            }
            None => self.set_status("No charts on this tab", StatusLevel::Warn),
        }
    }

    /// Text waiting to be pushed to the system clipboard
    pub fn take_yank_request(&mut self) -> Option<String> {
        self.yank_request.take()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(tab: Tab) -> App {
        let mut app = App::new(tab, PercentOverlay::default());
        app.run_deferred();
        app
    }

    #[test]
    fn test_command_selects_tab() {
        let mut app = app(Tab::Overview);
        app.enter_command();
        app.command.input.push_str("suppliers");
        app.apply_command();
        assert_eq!(app.active_tab(), Tab::Suppliers);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.command.last.as_deref(), Some("suppliers"));
        assert_eq!(app.ctx.activations, 1);
    }

    #[test]
    fn test_unknown_command_warns() {
        let mut app = app(Tab::Overview);
        app.command.input.push_str("bogus");
        app.apply_command();
        let (text, level) = app.status_text().unwrap();
        assert!(text.contains("bogus"));
        assert_eq!(level, StatusLevel::Warn);
        assert_eq!(app.active_tab(), Tab::Overview);
    }

    #[test]
    fn test_yank_on_overview_warns() {
        let mut app = app(Tab::Overview);
        app.apply_action(Action::Yank);
        assert!(app.take_yank_request().is_none());
        assert!(app.ctx.get_clipboard().is_none());
        assert_eq!(app.status_text().map(|(_, l)| l), Some(StatusLevel::Warn));
    }

    #[test]
    fn test_yank_serializes_active_charts() {
        let mut app = app(Tab::Performance);
        app.apply_action(Action::Yank);
        let json = app.take_yank_request().unwrap();
        assert_eq!(app.ctx.get_clipboard(), Some(json.as_str()));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tab"], "performance");
        let charts = value["charts"].as_array().unwrap();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0]["canvas"], "shiftChart");
        assert_eq!(charts[0]["kind"]["type"], "bar");
        assert_eq!(charts[1]["kind"]["type"], "line");
        assert_eq!(charts[1]["series"][1]["color"], "#e74c3c");
    }

    #[test]
    fn test_config_palette_colors_charts() {
        let config = crate::config::parse(
            r##"
            initial_tab = "suppliers"
            palette = ["#112233"]
            "##,
        )
        .unwrap();
        let mut app = App::from_config(&config);
        app.run_deferred();
        let chart = &app.controller.backend().charts()[0];
        assert_eq!(chart.spec.series[0].color.to_string(), "#112233");
        assert!(app.status_text().is_none());
    }

    #[test]
    fn test_bad_config_palette_falls_back() {
        let config = crate::config::parse(r#"palette = ["blue"]"#).unwrap();
        let app = App::from_config(&config);
        assert_eq!(app.controller.registry().palette, Registry::builtin().palette);
        let (text, level) = app.status_text().unwrap();
        assert!(text.contains("blue"));
        assert_eq!(level, StatusLevel::Warn);
    }

    #[test]
    fn test_quit_and_help_actions() {
        let mut app = app(Tab::Overview);
        app.apply_action(Action::ToggleHelp);
        assert!(app.help_open);
        app.apply_action(Action::CloseOverlay);
        assert!(!app.help_open);
        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }
}
