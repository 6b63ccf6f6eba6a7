use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use arboard::Clipboard;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};

use qcdash::app::{App, StatusLevel};
use qcdash::config::{self, Config};
use qcdash::core::Tab;
use qcdash::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "qcdash",
    version,
    about = "qcdash: a terminal quality-control dashboard"
)]
struct Args {
    /// Tab to open first (overview, complaints, suppliers, performance)
    #[arg(long)]
    tab: Option<Tab>,

    /// Config file (defaults to ~/.config/qcdash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the data dir)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = match args.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(tab) = args.tab {
        config.initial_tab = tab;
    }

    let log_error = match args.log_file.clone().or_else(|| config.log_path()) {
        Some(path) => logging::init(&path, &config.log_level).err(),
        None => None,
    };
    info!(tab = %config.initial_tab, "starting qcdash");

    let mut app = App::from_config(&config);
    if let Some(err) = config_error {
        warn!(error = %err, "config not loaded, using defaults");
        app.set_status(format!("Config: {err}"), StatusLevel::Warn);
    }
    if let Some(err) = log_error {
        app.set_status(format!("Logging disabled: {err:#}"), StatusLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        app.run_deferred();
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    let (width, height) = terminal::size()?;
                    input::handle_mouse(&mut app, mouse, Rect::new(0, 0, width, height));
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if let Some(text) = app.take_yank_request() {
            copy_to_clipboard(&mut app, text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.as_str()));
    match result {
        Ok(()) => app.set_status(
            format!("Copied {} chart config(s)", app.controller.backend().len()),
            StatusLevel::Info,
        ),
        Err(err) => {
            warn!(error = %err, "system clipboard unavailable");
            app.set_status("Clipboard not available, kept in app", StatusLevel::Warn);
        }
    }
}
