//! Command parser for the : command line

use super::Tab;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Tab(Tab),
    Next,
    Prev,

    // Actions
    Yank,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "tab" | "t" => match args.map(str::parse::<Tab>) {
            Some(Ok(tab)) => Command::Tab(tab),
            _ => Command::Unknown(input.to_string()),
        },
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "yank" | "y" | "copy" => Command::Yank,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => match other.parse::<Tab>() {
            Ok(tab) if args.is_none() => Command::Tab(tab),
            _ => Command::Unknown(input.to_string()),
        },
    }
}

/// One-line hint for the command being typed
pub fn command_hint(input: &str) -> Option<&'static str> {
    let cmd = input.trim().split(' ').next().unwrap_or("");
    if cmd.is_empty() {
        return None;
    }
    let candidates: [(&str, &'static str); 9] = [
        ("overview", "overview: key issues and root causes"),
        ("complaints", "complaints: complaint breakdown pie"),
        ("suppliers", "suppliers: supplier defect rate bars"),
        ("performance", "performance: shift bars and monthly trends"),
        ("next", "next: following tab"),
        ("prev", "prev: previous tab"),
        ("yank", "yank: copy chart config as JSON"),
        ("help", "help: key bindings"),
        ("quit", "quit: leave the dashboard"),
    ];
    let lower = cmd.to_lowercase();
    candidates
        .iter()
        .find(|(name, _)| name.starts_with(lower.as_str()))
        .map(|(_, hint)| *hint)
}
