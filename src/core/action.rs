//! Actions that input handlers return to the app

use super::Tab;

/// State changes requested by key, mouse and command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Activate a tab
    SelectTab(Tab),

    /// Cycle to the next / previous tab
    NextTab,
    PrevTab,

    /// Copy the active charts' configuration
    Yank,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open the : command line
    OpenCommand,

    /// Toggle help popup
    ToggleHelp,

    /// Close current overlay/popup
    CloseOverlay,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
