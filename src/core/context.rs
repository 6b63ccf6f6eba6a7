//! Shared context passed between input handling and rendering

/// Session-level state that outlives a single tab
#[derive(Debug, Default)]
pub struct Context {
    /// In-app clipboard, kept even when the system clipboard is unavailable
    pub clipboard: Option<String>,

    /// Number of tab activations this session
    pub activations: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }

    /// Get clipboard content
    pub fn get_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}
