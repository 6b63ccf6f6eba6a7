//! Active indicators of the tab selector controls

use crate::core::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    active: [bool; Tab::ALL.len()],
}

impl TabBar {
    pub fn new(initial: Tab) -> Self {
        let mut bar = Self {
            active: [false; Tab::ALL.len()],
        };
        bar.select(initial);
        bar
    }

    /// Clear every indicator, then set `tab`'s
    pub fn select(&mut self, tab: Tab) {
        self.active = [false; Tab::ALL.len()];
        self.active[tab.index()] = true;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active[tab.index()]
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|flag| **flag).count()
    }

    pub fn active(&self) -> Tab {
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| self.is_active(*tab))
            .unwrap_or_default()
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}
