//! Tab controller
//!
//! Owns the only mutable view state: which tab is active and what the content
//! region currently shows. Selecting a tab commits the new fragment right away
//! and tears down charts bound to the old one; [`TabController::run_deferred`]
//! then builds the charts of whatever content is current. The event loop calls
//! it after every input event and before painting.

mod tab_bar;

pub use tab_bar::TabBar;

use tracing::{debug, info, warn};

use crate::chart::{ChartBackend, PercentOverlay};
use crate::content::{self, ContentRegion, DeferredQueue};
use crate::core::Tab;
use crate::data::Registry;

/// Outcome of draining the deferred queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeferredRun {
    pub drawn: usize,
    /// Jobs whose canvas was replaced before they ran
    pub skipped: usize,
    pub failed: usize,
}

pub struct TabController<B: ChartBackend> {
    tabs: TabBar,
    content: ContentRegion,
    queue: DeferredQueue,
    backend: B,
    registry: Registry,
    overlay: PercentOverlay,
}

impl<B: ChartBackend> TabController<B> {
    /// Controller with `initial` marked active and its content rendered.
    /// Charts of the initial tab are pending until [`Self::run_deferred`].
    pub fn new(registry: Registry, backend: B, overlay: PercentOverlay, initial: Tab) -> Self {
        let mut controller = Self {
            tabs: TabBar::new(initial),
            content: ContentRegion::new(),
            queue: DeferredQueue::new(),
            backend,
            registry,
            overlay,
        };
        controller.select_tab(initial);
        controller
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.select(tab);
        let replaced = content::render(tab, &self.registry, &mut self.content, &mut self.queue);
        for handle in &replaced.detached {
            self.backend.destroy(*handle);
        }
        info!(
            tab = %tab,
            generation = replaced.generation,
            torn_down = replaced.detached.len(),
            "tab selected"
        );
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab().next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab().prev());
    }

    /// Build every pending chart whose canvas is still part of the live content.
    pub fn run_deferred(&mut self) -> DeferredRun {
        let mut run = DeferredRun::default();
        for job in self.queue.drain() {
            if !self.content.is_live(job.generation, job.canvas) {
                debug!(
                    canvas = job.canvas.as_str(),
                    generation = job.generation,
                    current = self.content.generation(),
                    "skipping superseded chart"
                );
                run.skipped += 1;
                continue;
            }
            match job.request.build(&self.registry.palette, self.overlay) {
                Ok(spec) => {
                    debug!(canvas = job.canvas.as_str(), kind = spec.kind.name(), "drawing chart");
                    let handle = self.backend.draw(job.canvas, spec);
                    self.content.bind(handle);
                    run.drawn += 1;
                }
                Err(err) => {
                    warn!(canvas = job.canvas.as_str(), error = %err, "chart not drawn");
                    run.failed += 1;
                }
            }
        }
        run
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn tab_bar(&self) -> &TabBar {
        &self.tabs
    }

    pub fn content(&self) -> &ContentRegion {
        &self.content
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
