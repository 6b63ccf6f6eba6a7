//! The single content region whose children are replaced on every tab change

use crate::chart::{CanvasId, ChartHandle};

use super::fragment::Fragment;

#[derive(Debug, Default)]
pub struct ContentRegion {
    generation: u64,
    fragment: Fragment,
    bound: Vec<ChartHandle>,
}

/// Result of replacing the region's children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub generation: u64,
    /// Charts that were attached to the old children and must be torn down
    pub detached: Vec<ChartHandle>,
}

impl ContentRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, fragment: Fragment) -> Replaced {
        self.generation += 1;
        self.fragment = fragment;
        Replaced {
            generation: self.generation,
            detached: std::mem::take(&mut self.bound),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// A canvas is live when it belongs to the current children and the
    /// caller was scheduled against them.
    pub fn is_live(&self, generation: u64, canvas: CanvasId) -> bool {
        generation == self.generation && self.fragment.has_canvas(canvas)
    }

    pub fn bind(&mut self, handle: ChartHandle) {
        self.bound.push(handle);
    }

    pub fn bound(&self) -> &[ChartHandle] {
        &self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fragment::{self, COMPLAINTS_CANVAS, SHIFT_CANVAS};

    #[test]
    fn test_replace_bumps_generation_and_detaches() {
        let mut region = ContentRegion::new();
        assert!(region.fragment().is_empty());

        let first = region.replace(fragment::complaints());
        assert_eq!(first.generation, 1);
        assert!(first.detached.is_empty());
        region.bind(ChartHandle(7));

        let second = region.replace(fragment::performance());
        assert_eq!(second.generation, 2);
        assert_eq!(second.detached, vec![ChartHandle(7)]);
        assert!(region.bound().is_empty());
    }

    #[test]
    fn test_liveness_requires_current_generation_and_canvas() {
        let mut region = ContentRegion::new();
        let gen = region.replace(fragment::complaints()).generation;
        assert!(region.is_live(gen, COMPLAINTS_CANVAS));
        assert!(!region.is_live(gen, SHIFT_CANVAS));

        let next = region.replace(fragment::complaints()).generation;
        assert!(!region.is_live(gen, COMPLAINTS_CANVAS));
        assert!(region.is_live(next, COMPLAINTS_CANVAS));
    }
}
