//! The single visual target driven by the transition controller.

use heapless::Vec as HeaplessVec;

use crate::motion::SurfaceTransform;

/// A container whose offset and opacity can be written. It holds no logic.
pub trait RenderSurface {
    fn apply(&mut self, transform: SurfaceTransform);
}

/// Keeps the most recent writes. Oldest entries are dropped once full.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface<const N: usize> {
    current: SurfaceTransform,
    writes: u32,
    history: HeaplessVec<SurfaceTransform, N>,
}

impl<const N: usize> RecordingSurface<N> {
    pub fn new() -> Self {
        Self {
            current: SurfaceTransform::NEUTRAL,
            writes: 0,
            history: HeaplessVec::new(),
        }
    }

    pub fn current(&self) -> SurfaceTransform {
        self.current
    }

    /// Total number of writes, including those no longer in `history`.
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    pub fn history(&self) -> &[SurfaceTransform] {
        &self.history
    }
}

impl<const N: usize> RenderSurface for RecordingSurface<N> {
    fn apply(&mut self, transform: SurfaceTransform) {
        self.current = transform;
        self.writes = self.writes.saturating_add(1);
        if self.history.is_full() && !self.history.is_empty() {
            self.history.remove(0);
        }
        let _ = self.history.push(transform);
    }
}
