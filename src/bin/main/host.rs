use folio_core::{
    catalog::PageId, hooks::HostHooks, motion::SurfaceTransform, surface::RenderSurface,
};
use heapless::String as HeaplessString;
use log::{debug, trace};

const TRACK_CELLS: usize = 41;
const PX_PER_CELL: i32 = 4;
const TRACK_BYTES: usize = TRACK_CELLS + 16;

/// Terminal stand-in for the page container: draws the offset on a track.
#[derive(Debug, Default)]
pub(super) struct LogSurface {
    current: SurfaceTransform,
    writes: u32,
}

impl LogSurface {
    pub(super) fn writes(&self) -> u32 {
        self.writes
    }

    pub(super) fn current(&self) -> SurfaceTransform {
        self.current
    }
}

impl RenderSurface for LogSurface {
    fn apply(&mut self, transform: SurfaceTransform) {
        self.current = transform;
        self.writes = self.writes.saturating_add(1);
        trace!(
            "surface: {} offset={} opacity={}",
            track(transform).as_str(),
            transform.offset_px,
            transform.opacity_pct
        );
    }
}

fn track(transform: SurfaceTransform) -> HeaplessString<TRACK_BYTES> {
    let center = (TRACK_CELLS / 2) as i32;
    let marker = (center + transform.offset_px / PX_PER_CELL).clamp(0, TRACK_CELLS as i32 - 1);
    let glyph = match transform.opacity_pct {
        0..=24 => '.',
        25..=74 => 'o',
        _ => '#',
    };

    let mut out = HeaplessString::new();
    let _ = out.push('[');
    for cell in 0..TRACK_CELLS as i32 {
        let _ = out.push(if cell == marker {
            glyph
        } else if cell == center {
            '|'
        } else {
            ' '
        });
    }
    let _ = out.push(']');
    out
}

/// Stands in for the scroll-reveal registry and the document scroll position.
#[derive(Debug, Default)]
pub(super) struct RevealHooks {
    released: u32,
}

impl RevealHooks {
    pub(super) fn released(&self) -> u32 {
        self.released
    }
}

impl HostHooks for RevealHooks {
    fn release_effects(&mut self, page: PageId) {
        self.released = self.released.saturating_add(1);
        debug!("host: released reveal bindings page={page}");
    }

    fn reset_scroll(&mut self) {
        debug!("host: scroll reset to top");
    }
}
