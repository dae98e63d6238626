//! Touch gesture recognizer.
//!
//! A session lives from pointer-down to pointer-up. While undecided it waits
//! for the horizontal intent threshold, then locks once into either a scroll
//! (ignored for the rest of the session) or a drag (live follow). The release
//! is classified as a committed swipe only when it is long enough, clearly
//! horizontal and fast.


use log::debug;

use crate::{
    catalog::{PageId, PageRegistry},
    hooks::HostHooks,
    input::{PointerEvent, PointerKind},
    intent::Direction,
    motion::SurfaceTransform,
    nav::TransitionController,
    surface::RenderSurface,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureConfig {
    /// Horizontal travel before a session decides between scroll and drag.
    pub intent_threshold_px: u16,
    /// Minimum horizontal travel for a committed swipe.
    pub commit_distance_px: u16,
    /// Horizontal travel must be at least this percentage of vertical travel.
    pub dominance_ratio_pct: u16,
    /// Swipes taking this long or longer never commit.
    pub max_duration_ms: u16,
    /// Share of the raw horizontal delta the surface follows during a drag.
    pub drag_damping_pct: u8,
    /// Opacity lost per 100 px of horizontal drag.
    pub fade_per_100px_pct: u8,
    /// Drag feedback never fades below this opacity.
    pub min_drag_opacity_pct: u8,
    /// Play a snap-back when a drag is released toward a missing page. A
    /// release that still carries live drag feedback always settles.
    pub snap_back_at_edges: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            intent_threshold_px: 10,
            commit_distance_px: 55,
            dominance_ratio_pct: 150,
            max_duration_ms: 500,
            drag_damping_pct: 30,
            fade_per_100px_pct: 25,
            min_drag_opacity_pct: 40,
            snap_back_at_edges: true,
        }
    }
}

impl GestureConfig {
    pub const fn with_intent_threshold_px(mut self, intent_threshold_px: u16) -> Self {
        self.intent_threshold_px = intent_threshold_px;
        self
    }

    pub const fn with_commit_distance_px(mut self, commit_distance_px: u16) -> Self {
        self.commit_distance_px = commit_distance_px;
        self
    }

    pub const fn with_dominance_ratio_pct(mut self, dominance_ratio_pct: u16) -> Self {
        self.dominance_ratio_pct = dominance_ratio_pct;
        self
    }

    pub const fn with_max_duration_ms(mut self, max_duration_ms: u16) -> Self {
        self.max_duration_ms = max_duration_ms;
        self
    }

    pub const fn with_drag_feedback(
        mut self,
        drag_damping_pct: u8,
        fade_per_100px_pct: u8,
        min_drag_opacity_pct: u8,
    ) -> Self {
        self.drag_damping_pct = drag_damping_pct;
        self.fade_per_100px_pct = fade_per_100px_pct;
        self.min_drag_opacity_pct = min_drag_opacity_pct;
        self
    }

    pub const fn with_snap_back_at_edges(mut self, snap_back_at_edges: bool) -> Self {
        self.snap_back_at_edges = snap_back_at_edges;
        self
    }

    /// Surface transform for a raw horizontal drag delta.
    pub fn drag_transform(&self, dx: i32) -> SurfaceTransform {
        let offset = dx.saturating_mul(self.drag_damping_pct as i32) / 100;
        let fade = (dx.unsigned_abs() as u64 * self.fade_per_100px_pct as u64 / 100).min(100);
        let opacity = (100 - fade as u8).max(self.min_drag_opacity_pct.min(100));
        SurfaceTransform::new(offset, opacity)
    }

    fn is_committed_swipe(&self, dx: i32, dy: i32, elapsed_ms: u64) -> bool {
        let horizontal = dx.unsigned_abs() as u64;
        let vertical = dy.unsigned_abs() as u64;

        horizontal >= self.commit_distance_px as u64
            && horizontal * 100 >= vertical * self.dominance_ratio_pct as u64
            && elapsed_ms < self.max_duration_ms as u64
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GesturePhase {
    Undecided,
    Scrolling,
    Dragging,
    Blocked,
}

/// One touch interaction, from pointer-down to release.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureSession {
    pub origin_x: i32,
    pub origin_y: i32,
    pub origin_ms: u64,
    pub phase: GesturePhase,
    pub live_offset: i32,
}

/// What the recognizer did with one pointer event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GestureOutcome {
    Ignored,
    Tracking,
    Navigated { target: PageId, direction: Direction },
    SnappedBack,
}

#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl GestureRecognizer {
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn handle<R, S, H>(
        &mut self,
        event: PointerEvent,
        nav: &mut TransitionController<R, S, H>,
    ) -> GestureOutcome
    where
        R: PageRegistry,
        S: RenderSurface,
        H: HostHooks,
    {
        match event.kind {
            PointerKind::Down => self.on_down(event, nav),
            PointerKind::Move => self.on_move(event, nav),
            PointerKind::Up => self.on_release(event, nav, true),
            PointerKind::Cancel => self.on_release(event, nav, false),
        }
    }

    fn on_down<R, S, H>(
        &mut self,
        event: PointerEvent,
        nav: &mut TransitionController<R, S, H>,
    ) -> GestureOutcome
    where
        R: PageRegistry,
        S: RenderSurface,
        H: HostHooks,
    {
        // A second finger or a lost release: settle the old drag first.
        if let Some(previous) = self.session.take()
            && previous.phase == GesturePhase::Dragging
            && previous.live_offset != 0
        {
            debug!("gesture: new touch over live drag offset={}", previous.live_offset);
            nav.snap_back(event.time_ms);
        }

        let in_flight = nav.is_in_flight();
        let blocked = event.target.blocks_gesture() || in_flight;
        self.session = Some(GestureSession {
            origin_x: event.x,
            origin_y: event.y,
            origin_ms: event.time_ms,
            phase: if blocked {
                GesturePhase::Blocked
            } else {
                GesturePhase::Undecided
            },
            live_offset: 0,
        });

        if blocked {
            debug!(
                "gesture: blocked target={:?} in_flight={}",
                event.target, in_flight
            );
            GestureOutcome::Ignored
        } else {
            GestureOutcome::Tracking
        }
    }

    fn on_move<R, S, H>(
        &mut self,
        event: PointerEvent,
        nav: &mut TransitionController<R, S, H>,
    ) -> GestureOutcome
    where
        R: PageRegistry,
        S: RenderSurface,
        H: HostHooks,
    {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        if nav.is_in_flight() {
            return GestureOutcome::Ignored;
        }

        let dx = event.x - session.origin_x;
        let dy = event.y - session.origin_y;

        match session.phase {
            GesturePhase::Blocked | GesturePhase::Scrolling => return GestureOutcome::Ignored,
            GesturePhase::Undecided => {
                if dx.unsigned_abs() < self.config.intent_threshold_px as u32 {
                    return GestureOutcome::Tracking;
                }
                if dy.unsigned_abs() > dx.unsigned_abs() {
                    session.phase = GesturePhase::Scrolling;
                    debug!("gesture: scroll dx={} dy={}", dx, dy);
                    return GestureOutcome::Ignored;
                }
                session.phase = GesturePhase::Dragging;
                debug!("gesture: drag dx={} dy={}", dx, dy);
            }
            GesturePhase::Dragging => {}
        }

        let direction = swipe_direction(dx);
        let has_destination = nav
            .registry()
            .neighbor(nav.active_page(), direction)
            .is_some();

        if has_destination {
            let transform = self.config.drag_transform(dx);
            if nav.drag_follow(transform) {
                session.live_offset = transform.offset_px;
            }
        } else if session.live_offset != 0 {
            // Crossed back over the origin toward a missing page.
            nav.drag_follow(SurfaceTransform::NEUTRAL);
            session.live_offset = 0;
        }

        GestureOutcome::Tracking
    }

    fn on_release<R, S, H>(
        &mut self,
        event: PointerEvent,
        nav: &mut TransitionController<R, S, H>,
        may_commit: bool,
    ) -> GestureOutcome
    where
        R: PageRegistry,
        S: RenderSurface,
        H: HostHooks,
    {
        let Some(session) = self.session.take() else {
            return GestureOutcome::Ignored;
        };

        let dragging = match session.phase {
            GesturePhase::Blocked | GesturePhase::Scrolling => return GestureOutcome::Ignored,
            GesturePhase::Undecided => false,
            GesturePhase::Dragging => true,
        };

        let dx = event.x - session.origin_x;
        let dy = event.y - session.origin_y;
        let elapsed_ms = event.time_ms.saturating_sub(session.origin_ms);
        let committed = may_commit && self.config.is_committed_swipe(dx, dy, elapsed_ms);

        debug!(
            "gesture: release dx={} dy={} elapsed_ms={} committed={}",
            dx, dy, elapsed_ms, committed
        );

        if committed {
            let direction = swipe_direction(dx);
            match nav.registry().neighbor(nav.active_page(), direction) {
                Some(target) => {
                    if nav
                        .request_gesture_navigation(target, direction, event.time_ms)
                        .accepted()
                    {
                        return GestureOutcome::Navigated { target, direction };
                    }
                }
                None => {
                    debug!("gesture: no page dir={}", direction.as_str());
                    if !self.config.snap_back_at_edges && session.live_offset == 0 {
                        return GestureOutcome::Ignored;
                    }
                }
            }
        }

        if dragging && nav.snap_back(event.time_ms) {
            return GestureOutcome::SnappedBack;
        }

        GestureOutcome::Ignored
    }
}

/// Swiping left (negative delta) moves forward through the catalog.
fn swipe_direction(dx: i32) -> Direction {
    if dx < 0 {
        Direction::Forward
    } else {
        Direction::Backward
    }
}
