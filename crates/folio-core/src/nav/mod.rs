//! Transition controller: the single owner of the active page.
//!
//! Every page change, whatever triggered it, runs the same sequence:
//!
//! 1. **Exiting**: the surface slides off in the travel direction.
//! 2. **Commit** (synchronous, at the end of the exit): the old page's effects
//!    are released, the surface is pre-positioned at the entry offset, the
//!    active page changes and the entry offset is parked in a one-shot slot.
//! 3. **Entering**: the first render after the commit consumes the slot
//!    ([`TransitionController::on_render`]) and the surface eases back to
//!    neutral.
//!
//! While any of this runs the controller is in flight and rejects every other
//! request.

#[cfg(test)]
mod tests;

use log::{debug, info, warn};

use crate::{
    catalog::{CatalogError, PageId, PageRegistry},
    hooks::HostHooks,
    intent::{Direction, resolve_direction},
    motion::{Easing, SurfaceTransform, Tween},
    surface::RenderSurface,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionConfig {
    pub exit_ms: u16,
    pub enter_ms: u16,
    pub snap_back_ms: u16,
    /// Distance the leaving content travels before the commit.
    pub exit_travel_px: i32,
    /// Distance the entering content starts away from neutral.
    pub enter_travel_px: i32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            exit_ms: 250,
            enter_ms: 400,
            snap_back_ms: 450,
            exit_travel_px: 60,
            enter_travel_px: 60,
        }
    }
}

impl TransitionConfig {
    pub const fn with_exit_ms(mut self, exit_ms: u16) -> Self {
        self.exit_ms = exit_ms;
        self
    }

    pub const fn with_enter_ms(mut self, enter_ms: u16) -> Self {
        self.enter_ms = enter_ms;
        self
    }

    pub const fn with_snap_back_ms(mut self, snap_back_ms: u16) -> Self {
        self.snap_back_ms = snap_back_ms;
        self
    }

    pub const fn with_travel_px(mut self, exit_travel_px: i32, enter_travel_px: i32) -> Self {
        self.exit_travel_px = exit_travel_px;
        self.enter_travel_px = enter_travel_px;
        self
    }
}

/// Which control asked for a page change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationSource {
    TabBar,
    NavMenu,
    ContentLink,
    Gesture,
}

impl NavigationSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TabBar => "tab",
            Self::NavMenu => "menu",
            Self::ContentLink => "link",
            Self::Gesture => "gesture",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationOutcome {
    /// Exit animation scheduled.
    Started,
    /// No surface attached: the page changed without animation.
    CommittedInstantly,
    AlreadyActive,
    /// Another transition is in flight.
    Busy,
    UnknownPage,
}

impl NavigationOutcome {
    pub const fn accepted(self) -> bool {
        matches!(self, Self::Started | Self::CommittedInstantly)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavPhase {
    Idle,
    Exiting,
    Entering,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NavState {
    Idle,
    Exiting {
        target: PageId,
        direction: Direction,
        source: NavigationSource,
        tween: Tween,
    },
    /// `tween` stays `None` until the first render consumes the entry slot.
    Entering {
        direction: Direction,
        tween: Option<Tween>,
    },
}

/// Point-in-time view of the controller, mostly for hosts and tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavSnapshot {
    pub active: PageId,
    pub phase: NavPhase,
    pub direction: Option<Direction>,
    pub in_flight: bool,
    pub transform: SurfaceTransform,
}

pub struct TransitionController<R, S, H>
where
    R: PageRegistry,
    S: RenderSurface,
    H: HostHooks,
{
    registry: R,
    hooks: H,
    surface: Option<S>,
    config: TransitionConfig,
    active: PageId,
    state: NavState,
    pending_entry: Option<SurfaceTransform>,
    settle: Option<Tween>,
    transform: SurfaceTransform,
}

impl<R, S, H> TransitionController<R, S, H>
where
    R: PageRegistry,
    S: RenderSurface,
    H: HostHooks,
{
    /// Starts idle on the catalog's first page, with no surface attached.
    pub fn new(registry: R, hooks: H, config: TransitionConfig) -> Result<Self, CatalogError> {
        let active = registry.first().ok_or(CatalogError::Empty)?;

        Ok(Self {
            registry,
            hooks,
            surface: None,
            config,
            active,
            state: NavState::Idle,
            pending_entry: None,
            settle: None,
            transform: SurfaceTransform::NEUTRAL,
        })
    }

    pub fn attach_surface(&mut self, mut surface: S) {
        surface.apply(self.transform);
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn active_page(&self) -> PageId {
        self.active
    }

    pub fn is_in_flight(&self) -> bool {
        !matches!(self.state, NavState::Idle)
    }

    pub fn phase(&self) -> NavPhase {
        match self.state {
            NavState::Idle => NavPhase::Idle,
            NavState::Exiting { .. } => NavPhase::Exiting,
            NavState::Entering { .. } => NavPhase::Entering,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            NavState::Idle => None,
            NavState::Exiting { direction, .. } | NavState::Entering { direction, .. } => {
                Some(direction)
            }
        }
    }

    /// Last transform written to the surface.
    pub fn transform(&self) -> SurfaceTransform {
        self.transform
    }

    /// True while a snap-back is still settling.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            active: self.active,
            phase: self.phase(),
            direction: self.direction(),
            in_flight: self.is_in_flight(),
            transform: self.transform,
        }
    }

    /// Page change from a tab, menu entry or in-page link. The direction comes
    /// from catalog order.
    pub fn request_navigation(
        &mut self,
        target: PageId,
        source: NavigationSource,
        now_ms: u64,
    ) -> NavigationOutcome {
        if let Some(outcome) = self.reject(target, source) {
            return outcome;
        }

        match resolve_direction(&self.registry, self.active, target) {
            Ok(direction) => self.begin(target, direction, source, now_ms),
            Err(err) => {
                warn!("nav: refused source={} err={}", source.as_str(), err);
                NavigationOutcome::UnknownPage
            }
        }
    }

    /// Page change from a committed swipe. The swipe already encodes the
    /// direction.
    pub fn request_gesture_navigation(
        &mut self,
        target: PageId,
        direction: Direction,
        now_ms: u64,
    ) -> NavigationOutcome {
        let source = NavigationSource::Gesture;
        if let Some(outcome) = self.reject(target, source) {
            return outcome;
        }

        if !self.registry.contains(target) {
            warn!(
                "nav: refused source={} err={}",
                source.as_str(),
                CatalogError::UnknownPage(target)
            );
            return NavigationOutcome::UnknownPage;
        }

        self.begin(target, direction, source, now_ms)
    }

    /// Returns an aborted drag to neutral. Only valid while idle; a snap-back
    /// is never a transition and never sets the in-flight guard.
    pub fn snap_back(&mut self, now_ms: u64) -> bool {
        if self.is_in_flight() {
            debug!("nav: snap-back ignored phase={:?}", self.phase());
            return false;
        }

        debug!(
            "nav: snap-back from offset={} opacity={}",
            self.transform.offset_px, self.transform.opacity_pct
        );

        if self.transform.is_neutral() {
            self.settle = None;
            return true;
        }

        if self.surface.is_none() {
            self.settle = None;
            self.write(SurfaceTransform::NEUTRAL);
            return true;
        }

        self.settle = Some(Tween::new(
            self.transform,
            SurfaceTransform::NEUTRAL,
            Easing::Spring,
            now_ms,
            self.config.snap_back_ms,
        ));
        true
    }

    /// Live drag feedback. Ignored while in flight or without a surface.
    pub fn drag_follow(&mut self, transform: SurfaceTransform) -> bool {
        if self.is_in_flight() || self.surface.is_none() {
            return false;
        }

        self.settle = None;
        self.write(transform);
        true
    }

    /// Advances running tweens and completes finished phases. Returns `true`
    /// while something on screen is still changing.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.surface.is_none() {
            return self.finish_without_surface();
        }

        match self.state {
            NavState::Idle => {
                let Some(settle) = self.settle else {
                    return false;
                };
                self.write(settle.sample(now_ms));
                if settle.is_finished(now_ms) {
                    self.settle = None;
                    debug!("nav: snap-back settled");
                    return false;
                }
                true
            }
            NavState::Exiting {
                target,
                direction,
                source,
                tween,
            } => {
                self.write(tween.sample(now_ms));
                if tween.is_finished(now_ms) {
                    self.commit(target, direction, source);
                }
                true
            }
            NavState::Entering {
                direction,
                tween: Some(tween),
            } => {
                self.write(tween.sample(now_ms));
                if tween.is_finished(now_ms) {
                    self.write(SurfaceTransform::NEUTRAL);
                    self.state = NavState::Idle;
                    debug!(
                        "nav: enter done page={} dir={}",
                        self.active,
                        direction.as_str()
                    );
                }
                true
            }
            // Waiting for the render that follows the commit.
            NavState::Entering { tween: None, .. } => true,
        }
    }

    /// Must run after the new page's first render and before it is painted.
    /// Consumes the pending entry offset exactly once and starts the enter
    /// animation from it.
    pub fn on_render(&mut self, now_ms: u64) {
        let Some(entry) = self.pending_entry.take() else {
            return;
        };

        let NavState::Entering { direction, .. } = self.state else {
            return;
        };

        if self.surface.is_none() {
            self.write(SurfaceTransform::NEUTRAL);
            self.state = NavState::Idle;
            return;
        }

        self.write(entry);
        self.state = NavState::Entering {
            direction,
            tween: Some(Tween::new(
                entry,
                SurfaceTransform::NEUTRAL,
                Easing::EaseOut,
                now_ms,
                self.config.enter_ms,
            )),
        };
        debug!(
            "nav: enter start page={} offset={}",
            self.active, entry.offset_px
        );
    }

    fn reject(&self, target: PageId, source: NavigationSource) -> Option<NavigationOutcome> {
        if target == self.active {
            return Some(NavigationOutcome::AlreadyActive);
        }

        if self.is_in_flight() {
            debug!(
                "nav: busy source={} target={} phase={:?}",
                source.as_str(),
                target,
                self.phase()
            );
            return Some(NavigationOutcome::Busy);
        }

        None
    }

    fn begin(
        &mut self,
        target: PageId,
        direction: Direction,
        source: NavigationSource,
        now_ms: u64,
    ) -> NavigationOutcome {
        self.settle = None;

        if self.surface.is_none() {
            debug!("nav: no surface, committing without animation target={target}");
            self.commit(target, direction, source);
            self.finish_without_surface();
            return NavigationOutcome::CommittedInstantly;
        }

        let exit = SurfaceTransform::new(-direction.sign() * self.config.exit_travel_px, 0);
        self.state = NavState::Exiting {
            target,
            direction,
            source,
            tween: Tween::new(
                self.transform,
                exit,
                Easing::EaseIn,
                now_ms,
                self.config.exit_ms,
            ),
        };
        debug!(
            "nav: exit start from={} to={} dir={} source={}",
            self.active,
            target,
            direction.as_str(),
            source.as_str()
        );
        NavigationOutcome::Started
    }

    fn commit(&mut self, target: PageId, direction: Direction, source: NavigationSource) {
        let from = self.active;
        self.hooks.release_effects(from);
        self.hooks.reset_scroll();

        // Pre-position before the new content attaches.
        let entry = SurfaceTransform::new(direction.sign() * self.config.enter_travel_px, 0);
        self.write(entry);

        self.active = target;
        self.pending_entry = Some(entry);
        self.state = NavState::Entering {
            direction,
            tween: None,
        };
        info!(
            "nav: commit from={} to={} dir={} source={}",
            from,
            target,
            direction.as_str(),
            source.as_str()
        );
    }

    /// Without a surface nothing can animate: collapse whatever phase is
    /// running straight to idle so the guard never sticks.
    fn finish_without_surface(&mut self) -> bool {
        if let NavState::Exiting {
            target,
            direction,
            source,
            ..
        } = self.state
        {
            self.commit(target, direction, source);
        }

        self.pending_entry = None;
        self.settle = None;
        self.state = NavState::Idle;
        self.transform = SurfaceTransform::NEUTRAL;
        false
    }

    fn write(&mut self, transform: SurfaceTransform) {
        self.transform = transform;
        if let Some(surface) = self.surface.as_mut() {
            surface.apply(transform);
        }
    }
}
