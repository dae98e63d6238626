//! Composition root: wires the page catalog, the transition controller, the
//! gesture recognizer and the swipe hint into one tick-driven app.


use log::{debug, warn};

use crate::{
    catalog::{CatalogError, PageEntry, PageId, PageRegistry},
    gesture::{GestureConfig, GestureOutcome, GestureRecognizer},
    hint::{HintConfig, SwipeHint},
    hooks::HostHooks,
    input::{PointerProvider, UiCommand},
    motion::SurfaceTransform,
    nav::{NavigationOutcome, NavigationSource, TransitionConfig, TransitionController},
    surface::RenderSurface,
};

/// Upper bound on pointer events drained per tick.
const MAX_EVENTS_PER_TICK: usize = 64;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AppConfig {
    pub transition: TransitionConfig,
    pub gesture: GestureConfig,
    pub hint: HintConfig,
    /// Coarse-pointer host; only those get the swipe hint.
    pub touch_capable: bool,
}

impl AppConfig {
    pub const fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    pub const fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub const fn with_hint(mut self, hint: HintConfig) -> Self {
        self.hint = hint;
        self
    }

    pub const fn with_touch_capable(mut self, touch_capable: bool) -> Self {
        self.touch_capable = touch_capable;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TabView {
    pub id: PageId,
    pub label: &'static str,
    pub active: bool,
}

/// Tab bar and nav menu entries, in catalog order.
#[derive(Clone, Copy)]
pub struct Tabs<'a> {
    registry: &'a dyn PageRegistry,
    active: PageId,
}

impl<'a> Tabs<'a> {
    pub fn iter(self) -> impl Iterator<Item = TabView> + 'a {
        let registry = self.registry;
        let active = self.active;
        (0..registry.page_count()).filter_map(move |idx| {
            registry.page_at(idx).map(|entry| TabView {
                id: entry.id,
                label: entry.label,
                active: entry.id == active,
            })
        })
    }
}

/// Everything the host needs to draw one frame.
pub struct PageView<'a> {
    pub page: &'a PageEntry,
    pub tabs: Tabs<'a>,
    pub transform: SurfaceTransform,
    pub in_flight: bool,
    pub hint: Option<SurfaceTransform>,
}

pub struct PortfolioApp<R, P, S, H>
where
    R: PageRegistry,
    P: PointerProvider,
    S: RenderSurface,
    H: HostHooks,
{
    nav: TransitionController<R, S, H>,
    pointer: P,
    gesture: GestureRecognizer,
    hint: SwipeHint,
    touch_capable: bool,
    pending_redraw: bool,
}

impl<R, P, S, H> PortfolioApp<R, P, S, H>
where
    R: PageRegistry,
    P: PointerProvider,
    S: RenderSurface,
    H: HostHooks,
{
    pub fn new(
        registry: R,
        pointer: P,
        hooks: H,
        config: AppConfig,
        hint_seen: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            nav: TransitionController::new(registry, hooks, config.transition)?,
            pointer,
            gesture: GestureRecognizer::new(config.gesture),
            hint: SwipeHint::new(config.hint, hint_seen),
            touch_capable: config.touch_capable,
            pending_redraw: true,
        })
    }

    pub fn attach_surface(&mut self, surface: S) {
        self.nav.attach_surface(surface);
        self.pending_redraw = true;
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.nav.detach_surface()
    }

    pub fn nav(&self) -> &TransitionController<R, S, H> {
        &self.nav
    }

    pub fn hint(&self) -> &SwipeHint {
        &self.hint
    }

    pub fn active_page(&self) -> PageId {
        self.nav.active_page()
    }

    /// The loading splash has gone; the hint timeline may start.
    pub fn finish_loading(&mut self, now_ms: u64) {
        self.hint.arm(self.touch_capable, now_ms);
    }

    /// Tab bar, menu and in-page link clicks.
    pub fn click(&mut self, command: UiCommand, now_ms: u64) -> NavigationOutcome {
        let source = match command {
            UiCommand::Tab(_) => NavigationSource::TabBar,
            UiCommand::Menu(_) => NavigationSource::NavMenu,
            UiCommand::Link(_) => NavigationSource::ContentLink,
        };

        let outcome = self
            .nav
            .request_navigation(command.target(), source, now_ms);
        if outcome.accepted() {
            self.pending_redraw = true;
        }
        outcome
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_pointer(now_ms);

        let animating = self.nav.tick(now_ms);
        let hint_animating = self.hint.tick(now_ms);

        if core::mem::take(&mut self.pending_redraw) || animating || hint_animating {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Renders the active page, then runs the pre-paint hand-off for a freshly
    /// committed page.
    pub fn with_view<F>(&mut self, now_ms: u64, f: F)
    where
        F: FnOnce(PageView<'_>),
    {
        let active = self.nav.active_page();
        if let Some(page) = self.nav.registry().entry(active) {
            f(PageView {
                page,
                tabs: Tabs {
                    registry: self.nav.registry(),
                    active,
                },
                transform: self.nav.transform(),
                in_flight: self.nav.is_in_flight(),
                hint: self.hint.transform(now_ms),
            });
        }

        self.nav.on_render(now_ms);
    }

    fn process_pointer(&mut self, now_ms: u64) {
        for _ in 0..MAX_EVENTS_PER_TICK {
            let event = match self.pointer.poll_event(now_ms) {
                Ok(Some(event)) => event,
                Ok(None) => break,
                Err(_) => {
                    warn!("input: pointer provider failed, dropping this tick's events");
                    break;
                }
            };

            match self.gesture.handle(event, &mut self.nav) {
                GestureOutcome::Navigated { target, direction } => {
                    debug!(
                        "input: swipe accepted target={} dir={}",
                        target,
                        direction.as_str()
                    );
                    self.hint.dismiss(now_ms);
                    self.pending_redraw = true;
                }
                GestureOutcome::SnappedBack => self.pending_redraw = true,
                GestureOutcome::Tracking | GestureOutcome::Ignored => {}
            }
        }
    }
}
