use super::*;
use crate::{
    catalog::{PageEntry, StaticCatalog},
    surface::RecordingSurface,
};

const HOME: PageId = PageId::new("home");
const ABOUT: PageId = PageId::new("about");
const EXPERIENCE: PageId = PageId::new("experience");
const PROJECTS: PageId = PageId::new("projects");
const CONTACT: PageId = PageId::new("contact");

#[derive(Default)]
struct RecordingHooks {
    released: Vec<PageId>,
    scroll_resets: u32,
}

impl HostHooks for RecordingHooks {
    fn release_effects(&mut self, page: PageId) {
        self.released.push(page);
    }

    fn reset_scroll(&mut self) {
        self.scroll_resets += 1;
    }
}

type Controller = TransitionController<StaticCatalog<5>, RecordingSurface<256>, RecordingHooks>;

fn catalog() -> StaticCatalog<5> {
    let entries = [HOME, ABOUT, EXPERIENCE, PROJECTS, CONTACT]
        .map(|id| PageEntry::new(id, id.as_str(), &[]));
    StaticCatalog::new(&entries).unwrap()
}

fn controller() -> Controller {
    let mut controller =
        TransitionController::new(catalog(), RecordingHooks::default(), TransitionConfig::default())
            .unwrap();
    controller.attach_surface(RecordingSurface::new());
    controller
}

fn surface(controller: &Controller) -> &RecordingSurface<256> {
    controller.surface().unwrap()
}

/// Ticks every 16 ms, rendering whenever asked, until idle. Returns the time
/// reached.
fn run_until_idle(controller: &mut Controller, mut now_ms: u64) -> u64 {
    for _ in 0..500 {
        let animating = controller.tick(now_ms);
        controller.on_render(now_ms);
        if !animating && !controller.is_in_flight() && !controller.is_settling() {
            return now_ms;
        }
        now_ms += 16;
    }
    panic!("controller never returned to idle");
}

#[test]
fn starts_idle_on_first_page() {
    let controller = controller();
    let snapshot = controller.snapshot();

    assert_eq!(snapshot.active, HOME);
    assert_eq!(snapshot.phase, NavPhase::Idle);
    assert_eq!(snapshot.direction, None);
    assert!(!snapshot.in_flight);
    assert!(snapshot.transform.is_neutral());
}

#[test]
fn full_transition_runs_exit_commit_enter() {
    let mut controller = controller();

    assert_eq!(
        controller.request_navigation(PROJECTS, NavigationSource::TabBar, 0),
        NavigationOutcome::Started
    );
    assert!(controller.is_in_flight());
    assert_eq!(controller.phase(), NavPhase::Exiting);
    assert_eq!(controller.direction(), Some(Direction::Forward));
    assert_eq!(controller.active_page(), HOME);

    controller.tick(100);
    assert!(surface(&controller).current().offset_px < 0);
    assert_eq!(controller.active_page(), HOME);

    // Exit finishes: commit happens synchronously inside this tick.
    controller.tick(250);
    assert_eq!(controller.active_page(), PROJECTS);
    assert_eq!(controller.phase(), NavPhase::Entering);
    assert_eq!(controller.hooks().released, vec![HOME]);
    assert_eq!(controller.hooks().scroll_resets, 1);
    assert_eq!(surface(&controller).current(), SurfaceTransform::new(60, 0));

    let end = run_until_idle(&mut controller, 266);
    assert!(end >= 266 + 400);
    assert!(!controller.is_in_flight());
    assert!(surface(&controller).current().is_neutral());
}

#[test]
fn backward_navigation_mirrors_offsets() {
    let mut controller = controller();
    controller.request_navigation(CONTACT, NavigationSource::NavMenu, 0);
    let now = run_until_idle(&mut controller, 0);

    controller.request_navigation(ABOUT, NavigationSource::NavMenu, now);
    assert_eq!(controller.direction(), Some(Direction::Backward));
    controller.tick(now + 250);
    assert_eq!(surface(&controller).current(), SurfaceTransform::new(-60, 0));
    assert!(
        surface(&controller)
            .history()
            .iter()
            .rev()
            .skip(1)
            .take_while(|t| t.opacity_pct < 100)
            .all(|t| t.offset_px >= 0),
        "backward exit must slide right"
    );
}

#[test]
fn entry_offset_is_applied_before_first_paint_and_consumed_once() {
    let mut controller = controller();
    controller.request_navigation(ABOUT, NavigationSource::TabBar, 0);
    controller.tick(250);

    let writes_at_commit = surface(&controller).write_count();
    controller.on_render(260);
    assert_eq!(surface(&controller).write_count(), writes_at_commit + 1);
    assert_eq!(surface(&controller).current(), SurfaceTransform::new(60, 0));

    // A second render pass must not restart the entry animation.
    controller.tick(460);
    let mid = surface(&controller).current();
    controller.on_render(460);
    assert_eq!(surface(&controller).current(), mid);
    assert!(mid.offset_px < 60 && mid.offset_px > 0);

    controller.tick(660);
    assert!(!controller.is_in_flight());
    assert!(surface(&controller).current().is_neutral());
}

#[test]
fn requests_while_in_flight_are_ignored() {
    let mut controller = controller();
    assert!(
        controller
            .request_gesture_navigation(ABOUT, Direction::Forward, 0)
            .accepted()
    );
    controller.tick(100);
    let writes = surface(&controller).write_count();

    for (offset, target) in [PROJECTS, CONTACT, EXPERIENCE].into_iter().enumerate() {
        let now = 110 + offset as u64;
        assert_eq!(
            controller.request_navigation(target, NavigationSource::TabBar, now),
            NavigationOutcome::Busy
        );
        assert_eq!(
            controller.request_gesture_navigation(target, Direction::Forward, now),
            NavigationOutcome::Busy
        );
    }

    assert_eq!(surface(&controller).write_count(), writes);
    assert_eq!(controller.direction(), Some(Direction::Forward));

    run_until_idle(&mut controller, 120);
    assert_eq!(controller.active_page(), ABOUT);
    assert_eq!(controller.hooks().released, vec![HOME]);
}

#[test]
fn tab_click_during_swipe_exit_is_dropped_then_accepted_once_idle() {
    let mut controller = controller();
    controller.request_gesture_navigation(ABOUT, Direction::Forward, 0);
    controller.tick(120);

    assert_eq!(
        controller.request_navigation(PROJECTS, NavigationSource::TabBar, 130),
        NavigationOutcome::Busy
    );

    let now = run_until_idle(&mut controller, 140);
    assert_eq!(controller.active_page(), ABOUT);

    assert_eq!(
        controller.request_navigation(PROJECTS, NavigationSource::TabBar, now),
        NavigationOutcome::Started
    );
    run_until_idle(&mut controller, now);
    assert_eq!(controller.active_page(), PROJECTS);
}

#[test]
fn same_page_is_a_no_op_even_while_busy() {
    let mut controller = controller();
    assert_eq!(
        controller.request_navigation(HOME, NavigationSource::TabBar, 0),
        NavigationOutcome::AlreadyActive
    );
    assert!(!controller.is_in_flight());

    controller.request_navigation(ABOUT, NavigationSource::TabBar, 0);
    assert_eq!(
        controller.request_navigation(HOME, NavigationSource::TabBar, 10),
        NavigationOutcome::AlreadyActive
    );
}

#[test]
fn unknown_page_is_refused_without_state_change() {
    let mut controller = controller();
    let blog = PageId::new("blog");

    assert_eq!(
        controller.request_navigation(blog, NavigationSource::ContentLink, 0),
        NavigationOutcome::UnknownPage
    );
    assert_eq!(
        controller.request_gesture_navigation(blog, Direction::Forward, 0),
        NavigationOutcome::UnknownPage
    );
    assert!(!controller.is_in_flight());
    assert_eq!(controller.active_page(), HOME);
    assert!(controller.hooks().released.is_empty());
}

#[test]
fn missing_surface_commits_without_animation() {
    let mut controller =
        Controller::new(catalog(), RecordingHooks::default(), TransitionConfig::default()).unwrap();

    assert_eq!(
        controller.request_navigation(EXPERIENCE, NavigationSource::TabBar, 0),
        NavigationOutcome::CommittedInstantly
    );
    assert_eq!(controller.active_page(), EXPERIENCE);
    assert!(!controller.is_in_flight());
    assert!(controller.transform().is_neutral());
    assert_eq!(controller.hooks().released, vec![HOME]);
    assert!(!controller.tick(16));
}

#[test]
fn surface_detached_mid_exit_still_commits() {
    let mut controller = controller();
    controller.request_navigation(CONTACT, NavigationSource::TabBar, 0);
    controller.tick(100);

    let detached = controller.detach_surface();
    assert!(detached.is_some());

    assert!(!controller.tick(116));
    assert_eq!(controller.active_page(), CONTACT);
    assert!(!controller.is_in_flight());

    controller.attach_surface(RecordingSurface::new());
    assert!(surface(&controller).current().is_neutral());
}

#[test]
fn snap_back_settles_to_neutral_without_going_in_flight() {
    let mut controller = controller();
    assert!(controller.drag_follow(SurfaceTransform::new(-12, 85)));

    assert!(controller.snap_back(1_000));
    let mut now = 1_000;
    while controller.is_settling() {
        assert!(!controller.is_in_flight());
        controller.tick(now);
        now += 16;
    }

    assert_eq!(controller.active_page(), HOME);
    assert!(surface(&controller).current().is_neutral());
    assert!(now <= 1_000 + 450 + 32);
}

#[test]
fn snap_back_and_drag_are_refused_while_in_flight() {
    let mut controller = controller();
    controller.request_navigation(ABOUT, NavigationSource::TabBar, 0);
    controller.tick(50);
    let before = surface(&controller).current();

    assert!(!controller.snap_back(60));
    assert!(!controller.drag_follow(SurfaceTransform::new(20, 90)));
    assert_eq!(surface(&controller).current(), before);
}

#[test]
fn navigation_during_snap_back_exits_from_live_offset() {
    let mut controller = controller();
    controller.drag_follow(SurfaceTransform::new(-15, 80));
    controller.snap_back(0);
    controller.tick(50);
    let live = controller.transform();

    assert_eq!(
        controller.request_navigation(ABOUT, NavigationSource::TabBar, 60),
        NavigationOutcome::Started
    );
    assert!(!controller.is_settling());
    controller.tick(60);
    assert_eq!(surface(&controller).current(), live);

    run_until_idle(&mut controller, 76);
    assert!(surface(&controller).current().is_neutral());
}
