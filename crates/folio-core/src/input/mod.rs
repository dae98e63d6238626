//! Input abstraction layer: raw touch pointers and UI clicks.

mod scripted;

pub use scripted::ScriptedPointer;

use crate::catalog::PageId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// What the host reports under the pointer when the event fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerTarget {
    Content,
    TextInput,
    Button,
    TabBar,
}

impl PointerTarget {
    /// Interactive controls own their touches; swipes never start on them.
    pub const fn blocks_gesture(self) -> bool {
        !matches!(self, Self::Content)
    }
}

/// One touch sample in document coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
    pub time_ms: u64,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, x: i32, y: i32, time_ms: u64) -> Self {
        Self {
            kind,
            x,
            y,
            time_ms,
            target: PointerTarget::Content,
        }
    }

    pub const fn down(x: i32, y: i32, time_ms: u64) -> Self {
        Self::new(PointerKind::Down, x, y, time_ms)
    }

    pub const fn moved(x: i32, y: i32, time_ms: u64) -> Self {
        Self::new(PointerKind::Move, x, y, time_ms)
    }

    pub const fn up(x: i32, y: i32, time_ms: u64) -> Self {
        Self::new(PointerKind::Up, x, y, time_ms)
    }

    pub const fn cancel(x: i32, y: i32, time_ms: u64) -> Self {
        Self::new(PointerKind::Cancel, x, y, time_ms)
    }

    pub const fn on(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }
}

/// Polled pointer provider. `Ok(None)` means nothing is pending right now.
pub trait PointerProvider {
    type Error;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<PointerEvent>, Self::Error>;
}

/// Navigation controls rendered by the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UiCommand {
    /// Bottom tab bar.
    Tab(PageId),
    /// Top navigation links.
    Menu(PageId),
    /// In-page call to action, e.g. "view work".
    Link(PageId),
}

impl UiCommand {
    pub const fn target(self) -> PageId {
        match self {
            Self::Tab(page) | Self::Menu(page) | Self::Link(page) => page,
        }
    }
}
