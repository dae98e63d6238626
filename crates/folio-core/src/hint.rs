//! One-shot "swipe to navigate" hint for touch hosts.
//!
//! The hint waits for loading to finish, fades in after a delay, stays up for
//! a while and fades out. The first committed swipe dismisses it early. Once
//! it has been seen it never shows again for the session; the host owns that
//! flag and passes it back in on construction.

use log::debug;

use crate::motion::{Easing, SurfaceTransform, Tween};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HintConfig {
    pub show_delay_ms: u16,
    pub fade_in_ms: u16,
    /// Time fully visible before the automatic fade-out.
    pub visible_ms: u16,
    pub fade_out_ms: u16,
    /// Faster fade used when a swipe dismisses the hint.
    pub dismiss_ms: u16,
    /// Vertical travel of the pill while fading, in px.
    pub rise_px: i32,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 1_200,
            fade_in_ms: 550,
            visible_ms: 4_500,
            fade_out_ms: 450,
            dismiss_ms: 300,
            rise_px: 18,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum HintState {
    Hidden,
    Waiting { show_at_ms: u64 },
    Showing { fade_in: Tween, hide_at_ms: u64 },
    Dismissing { fade_out: Tween },
    Done,
}

#[derive(Debug, Clone)]
pub struct SwipeHint {
    config: HintConfig,
    state: HintState,
    seen: bool,
}

impl SwipeHint {
    pub const fn new(config: HintConfig, already_seen: bool) -> Self {
        Self {
            config,
            state: if already_seen {
                HintState::Done
            } else {
                HintState::Hidden
            },
            seen: already_seen,
        }
    }

    /// Session flag the host should persist once it turns `true`.
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn is_visible(&self) -> bool {
        matches!(
            self.state,
            HintState::Showing { .. } | HintState::Dismissing { .. }
        )
    }

    /// Called once loading is done. Only touch hosts ever see the hint.
    pub fn arm(&mut self, touch_capable: bool, now_ms: u64) {
        if !matches!(self.state, HintState::Hidden) {
            return;
        }

        if !touch_capable {
            self.state = HintState::Done;
            return;
        }

        self.state = HintState::Waiting {
            show_at_ms: now_ms + self.config.show_delay_ms as u64,
        };
        debug!("hint: armed");
    }

    /// The user found the gesture on their own.
    pub fn dismiss(&mut self, now_ms: u64) {
        match self.state {
            HintState::Hidden | HintState::Waiting { .. } => self.finish(),
            HintState::Showing { .. } => self.start_fade_out(now_ms, self.config.dismiss_ms),
            HintState::Dismissing { .. } | HintState::Done => {}
        }
    }

    /// Advances the timeline. Returns `true` while the pill is animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.state {
            HintState::Hidden | HintState::Done => false,
            HintState::Waiting { show_at_ms } => {
                if now_ms < show_at_ms {
                    return false;
                }
                self.state = HintState::Showing {
                    fade_in: Tween::new(
                        SurfaceTransform::new(self.config.rise_px, 0),
                        SurfaceTransform::NEUTRAL,
                        Easing::EaseOut,
                        now_ms,
                        self.config.fade_in_ms,
                    ),
                    hide_at_ms: now_ms
                        + self.config.fade_in_ms as u64
                        + self.config.visible_ms as u64,
                };
                debug!("hint: shown");
                true
            }
            HintState::Showing {
                fade_in,
                hide_at_ms,
            } => {
                if now_ms >= hide_at_ms {
                    self.start_fade_out(now_ms, self.config.fade_out_ms);
                    return true;
                }
                !fade_in.is_finished(now_ms)
            }
            HintState::Dismissing { fade_out } => {
                if fade_out.is_finished(now_ms) {
                    self.finish();
                    return false;
                }
                true
            }
        }
    }

    /// Pill offset (vertical, px) and opacity at `now_ms`, when visible.
    pub fn transform(&self, now_ms: u64) -> Option<SurfaceTransform> {
        match self.state {
            HintState::Showing { fade_in, .. } => Some(fade_in.sample(now_ms)),
            HintState::Dismissing { fade_out } => Some(fade_out.sample(now_ms)),
            _ => None,
        }
    }

    fn start_fade_out(&mut self, now_ms: u64, duration_ms: u16) {
        let from = self.transform(now_ms).unwrap_or(SurfaceTransform::NEUTRAL);
        self.state = HintState::Dismissing {
            fade_out: Tween::new(
                from,
                SurfaceTransform::new(self.config.rise_px * 3 / 4, 0),
                Easing::EaseIn,
                now_ms,
                duration_ms,
            ),
        };
    }

    fn finish(&mut self) {
        self.state = HintState::Done;
        self.seen = true;
        debug!("hint: done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_timeline_shows_then_hides_and_marks_seen() {
        let config = HintConfig::default();
        let mut hint = SwipeHint::new(config, false);
        hint.arm(true, 0);

        assert!(!hint.tick(1_000));
        assert!(!hint.is_visible());

        assert!(hint.tick(1_200));
        assert!(hint.is_visible());
        assert_eq!(hint.transform(1_200), Some(SurfaceTransform::new(18, 0)));
        assert_eq!(hint.transform(1_750), Some(SurfaceTransform::NEUTRAL));

        let hide_at = 1_200 + 550 + 4_500;
        assert!(!hint.tick(hide_at - 1));
        assert!(hint.tick(hide_at));
        assert!(hint.tick(hide_at + 200));
        assert!(!hint.tick(hide_at + 450));
        assert!(!hint.is_visible());
        assert!(hint.is_seen());
    }

    #[test]
    fn first_swipe_dismisses_early() {
        let mut hint = SwipeHint::new(HintConfig::default(), false);
        hint.arm(true, 0);
        hint.tick(1_200);

        hint.dismiss(1_500);
        assert!(hint.is_visible());
        assert!(!hint.tick(1_800));
        assert!(hint.is_seen());
    }

    #[test]
    fn dismiss_before_showing_skips_the_hint() {
        let mut hint = SwipeHint::new(HintConfig::default(), false);
        hint.arm(true, 0);
        hint.dismiss(100);

        assert!(!hint.tick(2_000));
        assert!(!hint.is_visible());
        assert!(hint.is_seen());
    }

    #[test]
    fn never_shows_when_seen_or_without_touch() {
        let mut seen = SwipeHint::new(HintConfig::default(), true);
        seen.arm(true, 0);
        assert!(!seen.tick(5_000));
        assert!(!seen.is_visible());

        let mut mouse = SwipeHint::new(HintConfig::default(), false);
        mouse.arm(false, 0);
        assert!(!mouse.tick(5_000));
        assert!(!mouse.is_visible());
        assert!(!mouse.is_seen());
    }
}
