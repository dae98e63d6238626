//! Surface transforms and the integer tweens that move between them.

/// Horizontal offset and opacity of the render surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SurfaceTransform {
    pub offset_px: i32,
    /// 0..=100
    pub opacity_pct: u8,
}

impl SurfaceTransform {
    pub const NEUTRAL: Self = Self::new(0, 100);

    pub const fn new(offset_px: i32, opacity_pct: u8) -> Self {
        Self {
            offset_px,
            opacity_pct: if opacity_pct > 100 { 100 } else { opacity_pct },
        }
    }

    pub const fn is_neutral(self) -> bool {
        self.offset_px == 0 && self.opacity_pct == 100
    }
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Timing curves, evaluated in per-mille.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic, slow start. Used when content leaves.
    EaseIn,
    /// Cubic, slow finish. Used when content arrives.
    EaseOut,
    /// Back-out with a small overshoot. Used for snap-back.
    Spring,
}

impl Easing {
    /// Maps linear progress (0..=1000) to eased progress. `Spring` may exceed
    /// 1000 mid-way.
    pub fn apply(self, progress_pm: u16) -> i64 {
        let p = progress_pm.min(1000) as i64;
        match self {
            Self::Linear => p,
            Self::EaseIn => p * p / 1000,
            Self::EaseOut => {
                let rest = 1000 - p;
                1000 - rest * rest * rest / 1_000_000
            }
            Self::Spring => {
                // 1 + c3 * u^3 + c1 * u^2, with c1 = 1.70158, c3 = c1 + 1
                let u = p - 1000;
                1000 + 2_702 * u * u * u / 1_000_000_000 + 1_702 * u * u / 1_000_000
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tween {
    pub from: SurfaceTransform,
    pub to: SurfaceTransform,
    pub easing: Easing,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl Tween {
    pub const fn new(
        from: SurfaceTransform,
        to: SurfaceTransform,
        easing: Easing,
        start_ms: u64,
        duration_ms: u16,
    ) -> Self {
        Self {
            from,
            to,
            easing,
            start_ms,
            duration_ms,
        }
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms.max(1) as u64
    }

    /// Linear progress in per-mille.
    pub fn progress_pm(&self, now_ms: u64) -> u16 {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        ((elapsed * 1000) / duration).min(1000) as u16
    }

    /// Transform at `now_ms`. Once finished this is exactly `to`.
    pub fn sample(&self, now_ms: u64) -> SurfaceTransform {
        if self.is_finished(now_ms) {
            return self.to;
        }

        let eased = self.easing.apply(self.progress_pm(now_ms));
        let offset = lerp(self.from.offset_px as i64, self.to.offset_px as i64, eased);
        let opacity = lerp(
            self.from.opacity_pct as i64,
            self.to.opacity_pct as i64,
            eased,
        );

        SurfaceTransform::new(
            offset.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            opacity.clamp(0, 100) as u8,
        )
    }
}

fn lerp(from: i64, to: i64, eased_pm: i64) -> i64 {
    from + (to - from) * eased_pm / 1000
}
