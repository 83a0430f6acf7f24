//! Time-based animation primitives.
//!
//! Widgets describe what to animate (an [`Animation`] with a delay, duration
//! and easing curve) and sample progress through an [`AnimationDriver`]. The
//! default driver reads the wall clock; tests can substitute a fixed-time
//! driver. Nothing outside this module knows the easing math.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// One value animated from 0 to 1 over a fixed span of time.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    started: Instant,
    delay: Duration,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            started: Instant::now(),
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Rewind to the beginning, keeping the curve and timing.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Eased progress in `[0, 1]` at `now`. Zero during the delay, one after
    /// the duration has elapsed.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(t.clamp(0.0, 1.0))
    }

    pub fn finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.delay + self.duration
    }
}

/// Capability to sample animation progress. Renderers depend on this trait,
/// not on a clock.
pub trait AnimationDriver {
    fn progress(&self, anim: &Animation) -> f32;

    fn finished(&self, anim: &Animation) -> bool;
}

/// Wall-clock driver used by the running application.
#[derive(Debug, Default)]
pub struct ClockDriver;

impl AnimationDriver for ClockDriver {
    fn progress(&self, anim: &Animation) -> f32 {
        anim.progress_at(Instant::now())
    }

    fn finished(&self, anim: &Animation) -> bool {
        anim.finished_at(Instant::now())
    }
}

/// Linear interpolation helper for offset animations.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
