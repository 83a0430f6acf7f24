//! Drag/swipe classification for the carousel.
//!
//! A released drag is scored as `|displacement| * velocity` ("swipe power",
//! sign carried by the velocity). Flings past the configured power threshold
//! change the slide. Slow but long drags fall back to the plain-displacement
//! rule: horizontal movement must dominate vertical and exceed the distance
//! threshold. Anything below both thresholds is ignored and the slide stays.
//!
//! Terminal mouse events report cell coordinates; the caller scales them to
//! pixel-like units before they reach this module, so the thresholds keep the
//! units they were originally tuned in.

use std::time::Instant;

/// Tuned cutoffs for gesture classification. Arbitrary by origin, so they are
/// carried as configuration rather than constants.
#[derive(Debug, Clone, Copy)]
pub struct SwipeThresholds {
    /// Minimum `|displacement| * velocity` for a fling, in px²/s.
    pub power: f32,
    /// Minimum horizontal displacement for a slow swipe, in px.
    pub distance_px: f32,
}

/// `|offset| * velocity` — the fling score. Negative means a leftward fling.
pub fn swipe_power(offset: f32, velocity: f32) -> f32 {
    offset.abs() * velocity
}

/// Classify a fling by power. Leftward flings advance (+1), rightward ones
/// retreat (-1), anything under the threshold is not a gesture.
pub fn swipe_step(offset: f32, velocity: f32, thresholds: &SwipeThresholds) -> Option<i64> {
    let power = swipe_power(offset, velocity);
    if power < -thresholds.power {
        Some(1)
    } else if power > thresholds.power {
        Some(-1)
    } else {
        None
    }
}

/// Classify a displacement-only gesture. `dx`/`dy` are start minus end, so
/// positive `dx` means the pointer moved right-to-left.
pub fn touch_step(dx: f32, dy: f32, distance_px: f32) -> Option<i64> {
    if dx.abs() <= dy.abs() || dx.abs() <= distance_px {
        return None;
    }
    Some(if dx > 0.0 { 1 } else { -1 })
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    x: f32,
    y: f32,
    at: Instant,
}

/// Tracks one press-drag-release sequence in pixel-scaled coordinates.
#[derive(Debug, Default)]
pub struct DragTracker {
    start: Option<DragStart>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some(DragStart {
            x,
            y,
            at: Instant::now(),
        });
    }

    /// Drop the in-flight drag without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Finish the drag and classify it. Returns the pagination step, if the
    /// gesture was decisive. No-op when no drag is in flight.
    pub fn release(&mut self, x: f32, y: f32, thresholds: &SwipeThresholds) -> Option<i64> {
        let start = self.start.take()?;
        let elapsed = start.at.elapsed().as_secs_f32();
        classify(start.x, start.y, x, y, elapsed, thresholds)
    }
}

fn classify(
    start_x: f32,
    start_y: f32,
    end_x: f32,
    end_y: f32,
    elapsed_secs: f32,
    thresholds: &SwipeThresholds,
) -> Option<i64> {
    let offset = end_x - start_x;
    let velocity = offset / elapsed_secs.max(0.001);
    swipe_step(offset, velocity, thresholds)
        .or_else(|| touch_step(start_x - end_x, start_y - end_y, thresholds.distance_px))
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: SwipeThresholds = SwipeThresholds {
        power: 10_000.0,
        distance_px: 50.0,
    };

    #[test]
    fn sub_threshold_swipe_is_ignored() {
        // displacement 50 at velocity 1 -> power 50, well under 10000
        assert_eq!(swipe_step(50.0, 1.0, &THRESHOLDS), None);
    }

    #[test]
    fn strong_leftward_fling_advances() {
        // power = 200 * 60 = 12000, negative sign
        assert_eq!(swipe_step(-200.0, -60.0, &THRESHOLDS), Some(1));
    }

    #[test]
    fn strong_rightward_fling_retreats() {
        assert_eq!(swipe_step(200.0, 60.0, &THRESHOLDS), Some(-1));
    }

    #[test]
    fn power_carries_the_velocity_sign() {
        assert!(swipe_power(-200.0, -60.0) < 0.0);
        assert!(swipe_power(200.0, 60.0) > 0.0);
    }

    #[test]
    fn touch_right_to_left_advances() {
        assert_eq!(touch_step(80.0, 10.0, 50.0), Some(1));
    }

    #[test]
    fn touch_left_to_right_retreats() {
        assert_eq!(touch_step(-80.0, 10.0, 50.0), Some(-1));
    }

    #[test]
    fn vertical_dominant_touch_is_ignored() {
        assert_eq!(touch_step(60.0, 80.0, 50.0), None);
    }

    #[test]
    fn short_touch_is_ignored() {
        assert_eq!(touch_step(40.0, 5.0, 50.0), None);
    }

    #[test]
    fn slow_long_drag_falls_back_to_displacement() {
        // 80 px over 4 s: velocity 20, power 1600 < 10000, but distance > 50.
        assert_eq!(
            classify(200.0, 10.0, 120.0, 12.0, 4.0, &THRESHOLDS),
            Some(1)
        );
    }

    #[test]
    fn release_without_begin_does_nothing() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.release(10.0, 10.0, &THRESHOLDS), None);
    }

    #[test]
    fn cancel_discards_the_drag() {
        let mut tracker = DragTracker::new();
        tracker.begin(0.0, 0.0);
        tracker.cancel();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(500.0, 0.0, &THRESHOLDS), None);
    }
}
