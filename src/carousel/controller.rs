//! Carousel navigation state machine.
//!
//! Index arithmetic is total: any signed step wraps modulo the slide count,
//! so the current index is always valid. The `epoch` counter bumps whenever
//! the current slide or the autoplay flag changes; the autoplay timer task is
//! keyed to it, which lets the event loop discard ticks from a timer that was
//! superseded before its message was processed.

/// Navigation state for a fixed, non-empty slide sequence.
#[derive(Debug)]
pub struct CarouselController {
    len: usize,
    current: usize,
    direction: i8,
    autoplay_enabled: bool,
    epoch: u64,
}

impl CarouselController {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current: 0,
            direction: 1,
            autoplay_enabled: true,
            epoch: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Sign of the last transition, for picking the enter/exit side.
    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_current_epoch(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Step the current slide by `step`, wrapping at both ends.
    ///
    /// Built-in triggers only ever produce ±1, but any step is accepted.
    /// Returns true if the visible slide changed.
    pub fn paginate(&mut self, step: i64) -> bool {
        if step == 0 {
            return false;
        }
        let n = self.len as i64;
        let next = (self.current as i64 + step).rem_euclid(n) as usize;
        self.direction = if step > 0 { 1 } else { -1 };
        if next == self.current {
            return false;
        }
        self.current = next;
        self.epoch = self.epoch.wrapping_add(1);
        tracing::debug!(current = self.current, step, "carousel paginate");
        true
    }

    /// Enable or disable autoplay. Idempotent: repeating the current value
    /// changes nothing, including the epoch.
    pub fn set_autoplay(&mut self, enabled: bool) -> bool {
        if self.autoplay_enabled == enabled {
            return false;
        }
        self.autoplay_enabled = enabled;
        self.epoch = self.epoch.wrapping_add(1);
        tracing::debug!(enabled, "carousel autoplay");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_slide_with_autoplay() {
        let ctl = CarouselController::new(3);
        assert_eq!(ctl.current(), 0);
        assert!(ctl.autoplay_enabled());
    }

    #[test]
    fn index_stays_in_range_for_any_step_sequence() {
        for n in 1..6 {
            let mut ctl = CarouselController::new(n);
            for step in [1, -1, 7, -7, 100, -3, 2, -100] {
                ctl.paginate(step);
                assert!(ctl.current() < n, "index {} out of range for n={}", ctl.current(), n);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let n = 5;
        let mut ctl = CarouselController::new(n);
        for _ in 0..n {
            ctl.paginate(1);
        }
        assert_eq!(ctl.current(), 0);
    }

    #[test]
    fn wraps_backward_from_zero() {
        let mut ctl = CarouselController::new(4);
        ctl.paginate(-1);
        assert_eq!(ctl.current(), 3);
        assert_eq!(ctl.direction(), -1);
    }

    #[test]
    fn direction_follows_step_sign() {
        let mut ctl = CarouselController::new(3);
        ctl.paginate(2);
        assert_eq!(ctl.direction(), 1);
        ctl.paginate(-5);
        assert_eq!(ctl.direction(), -1);
    }

    #[test]
    fn zero_step_is_a_no_op() {
        let mut ctl = CarouselController::new(3);
        let epoch = ctl.epoch();
        assert!(!ctl.paginate(0));
        assert_eq!(ctl.current(), 0);
        assert_eq!(ctl.epoch(), epoch);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut ctl = CarouselController::new(1);
        assert!(!ctl.paginate(1));
        assert!(!ctl.paginate(-1));
        assert_eq!(ctl.current(), 0);
    }

    #[test]
    fn pagination_bumps_epoch() {
        let mut ctl = CarouselController::new(3);
        let before = ctl.epoch();
        ctl.paginate(1);
        assert_ne!(ctl.epoch(), before);
    }

    #[test]
    fn set_autoplay_is_idempotent() {
        let mut ctl = CarouselController::new(3);
        assert!(ctl.set_autoplay(false));
        let epoch = ctl.epoch();
        assert!(!ctl.set_autoplay(false));
        assert_eq!(ctl.epoch(), epoch);
        assert!(ctl.set_autoplay(true));
        assert_ne!(ctl.epoch(), epoch);
    }

    #[test]
    fn stale_epoch_is_detectable() {
        let mut ctl = CarouselController::new(3);
        let stale = ctl.epoch();
        ctl.paginate(1);
        assert!(!ctl.is_current_epoch(stale));
        assert!(ctl.is_current_epoch(ctl.epoch()));
    }
}
