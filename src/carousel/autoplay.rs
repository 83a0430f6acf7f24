//! Autoplay timer task management.
//!
//! Exactly one timer task is live per carousel at any time. `sync` aborts the
//! previous task before spawning a replacement, and tags every tick with the
//! controller epoch it was spawned for so the event loop can drop ticks that
//! raced a reset. Dropping the timer aborts the task, so teardown can never
//! leave a timer mutating a dead view.

use crate::app::event::AppEvent;
use crate::carousel::CarouselController;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub struct AutoplayTimer {
    delay: Duration,
    task: Option<JoinHandle<()>>,
}

impl AutoplayTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, task: None }
    }

    /// Align the timer with the controller: cancel any pending tick, then
    /// start a fresh interval if autoplay is enabled. Called once at startup
    /// and again whenever the controller epoch changes.
    pub fn sync(&mut self, ctl: &CarouselController, tx: &UnboundedSender<AppEvent>) {
        self.cancel();
        if !ctl.autoplay_enabled() {
            return;
        }
        let epoch = ctl.epoch();
        let delay = self.delay;
        let tx = tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(delay);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::AutoplayTick { epoch }).is_err() {
                    break;
                }
            }
        }));
    }

    /// Cancel the pending timer task, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    #[cfg(test)]
    fn is_live(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn disabled_controller_spawns_no_task() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ctl = CarouselController::new(3);
        ctl.set_autoplay(false);
        let mut timer = AutoplayTimer::new(Duration::from_millis(10));
        timer.sync(&ctl, &tx);
        assert!(!timer.is_live());
    }

    #[tokio::test]
    async fn resync_leaves_exactly_one_task() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let ctl = CarouselController::new(3);
        let mut timer = AutoplayTimer::new(Duration::from_secs(60));
        timer.sync(&ctl, &tx);
        let first = timer.task.as_ref().map(|t| t.is_finished());
        assert_eq!(first, Some(false));
        timer.sync(&ctl, &tx);
        assert!(timer.is_live());
        timer.cancel();
        assert!(!timer.is_live());
    }

    #[tokio::test]
    async fn tick_arrives_tagged_with_the_spawn_epoch() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ctl = CarouselController::new(3);
        let mut timer = AutoplayTimer::new(Duration::from_millis(5));
        timer.sync(&ctl, &tx);
        match rx.recv().await {
            Some(AppEvent::AutoplayTick { epoch }) => assert_eq!(epoch, ctl.epoch()),
            other => panic!("expected autoplay tick, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn cancel_stops_further_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ctl = CarouselController::new(3);
        let mut timer = AutoplayTimer::new(Duration::from_millis(5));
        timer.sync(&ctl, &tx);
        timer.cancel();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(rx.try_recv().is_err());
    }
}
