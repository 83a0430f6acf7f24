use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Autoplay timer fired. Carries the carousel epoch the timer was spawned
    /// for; ticks from a superseded timer are dropped.
    AutoplayTick { epoch: u64 },

    /// The simulated contact-form send finished.
    ContactSendComplete,

    /// Tick for UI refresh
    Tick,
}
