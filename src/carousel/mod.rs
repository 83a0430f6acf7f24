//! Slide carousel used by the experience section.
//!
//! The controller owns the navigation state (current slide, transition
//! direction, autoplay flag); the autoplay timer and gesture tracker feed it.
//! Rendering is entirely the UI layer's concern.

pub mod autoplay;
pub mod controller;
pub mod gesture;

pub use autoplay::AutoplayTimer;
pub use controller::CarouselController;
pub use gesture::{DragTracker, SwipeThresholds};
