//! Animation module.
//!
//! A [`Tween`] is a stateless timeline: it maps an elapsed time to a value
//! between two endpoints through an [`Easing`] curve. Callers own the clock
//! and query `sample(elapsed)` each frame, which keeps playback trivially
//! testable — there is no internal play state to drive.

pub mod easing;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use tween::Tween;
pub use values::Interpolatable;
