use crate::animation::easing::Easing;
use crate::animation::values::Interpolatable;

/// A one-shot timed transition between two values.
///
/// The tween holds no clock: [`sample`](Tween::sample) is a pure function of
/// elapsed time. Before `delay` it returns the start value; past
/// `delay + duration` it returns the end value forever. There is no pause,
/// reverse or replay surface — a tween that has run its course is inert.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Interpolatable> {
    from: T,
    to: T,
    duration: f32,
    delay: f32,
    easing: Easing,
}

impl<T: Interpolatable> Tween<T> {
    /// Creates a tween over `duration` seconds.
    ///
    /// A non-positive duration snaps straight to the end value.
    #[must_use]
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Value at `elapsed` seconds since the timeline started.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> T {
        if self.duration <= 0.0 {
            return self.to;
        }

        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        T::interpolate_linear(self.from, self.to, self.easing.apply(t))
    }

    /// Whether the transition has reached its terminal value.
    #[must_use]
    pub fn finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}
