/// Easing curves: monotonic maps from normalized time to normalized
/// progress, `f(0) = 0`, `f(1) = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    /// Quadratic ease-in then ease-out; the curve the box lid opens with.
    QuadraticInOut,
    CubicInOut,
    SineInOut,
}

impl Easing {
    /// Applies the curve to a normalized time in `[0, 1]`.
    ///
    /// Inputs outside the range are clamped first, so sampling a finished
    /// timeline keeps returning the terminal progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::SineInOut => -(f32::cos(std::f32::consts::PI * t) - 1.0) / 2.0,
        }
    }
}
