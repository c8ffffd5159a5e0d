//! Spring curve used when a sheet settles after a drag.
//!
//! The curve is the step response of a damped harmonic oscillator, stretched
//! over the transition duration. The natural frequency is picked so the
//! oscillation envelope decays to [`SETTLE_EPSILON`] by the end of the
//! duration, and the residual is folded back in so the curve lands on exactly
//! `1.0` at `t = 1.0`.

/// Envelope amplitude left at the end of the transition.
pub const SETTLE_EPSILON: f32 = 0.001;

/// Smallest damping ratio the curve accepts.
const MIN_DAMPING: f32 = 0.05;

/// A damped spring sampled over normalized time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy).
    damping: f32,
    /// Natural angular frequency, in radians per normalized time unit.
    omega: f32,
    /// Raw response at `t = 1.0`, used to close the curve at exactly 1.
    end_value: f32,
}

impl SpringCurve {
    /// Create a spring with the given damping ratio, clamped to `[0.05, 1.0]`.
    pub fn new(damping: f32) -> Self {
        let damping = if damping.is_finite() {
            damping.clamp(MIN_DAMPING, 1.0)
        } else {
            1.0
        };
        let omega = -SETTLE_EPSILON.ln() / damping;
        let mut curve = Self {
            damping,
            omega,
            end_value: 1.0,
        };
        curve.end_value = curve.raw(1.0);
        curve
    }

    /// The damping ratio in use.
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Sample the curve at normalized time `t` (clamped to `[0, 1]`).
    ///
    /// Starts at `0.0`, ends at exactly `1.0`; under-damped curves exceed
    /// `1.0` in between.
    pub fn value(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        self.raw(t) + (1.0 - self.end_value) * t
    }

    fn raw(&self, t: f32) -> f32 {
        let zeta = self.damping;
        let omega = self.omega;
        let envelope = (-zeta * omega * t).exp();

        if zeta >= 1.0 {
            1.0 - envelope * (1.0 + omega * t)
        } else {
            let root = (1.0 - zeta * zeta).sqrt();
            let omega_d = omega * root;
            1.0 - envelope * ((omega_d * t).cos() + (zeta / root) * (omega_d * t).sin())
        }
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::new(1.0)
    }
}
