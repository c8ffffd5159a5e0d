//! Easing functions for transition animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value. Entry and exit transitions use them; settling after a drag uses the
//! spring curve in [`super::spring`] instead.

use std::f32::consts::PI;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-out, the curve used for sheets entering.
    EaseOutCubic,
    /// Cubic ease-in, the curve used for sheets leaving.
    EaseInCubic,
    /// Sinusoidal ease-in-out, used by the flip transition.
    EaseInOutSine,
}

/// Apply an easing function to a progress value.
///
/// # Example
///
/// ```
/// use horizon_sheet::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseOutCubic, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInCubic => t * t * t,
        Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    lerp(start, end, ease(easing, t))
}

/// Plain linear interpolation; `t` is not clamped.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
