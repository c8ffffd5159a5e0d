//! Customization point for a screen's transitions.

use crate::animation::{Transition, TransitionDirection};
use crate::config::ScreenConfig;
use crate::presentation::PresentationController;

/// Supplies the animation and presentation controllers of a screen.
///
/// Both methods have defaults driven purely by the [`ScreenConfig`]. Override
/// `animation_controller` to change how a sheet moves without touching the
/// state machine.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use horizon_sheet::animation::{
///     Easing, Transition, TransitionCurve, TransitionDirection, TransitionKind,
/// };
/// use horizon_sheet::config::ScreenConfig;
/// use horizon_sheet::screen::TransitionDelegate;
///
/// struct Instant;
///
/// impl TransitionDelegate for Instant {
///     fn animation_controller(
///         &self,
///         direction: TransitionDirection,
///         _config: &ScreenConfig,
///         from: f32,
///         to: f32,
///     ) -> Transition {
///         Transition::new(
///             TransitionKind::None,
///             direction,
///             TransitionCurve::Eased(Easing::Linear),
///             Duration::ZERO,
///             from,
///             to,
///         )
///     }
/// }
/// ```
pub trait TransitionDelegate: Send + Sync {
    /// Build the transition for one entry, settle or exit.
    fn animation_controller(
        &self,
        direction: TransitionDirection,
        config: &ScreenConfig,
        from_height: f32,
        to_height: f32,
    ) -> Transition {
        Transition::for_config(direction, config, from_height, to_height)
    }

    /// Build the presentation controller for a new screen.
    ///
    /// The screen installs itself as the controller's transition source
    /// afterwards, so transitions always come from `animation_controller`.
    fn presentation_controller(&self, config: &ScreenConfig) -> PresentationController {
        PresentationController::new(config.clone())
    }
}

/// Delegate using the configuration's own animation settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransitionDelegate;

impl TransitionDelegate for DefaultTransitionDelegate {}
