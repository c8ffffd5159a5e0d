//! Transition types and state management.
//!
//! A [`Transition`] animates a sheet between two heights. It is driven by
//! explicit [`Transition::advance`] calls from the UI thread, so completion is
//! always observed on that thread and tests can step time deterministically.

use std::time::Duration;

use crate::config::{ScreenConfig, StackAnimation};

use super::easing::{ease, lerp, Easing};
use super::spring::SpringCurve;

/// Visual effect applied while the sheet enters or leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionKind {
    /// No transition, instant switch.
    #[default]
    None,
    /// Slide vertically from (or to) the bottom edge.
    SlideVertical,
    /// Fade the content in or out.
    Fade,
    /// Flip the content around its vertical axis.
    Flip,
}

impl From<StackAnimation> for TransitionKind {
    fn from(animation: StackAnimation) -> Self {
        match animation {
            StackAnimation::Default => Self::SlideVertical,
            StackAnimation::None => Self::None,
            StackAnimation::Fade => Self::Fade,
            StackAnimation::Flip => Self::Flip,
        }
    }
}

/// What the transition is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    /// The sheet is being presented.
    Entering,
    /// The sheet is moving between resting heights.
    Settling,
    /// The sheet is being dismissed.
    Leaving,
}

/// Progress curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionCurve {
    /// Time-based easing.
    Eased(Easing),
    /// Damped spring.
    Spring(SpringCurve),
}

impl TransitionCurve {
    fn sample(&self, t: f32) -> f32 {
        match self {
            Self::Eased(easing) => ease(*easing, t),
            Self::Spring(spring) => spring.value(t),
        }
    }
}

/// Result of advancing a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// No transition in progress.
    #[default]
    Idle,
    /// Transition is running.
    Running {
        /// Curved progress; spring curves may exceed 1.0.
        progress: f32,
    },
    /// The transition reached its end during this advance.
    Finished,
}

impl TransitionState {
    /// Check if a transition is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }

    /// Get the current progress if running.
    pub fn progress(&self) -> Option<f32> {
        match self {
            TransitionState::Running { progress } => Some(*progress),
            TransitionState::Finished => Some(1.0),
            TransitionState::Idle => None,
        }
    }
}

/// Visual values sampled from a transition at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Sheet height in points.
    pub height: f32,
    /// Opacity of the sheet content, 0.0 to 1.0.
    pub content_opacity: f32,
    /// Flip rotation, 0.0 facing the user to 1.0 edge-on.
    pub flip_progress: f32,
    /// How far the sheet is "in", 0.0 to 1.0; drives background dimming.
    pub reveal: f32,
}

/// A transition animation controller.
///
/// Manages the timing and progress of one sheet animation.
#[derive(Debug, Clone)]
pub struct Transition {
    kind: TransitionKind,
    direction: TransitionDirection,
    curve: TransitionCurve,
    duration: Duration,
    elapsed: Duration,
    from_height: f32,
    to_height: f32,
    running: bool,
}

impl Transition {
    /// Create an entry transition up to `to_height`.
    pub fn entering(kind: TransitionKind, duration: Duration, to_height: f32) -> Self {
        Self::new(
            kind,
            TransitionDirection::Entering,
            TransitionCurve::Eased(Easing::EaseOutCubic),
            duration,
            0.0,
            to_height,
        )
    }

    /// Create a spring-driven settle between two resting heights.
    pub fn settling(spring: SpringCurve, duration: Duration, from: f32, to: f32) -> Self {
        Self::new(
            TransitionKind::SlideVertical,
            TransitionDirection::Settling,
            TransitionCurve::Spring(spring),
            duration,
            from,
            to,
        )
    }

    /// Create an exit transition down from `from_height`.
    pub fn leaving(kind: TransitionKind, duration: Duration, from_height: f32) -> Self {
        Self::new(
            kind,
            TransitionDirection::Leaving,
            TransitionCurve::Eased(Easing::EaseInCubic),
            duration,
            from_height,
            0.0,
        )
    }

    /// Build the transition a configuration asks for.
    ///
    /// Entry and exit use `stackAnimation`; settles always slide on a spring
    /// with the configured damping.
    pub fn for_config(
        direction: TransitionDirection,
        config: &ScreenConfig,
        from_height: f32,
        to_height: f32,
    ) -> Self {
        let kind = TransitionKind::from(config.stack_animation);
        let duration = config.duration();
        match direction {
            TransitionDirection::Entering => Self::entering(kind, duration, to_height),
            TransitionDirection::Settling => Self::settling(
                SpringCurve::new(config.spring_damping),
                duration,
                from_height,
                to_height,
            ),
            TransitionDirection::Leaving => Self::leaving(kind, duration, from_height),
        }
    }

    /// Create a transition with every parameter spelled out.
    pub fn new(
        kind: TransitionKind,
        direction: TransitionDirection,
        curve: TransitionCurve,
        duration: Duration,
        from_height: f32,
        to_height: f32,
    ) -> Self {
        Self {
            kind,
            direction,
            curve,
            duration,
            elapsed: Duration::ZERO,
            from_height,
            to_height,
            running: true,
        }
    }

    #[inline]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[inline]
    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Height the transition ends at.
    #[inline]
    pub fn target_height(&self) -> f32 {
        self.to_height
    }

    /// Check if the transition is still running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the transition by `dt`.
    ///
    /// Returns `Finished` exactly once, on the advance that reaches the end.
    /// Transitions with kind `None` or a zero duration finish on the first
    /// advance.
    pub fn advance(&mut self, dt: Duration) -> TransitionState {
        if !self.running {
            return TransitionState::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let raw_progress = self.raw_progress();

        if raw_progress >= 1.0 {
            self.running = false;
            return TransitionState::Finished;
        }

        TransitionState::Running {
            progress: self.curve.sample(raw_progress),
        }
    }

    fn raw_progress(&self) -> f32 {
        if self.kind == TransitionKind::None || self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Sample the visual values at a curved progress.
    pub fn frame(&self, progress: f32) -> TransitionFrame {
        let clamped = progress.clamp(0.0, 1.0);
        let height = match (self.kind, self.direction) {
            (_, TransitionDirection::Settling) | (TransitionKind::SlideVertical, _) => {
                lerp(self.from_height, self.to_height, progress)
            }
            // Fade and flip keep the sheet at full height while they run.
            (_, TransitionDirection::Entering) => self.to_height,
            (_, TransitionDirection::Leaving) => self.from_height,
        };

        let (content_opacity, flip_progress) = match (self.kind, self.direction) {
            (TransitionKind::Fade, TransitionDirection::Entering) => (clamped, 0.0),
            (TransitionKind::Fade, TransitionDirection::Leaving) => (1.0 - clamped, 0.0),
            (TransitionKind::Flip, TransitionDirection::Entering) => (1.0, 1.0 - clamped),
            (TransitionKind::Flip, TransitionDirection::Leaving) => (1.0, clamped),
            _ => (1.0, 0.0),
        };

        let reveal = match self.direction {
            TransitionDirection::Entering => clamped,
            TransitionDirection::Settling => 1.0,
            TransitionDirection::Leaving => 1.0 - clamped,
        };

        TransitionFrame {
            height: height.max(0.0),
            content_opacity,
            flip_progress,
            reveal,
        }
    }

    /// The frame at the end of the transition.
    pub fn final_frame(&self) -> TransitionFrame {
        match self.direction {
            TransitionDirection::Leaving => TransitionFrame {
                height: 0.0,
                content_opacity: if self.kind == TransitionKind::Fade { 0.0 } else { 1.0 },
                flip_progress: if self.kind == TransitionKind::Flip { 1.0 } else { 0.0 },
                reveal: 0.0,
            },
            _ => self.frame(1.0),
        }
    }
}
