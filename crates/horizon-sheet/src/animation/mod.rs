//! Animation support for sheet transitions.
//!
//! This module provides the easing curves used for entry and exit, the spring
//! curve used for settling after a drag, and the [`Transition`] driver that
//! turns elapsed time into sheet heights, content opacity and dimming.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_sheet::animation::{Transition, TransitionKind, TransitionState};
//!
//! let mut transition =
//!     Transition::entering(TransitionKind::SlideVertical, Duration::from_millis(200), 600.0);
//!
//! assert!(transition.advance(Duration::from_millis(100)).is_running());
//! assert_eq!(transition.advance(Duration::from_millis(100)), TransitionState::Finished);
//! ```

mod easing;
mod spring;
mod transition;

pub use easing::{ease, lerp, lerp_eased, Easing};
pub use spring::{SpringCurve, SETTLE_EPSILON};
pub use transition::{
    Transition, TransitionCurve, TransitionDirection, TransitionFrame, TransitionKind,
    TransitionState,
};
