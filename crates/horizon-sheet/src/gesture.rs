//! Drag-to-resize and drag-to-dismiss.
//!
//! [`DragController`] turns a stream of [`GestureSample`]s into live
//! [`ResizeIntent`]s and, on release, exactly one [`SettleIntent`]. It never
//! touches the sheet itself; the presentation controller applies the intents.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_sheet::config::{ScreenConfig, SheetForm};
//! use horizon_sheet::geometry::compute_heights;
//! use horizon_sheet::gesture::{DragController, GestureSample, SettleIntent};
//! use horizon_sheet_core::{Size, Vector};
//!
//! let config = ScreenConfig {
//!     is_short_form_enabled: true,
//!     short_form_height: 300.0,
//!     long_form_height: Some(700.0),
//!     ..ScreenConfig::default()
//! };
//! let heights = compute_heights(Size::new(400.0, 800.0), &config);
//! let mut drag = DragController::new(heights, &config);
//!
//! drag.begin(300.0, Some(SheetForm::Short));
//! let release = GestureSample::new(Vector::new(0.0, -500.0), Vector::ZERO, Duration::ZERO);
//! assert_eq!(drag.end(&release), Some(SettleIntent::Long));
//! ```

use std::time::Duration;

use horizon_sheet_core::logging::targets;
use horizon_sheet_core::{Point, Rect, Vector};

use crate::config::{ScreenConfig, SheetForm};
use crate::geometry::SheetHeights;

/// Downward release velocity, in points per second, above which a drag dismisses.
pub const DISMISS_VELOCITY_THRESHOLD: f32 = 1000.0;

/// How far ahead, in seconds, the release velocity projects the sheet height.
pub const VELOCITY_PROJECTION: f32 = 0.2;

/// One drag-update sample.
///
/// `translation` is cumulative from the start of the gesture. Positive `y`
/// points down, so dragging the sheet up yields a negative `translation.y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub translation: Vector,
    /// Points per second.
    pub velocity: Vector,
    /// Time since the gesture started.
    pub timestamp: Duration,
}

impl GestureSample {
    pub fn new(translation: Vector, velocity: Vector, timestamp: Duration) -> Self {
        Self {
            translation,
            velocity,
            timestamp,
        }
    }
}

/// Live height proposed while the finger is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeIntent {
    pub height: f32,
}

/// Where the sheet goes once the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettleIntent {
    Short,
    Long,
    Dismiss,
}

impl SettleIntent {
    /// The resting form this intent settles into, or `None` for a dismissal.
    pub fn form(&self) -> Option<SheetForm> {
        match self {
            Self::Short => Some(SheetForm::Short),
            Self::Long => Some(SheetForm::Long),
            Self::Dismiss => None,
        }
    }
}

impl From<SheetForm> for SettleIntent {
    fn from(form: SheetForm) -> Self {
        match form {
            SheetForm::Short => Self::Short,
            SheetForm::Long => Self::Long,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    start_height: f32,
    began_at_short: bool,
}

/// Converts drag samples into resize and settle intents.
#[derive(Debug, Clone)]
pub struct DragController {
    heights: SheetHeights,
    gesture_enabled: bool,
    allows_drag_to_dismiss: bool,
    allows_tap_to_dismiss: bool,
    blocks_background_touches: bool,
    active: Option<ActiveDrag>,
}

impl DragController {
    /// Create a controller for the given geometry and configuration.
    pub fn new(heights: SheetHeights, config: &ScreenConfig) -> Self {
        let mut controller = Self {
            heights,
            gesture_enabled: true,
            allows_drag_to_dismiss: true,
            allows_tap_to_dismiss: true,
            blocks_background_touches: true,
            active: None,
        };
        controller.configure(heights, config);
        controller
    }

    /// Replace the geometry and configuration. An active drag keeps tracking.
    pub fn configure(&mut self, heights: SheetHeights, config: &ScreenConfig) {
        self.heights = heights;
        self.gesture_enabled = config.gesture_enabled;
        self.allows_drag_to_dismiss = config.allows_drag_to_dismiss;
        self.allows_tap_to_dismiss = config.allows_tap_to_dismiss;
        self.blocks_background_touches = config.blocks_background_touches;
        if !self.gesture_enabled {
            self.active = None;
        }
    }

    #[inline]
    pub fn heights(&self) -> &SheetHeights {
        &self.heights
    }

    /// Check whether a drag is being tracked.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start tracking a drag from `start_height`.
    ///
    /// `start_form` is the resting form the sheet was in, if any. Returns
    /// `false` when gestures are disabled. Calling this during an active drag
    /// restarts tracking from the new height.
    pub fn begin(&mut self, start_height: f32, start_form: Option<SheetForm>) -> bool {
        if !self.gesture_enabled {
            tracing::trace!(target: targets::GESTURE, "gesture disabled, ignoring drag");
            return false;
        }
        if self.active.is_some() {
            tracing::debug!(target: targets::GESTURE, start_height, "drag restarted");
        } else {
            tracing::debug!(target: targets::GESTURE, start_height, ?start_form, "drag began");
        }
        self.active = Some(ActiveDrag {
            start_height,
            began_at_short: self.heights.has_short_form && start_form == Some(SheetForm::Short),
        });
        true
    }

    /// Feed one sample and get the live height it proposes.
    pub fn update(&mut self, sample: &GestureSample) -> Option<ResizeIntent> {
        let drag = self.active?;
        let height = self.tracked_height(drag, sample);
        tracing::trace!(
            target: targets::GESTURE,
            translation = sample.translation.y,
            height,
            "drag sample"
        );
        Some(ResizeIntent { height })
    }

    /// End the drag with its final sample and pick the settle target.
    ///
    /// Returns `None` if no drag was being tracked.
    pub fn end(&mut self, sample: &GestureSample) -> Option<SettleIntent> {
        let drag = self.active.take()?;
        let height = self.tracked_height(drag, sample);
        let velocity = sample.velocity.y;

        let intent = if velocity > DISMISS_VELOCITY_THRESHOLD
            && self.allows_drag_to_dismiss
            && (height <= self.heights.short || drag.began_at_short)
        {
            SettleIntent::Dismiss
        } else {
            self.nearest_target(height - velocity * VELOCITY_PROJECTION)
        };

        tracing::debug!(target: targets::GESTURE, height, velocity, ?intent, "drag ended");
        Some(intent)
    }

    /// Abandon the current drag without settling.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!(target: targets::GESTURE, "drag cancelled");
        }
    }

    /// Resolve a tap on the presenting surface.
    ///
    /// A tap dismisses when it lands outside `sheet_frame`, tap-to-dismiss is
    /// allowed and the background does not swallow touches.
    pub fn tap(&self, point: Point, sheet_frame: Rect) -> Option<SettleIntent> {
        if !self.allows_tap_to_dismiss
            || self.blocks_background_touches
            || sheet_frame.contains(point)
        {
            return None;
        }
        tracing::debug!(target: targets::GESTURE, x = point.x, y = point.y, "tap outside sheet");
        Some(SettleIntent::Dismiss)
    }

    fn tracked_height(&self, drag: ActiveDrag, sample: &GestureSample) -> f32 {
        (drag.start_height - sample.translation.y).clamp(0.0, self.heights.max)
    }

    fn nearest_target(&self, projected: f32) -> SettleIntent {
        let mut candidates = vec![(SettleIntent::Long, self.heights.long)];
        if self.heights.has_short_form {
            candidates.push((SettleIntent::Short, self.heights.short));
        }
        if self.allows_drag_to_dismiss {
            candidates.push((SettleIntent::Dismiss, 0.0));
        }

        // Earlier candidates win ties.
        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if (candidate.1 - projected).abs() < (best.1 - projected).abs() {
                best = *candidate;
            }
        }
        best.0
    }
}
