//! The presentation state machine.
//!
//! [`PresentationController`] owns everything visible about a sheet: its
//! phase, resting form, live height, background dimming and whether touches
//! behind it are blocked. It runs the entry, settle and exit transitions and
//! reports their completion from [`PresentationController::tick`].
//!
//! ```text
//! Unpresented --present--> Presenting --done--> Presented(form)
//!     Presented(form) --settle--> Presented(form')
//!     Presented --settle(Dismiss)--> Dismissing --done + ack--> Dismissed
//! ```
//!
//! # Acknowledgment
//!
//! Presenting and dismissing open an acknowledgment window that only the
//! host's [`finish_transitioning`](PresentationController::finish_transitioning)
//! closes. Requests arriving while a window is open, or while any transition
//! is still running, are queued and replayed in FIFO order afterwards.
//! Nothing is dropped and no running animation is interrupted.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use horizon_sheet_core::logging::{span_names, targets};
use horizon_sheet_core::{Color, CornerRadii, PerfSpan, Rect, Size};

use crate::animation::{Transition, TransitionDirection, TransitionState};
use crate::config::{ScreenConfig, SheetForm};
use crate::geometry::{compute_heights, sheet_frame, SheetHeights};
use crate::gesture::SettleIntent;
use crate::screen::{DefaultTransitionDelegate, TransitionDelegate};

/// Phase of the presentation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationPhase {
    Unpresented,
    Presenting,
    Presented,
    Dismissing,
    Dismissed,
}

/// The form the sheet is in, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentForm {
    Short,
    Long,
    Dismissing,
    Dismissed,
}

impl From<SheetForm> for CurrentForm {
    fn from(form: SheetForm) -> Self {
        match form {
            SheetForm::Short => Self::Short,
            SheetForm::Long => Self::Long,
        }
    }
}

/// Completion reported by [`PresentationController::tick`] and
/// [`PresentationController::finish_transitioning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEvent {
    /// The entry transition finished; the sheet rests in this form.
    Presented(SheetForm),
    /// A settle transition finished in this form.
    Settled(SheetForm),
    /// The sheet is gone.
    Dismissed,
}

/// What happened to a `present` or `settle` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The request took effect now.
    Started,
    /// The request waits for an acknowledgment or a running transition.
    Queued,
    /// The request does not apply in the current phase.
    Ignored,
}

#[derive(Debug, Clone)]
enum PendingRequest {
    Present {
        config: ScreenConfig,
        form: Option<SheetForm>,
    },
    Settle(SettleIntent),
}

/// Drives a single sheet through presentation, resizing and dismissal.
pub struct PresentationController {
    config: ScreenConfig,
    delegate: Arc<dyn TransitionDelegate>,
    container: Size,
    heights: SheetHeights,
    phase: PresentationPhase,
    form: Option<SheetForm>,
    height: f32,
    dim_alpha: f32,
    content_opacity: f32,
    flip_progress: f32,
    blocking: bool,
    animation: Option<Transition>,
    settle_target: Option<SheetForm>,
    awaiting_ack: bool,
    dismiss_animation_done: bool,
    queue: VecDeque<PendingRequest>,
}

impl fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("phase", &self.phase)
            .field("form", &self.form)
            .field("height", &self.height)
            .field("dim_alpha", &self.dim_alpha)
            .field("awaiting_ack", &self.awaiting_ack)
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}

impl PresentationController {
    /// Create a controller that builds its transitions from the configuration.
    pub fn new(config: ScreenConfig) -> Self {
        Self::with_delegate(config, Arc::new(DefaultTransitionDelegate))
    }

    /// Create a controller whose transitions come from `delegate`.
    pub fn with_delegate(config: ScreenConfig, delegate: Arc<dyn TransitionDelegate>) -> Self {
        let config = config.normalized();
        let container = Size::ZERO;
        let heights = compute_heights(container, &config);
        Self {
            config,
            delegate,
            container,
            heights,
            phase: PresentationPhase::Unpresented,
            form: None,
            height: 0.0,
            dim_alpha: 0.0,
            content_opacity: 1.0,
            flip_progress: 0.0,
            blocking: false,
            animation: None,
            settle_target: None,
            awaiting_ack: false,
            dismiss_animation_done: false,
            queue: VecDeque::new(),
        }
    }

    /// Replace the source of transitions for future requests.
    pub fn set_transition_delegate(&mut self, delegate: Arc<dyn TransitionDelegate>) {
        self.delegate = delegate;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[inline]
    pub fn phase(&self) -> PresentationPhase {
        self.phase
    }

    /// The current form, or `None` before the first presentation completes.
    pub fn current_form(&self) -> Option<CurrentForm> {
        match self.phase {
            PresentationPhase::Dismissing => Some(CurrentForm::Dismissing),
            PresentationPhase::Dismissed => Some(CurrentForm::Dismissed),
            _ => self.form.map(CurrentForm::from),
        }
    }

    /// The resting form, if the sheet has reached one.
    #[inline]
    pub fn resting_form(&self) -> Option<SheetForm> {
        self.form
    }

    #[inline]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    #[inline]
    pub fn heights(&self) -> &SheetHeights {
        &self.heights
    }

    #[inline]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Current sheet height in points.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The sheet's frame inside the container.
    pub fn frame(&self) -> Rect {
        sheet_frame(self.container, self.height)
    }

    pub fn corner_radii(&self) -> CornerRadii {
        self.heights.corner_radii(self.height)
    }

    /// Alpha of the dimming layer behind the sheet.
    #[inline]
    pub fn dim_alpha(&self) -> f32 {
        self.dim_alpha
    }

    /// The dimming layer's color with its current alpha.
    pub fn dimming_color(&self) -> Color {
        self.config.background_color.with_alpha(self.dim_alpha)
    }

    #[inline]
    pub fn content_opacity(&self) -> f32 {
        self.content_opacity
    }

    #[inline]
    pub fn flip_progress(&self) -> f32 {
        self.flip_progress
    }

    /// Whether touches behind the sheet are swallowed.
    #[inline]
    pub fn blocks_background_touches(&self) -> bool {
        self.blocking
    }

    #[inline]
    pub fn is_awaiting_acknowledgment(&self) -> bool {
        self.awaiting_ack
    }

    /// Number of queued requests.
    #[inline]
    pub fn pending_requests(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[inline]
    pub fn is_dismissed(&self) -> bool {
        self.phase == PresentationPhase::Dismissed
    }

    /// Whether the sheet is at rest, acknowledged, and may be dragged or tapped.
    ///
    /// Until the host acknowledges the entry, a gesture's settle would be
    /// queued and leave the sheet between resting heights.
    pub fn is_interactive(&self) -> bool {
        self.is_at_rest() && !self.awaiting_ack
    }

    fn is_at_rest(&self) -> bool {
        self.phase == PresentationPhase::Presented && self.animation.is_none()
    }

    // -------------------------------------------------------------------------
    // Geometry and configuration
    // -------------------------------------------------------------------------

    /// Update the presenting surface's size.
    pub fn set_container_size(&mut self, size: Size) {
        if self.container == size {
            return;
        }
        tracing::debug!(
            target: targets::PRESENTATION,
            width = size.width,
            height = size.height,
            "container resized"
        );
        self.container = size;
        self.recompute_geometry();
    }

    /// Replace the configuration.
    ///
    /// Ignored once the sheet is dismissed.
    pub fn update_config(&mut self, config: ScreenConfig) {
        if self.is_dismissed() {
            tracing::warn!(
                target: targets::PRESENTATION,
                "configuration change after dismissal ignored"
            );
            return;
        }
        self.config = config.normalized();
        if matches!(
            self.phase,
            PresentationPhase::Presenting | PresentationPhase::Presented
        ) {
            self.blocking = self.config.blocks_background_touches;
        }
        self.recompute_geometry();
    }

    fn recompute_geometry(&mut self) {
        self.heights = compute_heights(self.container, &self.config);
        if self.form == Some(SheetForm::Short) && !self.heights.has_short_form {
            self.form = Some(SheetForm::Long);
        }
        if self.is_at_rest() {
            if let Some(form) = self.form {
                self.height = self.heights.height_for(form);
                self.dim_alpha = self.resting_dim();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Present the sheet.
    ///
    /// `initial_form` defaults to the configuration's starting form. On an
    /// already presented sheet the configuration is applied without animating.
    pub fn present(
        &mut self,
        config: ScreenConfig,
        initial_form: Option<SheetForm>,
    ) -> RequestOutcome {
        if matches!(
            self.phase,
            PresentationPhase::Dismissing | PresentationPhase::Dismissed
        ) {
            tracing::warn!(target: targets::PRESENTATION, phase = ?self.phase, "present after dismissal ignored");
            return RequestOutcome::Ignored;
        }
        if self.must_queue() {
            tracing::warn!(
                target: targets::PRESENTATION,
                pending = self.queue.len() + 1,
                "present before acknowledgment, queued"
            );
            self.queue.push_back(PendingRequest::Present {
                config,
                form: initial_form,
            });
            return RequestOutcome::Queued;
        }
        if self.phase != PresentationPhase::Unpresented {
            tracing::debug!(target: targets::PRESENTATION, "already presented, applying configuration");
            self.update_config(config);
            return RequestOutcome::Ignored;
        }

        self.config = config.normalized();
        self.heights = compute_heights(self.container, &self.config);
        let form = match initial_form.unwrap_or_else(|| self.config.initial_form()) {
            SheetForm::Short if !self.heights.has_short_form => SheetForm::Long,
            form => form,
        };
        let target = self.heights.height_for(form);

        let transition = self.delegate.animation_controller(
            TransitionDirection::Entering,
            &self.config,
            0.0,
            target,
        );
        self.apply_frame(&transition, 0.0);

        tracing::debug!(target: targets::PRESENTATION, ?form, target, "presenting");
        self.phase = PresentationPhase::Presenting;
        self.blocking = self.config.blocks_background_touches;
        self.settle_target = Some(form);
        self.animation = Some(transition);
        self.awaiting_ack = true;
        RequestOutcome::Started
    }

    /// Show a live drag height without changing the resting form.
    pub fn apply_resize(&mut self, height: f32) {
        if !self.is_interactive() {
            tracing::trace!(target: targets::PRESENTATION, phase = ?self.phase, "resize ignored");
            return;
        }
        self.height = if height.is_finite() {
            height.clamp(0.0, self.heights.max)
        } else {
            self.heights.height_for(self.form.unwrap_or(SheetForm::Long))
        };
        self.dim_alpha = self.dim_for_height(self.height);
    }

    /// Animate to a resting form, or dismiss.
    pub fn settle(&mut self, target: SettleIntent) -> RequestOutcome {
        match self.phase {
            PresentationPhase::Unpresented => {
                tracing::warn!(target: targets::PRESENTATION, ?target, "settle before presentation ignored");
                return RequestOutcome::Ignored;
            }
            PresentationPhase::Dismissing | PresentationPhase::Dismissed => {
                tracing::warn!(target: targets::PRESENTATION, ?target, phase = ?self.phase, "settle after dismissal ignored");
                return RequestOutcome::Ignored;
            }
            PresentationPhase::Presenting | PresentationPhase::Presented => {}
        }
        if self.must_queue() {
            tracing::debug!(
                target: targets::PRESENTATION,
                ?target,
                pending = self.queue.len() + 1,
                "settle queued"
            );
            self.queue.push_back(PendingRequest::Settle(target));
            return RequestOutcome::Queued;
        }

        match target.form() {
            None => {
                let transition = self.delegate.animation_controller(
                    TransitionDirection::Leaving,
                    &self.config,
                    self.height,
                    0.0,
                );
                tracing::debug!(target: targets::PRESENTATION, from = self.height, "dismissing");
                self.phase = PresentationPhase::Dismissing;
                self.settle_target = None;
                self.animation = Some(transition);
                self.awaiting_ack = true;
                self.dismiss_animation_done = false;
            }
            Some(form) => {
                let form = if self.heights.has_short_form {
                    form
                } else {
                    SheetForm::Long
                };
                let to = self.heights.height_for(form);
                let transition = self.delegate.animation_controller(
                    TransitionDirection::Settling,
                    &self.config,
                    self.height,
                    to,
                );
                tracing::debug!(target: targets::PRESENTATION, ?form, from = self.height, to, "settling");
                self.settle_target = Some(form);
                self.animation = Some(transition);
            }
        }
        RequestOutcome::Started
    }

    fn must_queue(&self) -> bool {
        self.awaiting_ack || self.animation.is_some()
    }

    // -------------------------------------------------------------------------
    // Time and acknowledgment
    // -------------------------------------------------------------------------

    /// Advance the running transition and report what completed.
    pub fn tick(&mut self, dt: Duration) -> Vec<PresentationEvent> {
        let mut events = Vec::new();
        let Some(mut transition) = self.animation.take() else {
            return events;
        };
        let _span = PerfSpan::new(span_names::TICK);

        match transition.advance(dt) {
            TransitionState::Running { progress } => {
                self.apply_frame(&transition, progress);
                self.animation = Some(transition);
            }
            TransitionState::Finished => {
                let frame = transition.final_frame();
                self.height = frame.height;
                self.content_opacity = frame.content_opacity;
                self.flip_progress = frame.flip_progress;
                self.complete(transition.direction(), &mut events);
                if !self.awaiting_ack {
                    self.drain_queue();
                }
            }
            TransitionState::Idle => {}
        }
        events
    }

    fn complete(&mut self, direction: TransitionDirection, events: &mut Vec<PresentationEvent>) {
        match direction {
            TransitionDirection::Entering | TransitionDirection::Settling => {
                let form = self.settle_target.take().unwrap_or(SheetForm::Long);
                self.form = Some(form);
                self.height = self.heights.height_for(form);
                self.dim_alpha = self.resting_dim();
                if direction == TransitionDirection::Entering {
                    tracing::debug!(target: targets::PRESENTATION, ?form, "presented");
                    self.phase = PresentationPhase::Presented;
                    events.push(PresentationEvent::Presented(form));
                } else {
                    tracing::debug!(target: targets::PRESENTATION, ?form, "settled");
                    events.push(PresentationEvent::Settled(form));
                }
            }
            TransitionDirection::Leaving => {
                self.dim_alpha = 0.0;
                self.dismiss_animation_done = true;
                if self.awaiting_ack {
                    tracing::debug!(target: targets::PRESENTATION, "dismiss animation done, awaiting acknowledgment");
                } else {
                    self.finish_dismissal(events);
                }
            }
        }
    }

    /// The host's acknowledgment that its transition coordinator finished.
    ///
    /// Completes a pending dismissal and replays queued requests.
    pub fn finish_transitioning(&mut self) -> Vec<PresentationEvent> {
        let _span = PerfSpan::new(span_names::FINISH_TRANSITIONING);
        let mut events = Vec::new();

        if !self.awaiting_ack {
            tracing::debug!(target: targets::PRESENTATION, "acknowledgment without a pending transition");
        }
        self.awaiting_ack = false;

        if self.phase == PresentationPhase::Dismissing && self.dismiss_animation_done {
            self.finish_dismissal(&mut events);
        }
        if self.animation.is_none() {
            self.drain_queue();
        }
        events
    }

    fn finish_dismissal(&mut self, events: &mut Vec<PresentationEvent>) {
        tracing::debug!(target: targets::PRESENTATION, "dismissed");
        self.phase = PresentationPhase::Dismissed;
        self.form = None;
        self.height = 0.0;
        self.dim_alpha = 0.0;
        self.blocking = false;
        events.push(PresentationEvent::Dismissed);
    }

    fn drain_queue(&mut self) {
        let pending: Vec<_> = self.queue.drain(..).collect();
        if pending.is_empty() {
            return;
        }
        tracing::debug!(target: targets::PRESENTATION, count = pending.len(), "replaying queued requests");
        for request in pending {
            match request {
                PendingRequest::Present { config, form } => {
                    self.present(config, form);
                }
                PendingRequest::Settle(target) => {
                    self.settle(target);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Visuals
    // -------------------------------------------------------------------------

    fn apply_frame(&mut self, transition: &Transition, progress: f32) {
        let frame = transition.frame(progress);
        self.height = frame.height.min(self.heights.max.max(transition.target_height()));
        self.content_opacity = frame.content_opacity;
        self.flip_progress = frame.flip_progress;
        self.dim_alpha = match transition.direction() {
            TransitionDirection::Settling => self.dim_for_height(frame.height),
            _ => self.config.background_opacity * frame.reveal,
        };
    }

    fn resting_dim(&self) -> f32 {
        self.config.background_opacity
    }

    /// Dimming fades out as the sheet is dragged below its short form.
    fn dim_for_height(&self, height: f32) -> f32 {
        let opacity = self.config.background_opacity;
        if self.heights.short <= 0.0 {
            return opacity;
        }
        opacity * (height / self.heights.short).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(400.0, 800.0);
    const STEP: Duration = Duration::from_millis(100);

    fn short_long_config() -> ScreenConfig {
        ScreenConfig {
            is_short_form_enabled: true,
            short_form_height: 300.0,
            long_form_height: Some(700.0),
            start_from_short_form: true,
            ..ScreenConfig::default()
        }
    }

    fn controller(config: &ScreenConfig) -> PresentationController {
        let mut controller = PresentationController::new(config.clone());
        controller.set_container_size(CONTAINER);
        controller
    }

    /// Tick until the running transition completes, collecting events.
    fn run(controller: &mut PresentationController) -> Vec<PresentationEvent> {
        let mut events = Vec::new();
        for _ in 0..20 {
            events.extend(controller.tick(STEP));
            if !controller.is_animating() {
                break;
            }
        }
        events
    }

    fn presented(config: &ScreenConfig) -> PresentationController {
        let mut controller = controller(config);
        controller.present(config.clone(), None);
        run(&mut controller);
        controller.finish_transitioning();
        controller
    }

    #[test]
    fn test_present_starts_in_short_form() {
        let config = short_long_config();
        let mut controller = controller(&config);

        assert_eq!(controller.present(config.clone(), None), RequestOutcome::Started);
        assert_eq!(controller.phase(), PresentationPhase::Presenting);
        assert!(controller.blocks_background_touches());
        assert_eq!(controller.height(), 0.0);

        let events = run(&mut controller);
        assert_eq!(events, vec![PresentationEvent::Presented(SheetForm::Short)]);
        assert_eq!(controller.phase(), PresentationPhase::Presented);
        assert_eq!(controller.current_form(), Some(CurrentForm::Short));
        assert_eq!(controller.height(), 300.0);
        assert!((controller.dim_alpha() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_dimming_ramps_during_entry() {
        let config = short_long_config();
        let mut controller = controller(&config);
        controller.present(config, None);
        controller.tick(Duration::from_millis(250));
        let dim = controller.dim_alpha();
        assert!(dim > 0.0 && dim < 0.7, "dim {dim}");
    }

    #[test]
    fn test_second_present_is_queued() {
        let config = short_long_config();
        let mut controller = controller(&config);
        controller.present(config.clone(), None);
        assert_eq!(controller.present(config.clone(), None), RequestOutcome::Queued);
        assert_eq!(controller.pending_requests(), 1);

        let events = run(&mut controller);
        assert_eq!(events.len(), 1);
        assert_eq!(controller.pending_requests(), 1);

        assert!(controller.finish_transitioning().is_empty());
        assert_eq!(controller.pending_requests(), 0);
        assert_eq!(controller.phase(), PresentationPhase::Presented);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_settle_between_forms() {
        let config = short_long_config();
        let mut controller = presented(&config);

        assert_eq!(controller.settle(SettleIntent::Long), RequestOutcome::Started);
        let events = run(&mut controller);
        assert_eq!(events, vec![PresentationEvent::Settled(SheetForm::Long)]);
        assert_eq!(controller.height(), 700.0);
        assert!(!controller.is_awaiting_acknowledgment());
    }

    #[test]
    fn test_settle_during_settle_is_queued() {
        let config = short_long_config();
        let mut controller = presented(&config);
        controller.settle(SettleIntent::Long);
        assert_eq!(controller.settle(SettleIntent::Short), RequestOutcome::Queued);

        let mut events = run(&mut controller);
        events.extend(run(&mut controller));
        assert_eq!(
            events,
            vec![
                PresentationEvent::Settled(SheetForm::Long),
                PresentationEvent::Settled(SheetForm::Short)
            ]
        );
    }

    #[test]
    fn test_dismiss_needs_animation_and_acknowledgment() {
        let config = short_long_config();
        let mut controller = presented(&config);

        assert_eq!(controller.settle(SettleIntent::Dismiss), RequestOutcome::Started);
        assert_eq!(controller.current_form(), Some(CurrentForm::Dismissing));
        assert!(run(&mut controller).is_empty());
        assert_eq!(controller.phase(), PresentationPhase::Dismissing);
        assert_eq!(controller.height(), 0.0);

        assert_eq!(controller.finish_transitioning(), vec![PresentationEvent::Dismissed]);
        assert!(controller.is_dismissed());
        assert!(!controller.blocks_background_touches());
        assert_eq!(controller.current_form(), Some(CurrentForm::Dismissed));
    }

    #[test]
    fn test_early_acknowledgment_dismisses_on_animation_end() {
        let config = short_long_config();
        let mut controller = presented(&config);
        controller.settle(SettleIntent::Dismiss);
        assert!(controller.finish_transitioning().is_empty());
        assert_eq!(run(&mut controller), vec![PresentationEvent::Dismissed]);
    }

    #[test]
    fn test_dismiss_during_presentation_is_not_lost() {
        let config = short_long_config();
        let mut controller = controller(&config);
        controller.present(config, None);
        assert_eq!(controller.settle(SettleIntent::Dismiss), RequestOutcome::Queued);

        run(&mut controller);
        assert_eq!(controller.phase(), PresentationPhase::Presented);
        assert!(controller.finish_transitioning().is_empty());
        assert_eq!(controller.phase(), PresentationPhase::Dismissing);

        run(&mut controller);
        assert_eq!(controller.finish_transitioning(), vec![PresentationEvent::Dismissed]);
    }

    #[test]
    fn test_requests_after_dismissal_are_ignored() {
        let config = short_long_config();
        let mut controller = presented(&config);
        controller.settle(SettleIntent::Dismiss);
        run(&mut controller);
        controller.finish_transitioning();

        assert_eq!(controller.settle(SettleIntent::Long), RequestOutcome::Ignored);
        assert_eq!(controller.present(config, None), RequestOutcome::Ignored);
        controller.update_config(ScreenConfig::default());
        assert!(controller.config().is_short_form_enabled);
    }

    #[test]
    fn test_apply_resize_keeps_form_and_dims() {
        let config = short_long_config();
        let mut controller = presented(&config);

        controller.apply_resize(150.0);
        assert_eq!(controller.height(), 150.0);
        assert_eq!(controller.current_form(), Some(CurrentForm::Short));
        assert!((controller.dim_alpha() - 0.35).abs() < 1e-5);

        controller.apply_resize(5000.0);
        assert_eq!(controller.height(), 700.0);
        assert!((controller.dim_alpha() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_resize_waits_for_acknowledgment() {
        let config = short_long_config();
        let mut controller = controller(&config);
        controller.present(config.clone(), None);
        run(&mut controller);
        assert!(controller.is_awaiting_acknowledgment());
        assert!(!controller.is_interactive());

        controller.apply_resize(500.0);
        assert_eq!(controller.height(), 300.0);

        controller.finish_transitioning();
        assert!(controller.is_interactive());
        controller.apply_resize(500.0);
        assert_eq!(controller.height(), 500.0);
    }

    #[test]
    fn test_container_resize_snaps_idle_sheet() {
        let config = ScreenConfig::default();
        let mut controller = presented(&config);
        assert_eq!(controller.height(), 800.0);
        assert!(controller.corner_radii().is_zero());

        controller.set_container_size(Size::new(400.0, 600.0));
        assert_eq!(controller.height(), 600.0);
        assert_eq!(controller.frame(), Rect::new(0.0, 0.0, 400.0, 600.0));
    }

    #[test]
    fn test_update_config_without_short_form_moves_to_long() {
        let config = short_long_config();
        let mut controller = presented(&config);
        controller.update_config(ScreenConfig {
            is_short_form_enabled: false,
            ..config
        });
        assert_eq!(controller.current_form(), Some(CurrentForm::Long));
        assert_eq!(controller.height(), 700.0);
    }

    #[test]
    fn test_none_animation_completes_on_next_tick() {
        let config = ScreenConfig {
            stack_animation: crate::config::StackAnimation::None,
            ..short_long_config()
        };
        let mut controller = controller(&config);
        controller.present(config, None);
        assert_eq!(
            controller.tick(Duration::ZERO),
            vec![PresentationEvent::Presented(SheetForm::Short)]
        );
    }

    #[test]
    fn test_fade_keeps_height_and_ramps_opacity() {
        let config = ScreenConfig {
            stack_animation: crate::config::StackAnimation::Fade,
            ..short_long_config()
        };
        let mut controller = controller(&config);
        controller.present(config, None);
        assert_eq!(controller.content_opacity(), 0.0);
        controller.tick(Duration::from_millis(250));
        assert_eq!(controller.height(), 300.0);
        assert!(controller.content_opacity() > 0.0 && controller.content_opacity() < 1.0);
    }
}
