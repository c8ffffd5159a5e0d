//! The sheet screen.
//!
//! A [`Screen`] wraps one host content view and presents it as a sheet. It
//! wires the lifecycle, the presentation controller and the drag controller
//! together and reports `onAppear` / `onDismissed` through its signals.
//!
//! The host drives it from the UI thread:
//!
//! - [`Screen::set_active`] and [`Screen::set_config`] when props change,
//! - [`Screen::tick`] every frame,
//! - [`Screen::notify_finish_transitioning`] when its own transition
//!   coordinator completes,
//! - the drag and tap methods as touches arrive.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_sheet::config::ScreenConfig;
//! use horizon_sheet::screen::{ContentView, HostSurface, PresentingSurface, Screen};
//! use horizon_sheet_core::Size;
//!
//! let surface: Arc<dyn PresentingSurface> = Arc::new(HostSurface::new(Size::new(400.0, 800.0)));
//! let mut screen = Screen::with_default_delegate(ContentView::new(1), ScreenConfig::default());
//! screen.attach_surface(&surface);
//!
//! screen.appeared.connect(|_| println!("on screen"));
//! screen.set_active(true);
//! while screen.presentation().is_animating() {
//!     screen.tick(Duration::from_millis(16));
//! }
//! assert_eq!(screen.presentation().height(), 800.0);
//! ```

mod content;
mod delegate;

pub use content::{ContentView, HostSurface, PresentingSurface};
pub use delegate::{DefaultTransitionDelegate, TransitionDelegate};

use std::sync::Arc;
use std::time::Duration;

use horizon_sheet_core::logging::{span_names, targets};
use horizon_sheet_core::{PerfSpan, Point, Signal};

use crate::config::ScreenConfig;
use crate::gesture::{DragController, GestureSample, ResizeIntent, SettleIntent};
use crate::lifecycle::{LifecycleCommand, LifecycleEvent, ScreenLifecycle};
use crate::presentation::{PresentationController, PresentationEvent};

/// A content view presented as a sheet.
pub struct Screen {
    content: ContentView,
    config: ScreenConfig,
    surface_attached: bool,
    presentation: PresentationController,
    drag: DragController,
    lifecycle: ScreenLifecycle,

    /// Emitted once, when the sheet finishes appearing.
    pub appeared: Arc<Signal<()>>,
    /// Emitted once, when the sheet is gone.
    pub dismissed_signal: Arc<Signal<()>>,
}

static_assertions::assert_impl_all!(Screen: Send);

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("content", &self.content)
            .field("lifecycle", &self.lifecycle.state())
            .field("presentation", &self.presentation)
            .finish_non_exhaustive()
    }
}

impl Screen {
    /// Create a screen for `content`.
    ///
    /// The delegate supplies the presentation controller and every transition.
    pub fn new(
        content: ContentView,
        config: ScreenConfig,
        delegate: Arc<dyn TransitionDelegate>,
    ) -> Self {
        let config = config.normalized();
        let mut presentation = delegate.presentation_controller(&config);
        presentation.set_transition_delegate(delegate);
        let drag = DragController::new(*presentation.heights(), &config);

        Self {
            content,
            config,
            surface_attached: false,
            presentation,
            drag,
            lifecycle: ScreenLifecycle::new(),
            appeared: Arc::new(Signal::new()),
            dismissed_signal: Arc::new(Signal::new()),
        }
    }

    /// Create a screen whose transitions follow its configuration.
    pub fn with_default_delegate(content: ContentView, config: ScreenConfig) -> Self {
        Self::new(content, config, Arc::new(DefaultTransitionDelegate))
    }

    #[inline]
    pub fn content(&self) -> &ContentView {
        &self.content
    }

    #[inline]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    #[inline]
    pub fn presentation(&self) -> &PresentationController {
        &self.presentation
    }

    #[inline]
    pub fn lifecycle(&self) -> &ScreenLifecycle {
        &self.lifecycle
    }

    /// Whether the screen reached its terminal state. Hosts may poll this.
    #[inline]
    pub fn is_dismissed(&self) -> bool {
        self.lifecycle.is_dismissed()
    }

    /// Attach the surface the sheet is presented over.
    ///
    /// Only the first attach takes effect. Returns whether this one did.
    pub fn attach_surface(&mut self, surface: &Arc<dyn PresentingSurface>) -> bool {
        if self.surface_attached {
            tracing::warn!(
                target: targets::SCREEN,
                tag = self.content.tag(),
                "presenting surface already attached"
            );
            return false;
        }
        self.surface_attached = true;
        self.content.set_parent(surface);
        tracing::debug!(target: targets::SCREEN, tag = self.content.tag(), "surface attached");
        self.sync_container();
        true
    }

    /// Set whether the host wants the screen on screen.
    pub fn set_active(&mut self, active: bool) {
        let command = self.lifecycle.set_active(active);
        self.execute(command);
    }

    /// Replace the configuration. Ignored after dismissal.
    pub fn set_config(&mut self, config: ScreenConfig) {
        if self.is_dismissed() {
            tracing::warn!(
                target: targets::SCREEN,
                tag = self.content.tag(),
                "configuration change after dismissal ignored"
            );
            return;
        }
        self.config = config.normalized();
        self.presentation.update_config(self.config.clone());
        self.drag.configure(*self.presentation.heights(), &self.config);
    }

    /// The host's transition coordinator finished.
    pub fn notify_finish_transitioning(&mut self) {
        let events = self.presentation.finish_transitioning();
        self.dispatch(events);
    }

    /// Advance animations by `dt` and report what completed.
    pub fn tick(&mut self, dt: Duration) -> Vec<PresentationEvent> {
        self.sync_container();
        let events = self.presentation.tick(dt);
        self.dispatch(events.clone());
        events
    }

    /// Start a drag on the sheet. Returns `false` if the sheet is not at rest,
    /// its last transition is unacknowledged, or gestures are disabled.
    pub fn begin_drag(&mut self) -> bool {
        if !self.presentation.is_interactive() {
            tracing::trace!(target: targets::SCREEN, "drag while not interactive ignored");
            return false;
        }
        self.drag
            .begin(self.presentation.height(), self.presentation.resting_form())
    }

    /// Feed one drag sample.
    pub fn drag_update(&mut self, sample: GestureSample) -> Option<ResizeIntent> {
        let intent = self.drag.update(&sample)?;
        self.presentation.apply_resize(intent.height);
        Some(intent)
    }

    /// Release the drag and settle the sheet.
    pub fn end_drag(&mut self, sample: GestureSample) -> Option<SettleIntent> {
        let _span = PerfSpan::new(span_names::DRAG);
        let intent = self.drag.end(&sample)?;
        self.apply_settle(intent);
        Some(intent)
    }

    /// A tap on the presenting surface at `point`.
    pub fn tap(&mut self, point: Point) -> Option<SettleIntent> {
        if !self.presentation.is_interactive() {
            return None;
        }
        let intent = self.drag.tap(point, self.presentation.frame())?;
        self.apply_settle(intent);
        Some(intent)
    }

    fn apply_settle(&mut self, intent: SettleIntent) {
        if intent == SettleIntent::Dismiss && !self.lifecycle.on_dismiss_started() {
            tracing::debug!(target: targets::SCREEN, state = ?self.lifecycle.state(), "gesture dismissal ignored");
            return;
        }
        self.presentation.settle(intent);
    }

    fn execute(&mut self, command: Option<LifecycleCommand>) {
        match command {
            Some(LifecycleCommand::Present) => {
                self.sync_container();
                self.presentation.present(self.config.clone(), None);
            }
            Some(LifecycleCommand::Dismiss) => {
                self.drag.cancel();
                self.presentation.settle(SettleIntent::Dismiss);
            }
            None => {}
        }
    }

    fn dispatch(&mut self, events: Vec<PresentationEvent>) {
        for event in events {
            match event {
                PresentationEvent::Presented(form) => {
                    if let Some(LifecycleEvent::Appear) = self.lifecycle.on_presented() {
                        tracing::debug!(target: targets::SCREEN, tag = self.content.tag(), ?form, "appeared");
                        self.appeared.emit(());
                    }
                    let command = self.lifecycle.reconcile();
                    self.execute(command);
                }
                PresentationEvent::Settled(form) => {
                    tracing::trace!(target: targets::SCREEN, ?form, "settled");
                }
                PresentationEvent::Dismissed => {
                    if let Some(LifecycleEvent::Dismissed) = self.lifecycle.on_dismissed() {
                        tracing::debug!(target: targets::SCREEN, tag = self.content.tag(), "dismissed");
                        self.dismissed_signal.emit(());
                    }
                }
            }
        }
    }

    fn sync_container(&mut self) {
        let Some(bounds) = self.content.parent().map(|surface| surface.bounds()) else {
            return;
        };
        if bounds != self.presentation.container_size() {
            self.presentation.set_container_size(bounds);
            self.drag.configure(*self.presentation.heights(), &self.config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::presentation::PresentationPhase;
    use horizon_sheet_core::Size;

    const STEP: Duration = Duration::from_millis(100);

    fn surface() -> Arc<dyn PresentingSurface> {
        Arc::new(HostSurface::new(Size::new(400.0, 800.0)))
    }

    fn settle(screen: &mut Screen) {
        for _ in 0..20 {
            screen.tick(STEP);
            if !screen.presentation().is_animating() {
                break;
            }
        }
    }

    #[test]
    fn test_second_attach_is_ignored() {
        let first = surface();
        let second = surface();
        let mut screen = Screen::with_default_delegate(ContentView::new(1), ScreenConfig::default());
        assert!(screen.attach_surface(&first));
        assert!(!screen.attach_surface(&second));
        assert!(Arc::ptr_eq(&screen.content().parent().unwrap(), &first));
    }

    #[test]
    fn test_appear_fires_after_entry() {
        let surface = surface();
        let mut screen = Screen::with_default_delegate(ContentView::new(1), ScreenConfig::default());
        screen.attach_surface(&surface);

        let appeared = Arc::new(AtomicUsize::new(0));
        let counter = appeared.clone();
        screen.appeared.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        screen.set_active(true);
        assert_eq!(appeared.load(Ordering::SeqCst), 0);
        settle(&mut screen);
        assert_eq!(appeared.load(Ordering::SeqCst), 1);
        assert_eq!(screen.presentation().phase(), PresentationPhase::Presented);
    }

    #[test]
    fn test_config_after_dismissal_is_ignored() {
        let surface = surface();
        let mut screen = Screen::with_default_delegate(ContentView::new(1), ScreenConfig::default());
        screen.attach_surface(&surface);
        screen.set_active(true);
        settle(&mut screen);
        screen.notify_finish_transitioning();
        screen.set_active(false);
        settle(&mut screen);
        screen.notify_finish_transitioning();
        assert!(screen.is_dismissed());

        screen.set_config(ScreenConfig {
            is_short_form_enabled: true,
            ..ScreenConfig::default()
        });
        assert!(!screen.config().is_short_form_enabled);
    }

    #[test]
    fn test_surface_resize_is_picked_up_on_tick() {
        let host = Arc::new(HostSurface::new(Size::new(400.0, 800.0)));
        let surface: Arc<dyn PresentingSurface> = host.clone();
        let mut screen = Screen::with_default_delegate(ContentView::new(1), ScreenConfig::default());
        screen.attach_surface(&surface);
        screen.set_active(true);
        settle(&mut screen);

        host.set_bounds(Size::new(800.0, 400.0));
        screen.tick(STEP);
        assert_eq!(screen.presentation().height(), 400.0);
    }
}
