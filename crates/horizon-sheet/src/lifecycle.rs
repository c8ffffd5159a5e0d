//! Screen lifecycle.
//!
//! [`ScreenLifecycle`] tracks what the host wants (`active`) against where the
//! screen actually is, and decides when presentation and dismissal should be
//! requested. It fires `Appear` and `Dismissed` at most once each, in that
//! order, no matter how often `active` is toggled.

use horizon_sheet_core::logging::targets;

/// Where a screen is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    #[default]
    Unpresented,
    Appearing,
    Presented,
    Dismissing,
    /// Terminal.
    Dismissed,
}

/// A request the lifecycle makes of the presentation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    Present,
    Dismiss,
}

/// A notification for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Appear,
    Dismissed,
}

/// The screen lifecycle state machine.
#[derive(Debug, Clone, Default)]
pub struct ScreenLifecycle {
    state: LifecycleState,
    desired_active: bool,
    appear_fired: bool,
    dismissed_fired: bool,
}

impl ScreenLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The latest `active` value the host asked for.
    #[inline]
    pub fn desired_active(&self) -> bool {
        self.desired_active
    }

    #[inline]
    pub fn is_dismissed(&self) -> bool {
        self.state == LifecycleState::Dismissed
    }

    /// Record the host's `active` flag.
    ///
    /// Returns the command to issue now, if any. Toggles during `Appearing`
    /// are held until the screen is presented; toggles during dismissal are
    /// recorded but never reverse it.
    pub fn set_active(&mut self, active: bool) -> Option<LifecycleCommand> {
        match self.state {
            LifecycleState::Dismissed => {
                tracing::warn!(target: targets::LIFECYCLE, active, "active change after dismissal ignored");
                return None;
            }
            LifecycleState::Dismissing if active => {
                tracing::warn!(target: targets::LIFECYCLE, "activation during dismissal ignored");
            }
            _ => {}
        }
        if self.desired_active != active {
            tracing::debug!(target: targets::LIFECYCLE, active, state = ?self.state, "active changed");
        }
        self.desired_active = active;
        self.reconcile()
    }

    /// Issue whatever command moves the screen toward the desired state.
    ///
    /// Only stable states (`Unpresented`, `Presented`) issue commands.
    pub fn reconcile(&mut self) -> Option<LifecycleCommand> {
        match (self.state, self.desired_active) {
            (LifecycleState::Unpresented, true) => {
                self.transition(LifecycleState::Appearing);
                Some(LifecycleCommand::Present)
            }
            (LifecycleState::Presented, false) => {
                self.transition(LifecycleState::Dismissing);
                Some(LifecycleCommand::Dismiss)
            }
            _ => None,
        }
    }

    /// The entry transition finished.
    ///
    /// Returns `Appear` the first time only.
    pub fn on_presented(&mut self) -> Option<LifecycleEvent> {
        if self.state != LifecycleState::Appearing {
            tracing::trace!(target: targets::LIFECYCLE, state = ?self.state, "presented outside appearing");
            return None;
        }
        self.transition(LifecycleState::Presented);
        if self.appear_fired {
            return None;
        }
        self.appear_fired = true;
        Some(LifecycleEvent::Appear)
    }

    /// A gesture or tap started dismissing the presented screen.
    ///
    /// Returns `false` if the screen was not presented.
    pub fn on_dismiss_started(&mut self) -> bool {
        if self.state != LifecycleState::Presented {
            return false;
        }
        self.desired_active = false;
        self.transition(LifecycleState::Dismissing);
        true
    }

    /// The sheet is gone.
    ///
    /// Returns `Dismissed` the first time only.
    pub fn on_dismissed(&mut self) -> Option<LifecycleEvent> {
        if self.dismissed_fired {
            return None;
        }
        self.transition(LifecycleState::Dismissed);
        self.dismissed_fired = true;
        Some(LifecycleEvent::Dismissed)
    }

    fn transition(&mut self, to: LifecycleState) {
        tracing::debug!(target: targets::LIFECYCLE, from = ?self.state, ?to, "lifecycle transition");
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_presents() {
        let mut lifecycle = ScreenLifecycle::new();
        assert_eq!(lifecycle.set_active(true), Some(LifecycleCommand::Present));
        assert_eq!(lifecycle.state(), LifecycleState::Appearing);
        assert_eq!(lifecycle.on_presented(), Some(LifecycleEvent::Appear));
        assert_eq!(lifecycle.state(), LifecycleState::Presented);
    }

    #[test]
    fn test_inactive_while_unpresented_does_nothing() {
        let mut lifecycle = ScreenLifecycle::new();
        assert_eq!(lifecycle.set_active(false), None);
        assert_eq!(lifecycle.state(), LifecycleState::Unpresented);
    }

    #[test]
    fn test_toggles_during_appearing_coalesce() {
        let mut lifecycle = ScreenLifecycle::new();
        lifecycle.set_active(true);
        assert_eq!(lifecycle.set_active(false), None);
        assert_eq!(lifecycle.set_active(true), None);
        assert_eq!(lifecycle.set_active(false), None);

        assert_eq!(lifecycle.on_presented(), Some(LifecycleEvent::Appear));
        assert_eq!(lifecycle.reconcile(), Some(LifecycleCommand::Dismiss));
        assert_eq!(lifecycle.state(), LifecycleState::Dismissing);
    }

    #[test]
    fn test_latest_toggle_wins() {
        let mut lifecycle = ScreenLifecycle::new();
        lifecycle.set_active(true);
        lifecycle.set_active(false);
        lifecycle.set_active(true);
        lifecycle.on_presented();
        assert_eq!(lifecycle.reconcile(), None);
        assert_eq!(lifecycle.state(), LifecycleState::Presented);
    }

    #[test]
    fn test_dismissal_is_irreversible() {
        let mut lifecycle = ScreenLifecycle::new();
        lifecycle.set_active(true);
        lifecycle.on_presented();
        assert_eq!(lifecycle.set_active(false), Some(LifecycleCommand::Dismiss));
        assert_eq!(lifecycle.set_active(true), None);
        assert_eq!(lifecycle.state(), LifecycleState::Dismissing);

        assert_eq!(lifecycle.on_dismissed(), Some(LifecycleEvent::Dismissed));
        assert!(lifecycle.is_dismissed());
        assert_eq!(lifecycle.set_active(true), None);
        assert_eq!(lifecycle.on_dismissed(), None);
    }

    #[test]
    fn test_gesture_dismissal() {
        let mut lifecycle = ScreenLifecycle::new();
        assert!(!lifecycle.on_dismiss_started());

        lifecycle.set_active(true);
        lifecycle.on_presented();
        assert!(lifecycle.on_dismiss_started());
        assert_eq!(lifecycle.state(), LifecycleState::Dismissing);
        assert!(!lifecycle.desired_active());
    }

    #[test]
    fn test_events_fire_once() {
        let mut lifecycle = ScreenLifecycle::new();
        let mut appear = 0;
        let mut dismissed = 0;
        for _ in 0..3 {
            lifecycle.set_active(true);
            if lifecycle.on_presented().is_some() {
                appear += 1;
            }
            lifecycle.set_active(false);
            if lifecycle.on_dismissed().is_some() {
                dismissed += 1;
            }
        }
        assert_eq!((appear, dismissed), (1, 1));
    }
}
