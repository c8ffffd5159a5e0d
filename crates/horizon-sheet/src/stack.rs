//! An ordered stack of screens keyed by route.
//!
//! The last screen is the top one and is the only one that takes touches.
//! Popped screens stay in the stack while they animate out and are pruned by
//! [`ScreenStack::tick`] once dismissed.

use std::time::Duration;

use horizon_sheet_core::logging::targets;
use horizon_sheet_core::Signal;

use crate::screen::Screen;

struct StackEntry {
    key: String,
    screen: Screen,
}

/// Screens stacked by route key.
pub struct ScreenStack {
    entries: Vec<StackEntry>,

    /// Emitted after the stack forwards a host acknowledgment.
    pub finished_transitioning: Signal<()>,
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScreenStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenStack")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ScreenStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            finished_transitioning: Signal::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Route keys from bottom to top.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&Screen> {
        self.index_of(key).map(|i| &self.entries[i].screen)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Screen> {
        let index = self.index_of(key)?;
        Some(&mut self.entries[index].screen)
    }

    /// The top screen.
    pub fn top(&self) -> Option<&Screen> {
        self.entries.last().map(|e| &e.screen)
    }

    pub fn top_mut(&mut self) -> Option<&mut Screen> {
        self.entries.last_mut().map(|e| &mut e.screen)
    }

    /// Whether the screen under `key` receives touches.
    pub fn is_interactive(&self, key: &str) -> bool {
        self.entries.last().is_some_and(|e| e.key == key)
    }

    /// Push a screen and activate it.
    ///
    /// Returns `false` (dropping `screen`) if the key is already in use.
    pub fn push(&mut self, key: impl Into<String>, mut screen: Screen) -> bool {
        let key = key.into();
        if self.index_of(&key).is_some() {
            tracing::warn!(target: targets::STACK, %key, "route already on the stack");
            return false;
        }
        tracing::debug!(target: targets::STACK, %key, depth = self.entries.len() + 1, "push");
        screen.set_active(true);
        self.entries.push(StackEntry { key, screen });
        true
    }

    /// Deactivate the topmost screen that is still active.
    ///
    /// Returns its key. The screen leaves the stack once it is dismissed.
    pub fn pop(&mut self) -> Option<String> {
        let entry = self
            .entries
            .iter_mut()
            .rev()
            .find(|e| e.screen.lifecycle().desired_active())?;
        tracing::debug!(target: targets::STACK, key = %entry.key, "pop");
        entry.screen.set_active(false);
        Some(entry.key.clone())
    }

    /// Take one route out of the stack immediately, keeping the routes above it.
    ///
    /// The root route (index 0) cannot be removed.
    pub fn remove(&mut self, key: &str) -> Option<Screen> {
        match self.index_of(key) {
            None => {
                tracing::debug!(target: targets::STACK, %key, "remove of unknown route");
                None
            }
            Some(0) => {
                tracing::warn!(target: targets::STACK, %key, "cannot remove the root route");
                None
            }
            Some(index) => {
                tracing::debug!(target: targets::STACK, %key, index, "remove");
                Some(self.entries.remove(index).screen)
            }
        }
    }

    /// Forward the host's acknowledgment to every screen waiting for one.
    pub fn notify_finish_transitioning(&mut self) {
        for entry in &mut self.entries {
            let screen = &mut entry.screen;
            if screen.presentation().is_awaiting_acknowledgment()
                || screen.presentation().pending_requests() > 0
            {
                screen.notify_finish_transitioning();
            }
        }
        self.finished_transitioning.emit(());
    }

    /// Tick every screen and prune the dismissed ones.
    ///
    /// Returns the keys of the pruned screens, bottom to top.
    pub fn tick(&mut self, dt: Duration) -> Vec<String> {
        for entry in &mut self.entries {
            entry.screen.tick(dt);
        }

        let mut pruned = Vec::new();
        self.entries.retain(|entry| {
            if entry.screen.is_dismissed() {
                pruned.push(entry.key.clone());
                false
            } else {
                true
            }
        });
        if !pruned.is_empty() {
            tracing::debug!(target: targets::STACK, ?pruned, "pruned dismissed screens");
        }
        pruned
    }
}
