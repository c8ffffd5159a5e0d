//! Process-wide registry of screen factories.
//!
//! Hosts look screen components up by name. The registry must be initialized
//! once at startup with [`init_component_registry`]; every other call fails
//! with [`SheetError::RegistryNotInitialized`] until then.
//!
//! # Example
//!
//! ```
//! use horizon_sheet::config::ScreenConfig;
//! use horizon_sheet::registry::{self, SHEET_SCREEN};
//! use horizon_sheet::screen::ContentView;
//!
//! registry::init_component_registry();
//! let _ = registry::register_default_components();
//!
//! let screen = registry::create_screen(SHEET_SCREEN, ContentView::new(1), ScreenConfig::default())?;
//! assert!(!screen.is_dismissed());
//! # Ok::<(), horizon_sheet_core::SheetError>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use horizon_sheet_core::logging::targets;
use horizon_sheet_core::{Result, SheetError};
use parking_lot::Mutex;

use crate::config::ScreenConfig;
use crate::screen::{ContentView, Screen};

/// Name the sheet screen is registered under.
pub const SHEET_SCREEN: &str = "SheetScreen";

/// Builds a screen for a content view.
pub type ScreenFactory = Arc<dyn Fn(ContentView, ScreenConfig) -> Screen + Send + Sync>;

/// Named screen factories.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ScreenFactory>,
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("ComponentRegistry")
            .field("components", &names)
            .finish()
    }
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: ScreenFactory) -> Result<()> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(SheetError::duplicate_component(name));
        }
        tracing::debug!(target: targets::REGISTRY, %name, "component registered");
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build the screen registered under `name`.
    pub fn create(&self, name: &str, content: ContentView, config: ScreenConfig) -> Result<Screen> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| SheetError::unknown_component(name))?;
        Ok(factory(content, config))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

static GLOBAL_COMPONENTS: Mutex<Option<ComponentRegistry>> = Mutex::new(None);

/// Initialize the global registry. Later calls keep the existing registry.
pub fn init_component_registry() {
    let mut guard = GLOBAL_COMPONENTS.lock();
    if guard.is_none() {
        tracing::debug!(target: targets::REGISTRY, "component registry initialized");
        *guard = Some(ComponentRegistry::new());
    }
}

fn with_registry<R>(f: impl FnOnce(&mut ComponentRegistry) -> Result<R>) -> Result<R> {
    let mut guard = GLOBAL_COMPONENTS.lock();
    let registry = guard.as_mut().ok_or(SheetError::RegistryNotInitialized)?;
    f(registry)
}

/// Register a factory in the global registry.
pub fn register_component(name: impl Into<String>, factory: ScreenFactory) -> Result<()> {
    with_registry(|registry| registry.register(name, factory))
}

/// Build a screen from the global registry.
///
/// The factory runs after the registry lock is released, so factories may
/// themselves use the registry.
pub fn create_screen(name: &str, content: ContentView, config: ScreenConfig) -> Result<Screen> {
    let factory = with_registry(|registry| {
        registry
            .factories
            .get(name)
            .cloned()
            .ok_or_else(|| SheetError::unknown_component(name))
    })?;
    Ok(factory(content, config))
}

/// Check whether a component is registered globally.
pub fn is_registered(name: &str) -> Result<bool> {
    with_registry(|registry| Ok(registry.contains(name)))
}

/// Register the built-in sheet screen under [`SHEET_SCREEN`].
pub fn register_default_components() -> Result<()> {
    register_component(
        SHEET_SCREEN,
        Arc::new(|content, config| Screen::with_default_delegate(content, config)),
    )
}
