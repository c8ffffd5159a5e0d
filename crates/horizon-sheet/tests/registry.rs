//! Integration tests for the global component registry.
//!
//! Kept in its own test binary so the registry starts uninitialized.

use std::sync::Arc;

use horizon_sheet::config::ScreenConfig;
use horizon_sheet::registry::{self, SHEET_SCREEN};
use horizon_sheet::screen::{ContentView, Screen};
use horizon_sheet::SheetError;

#[test]
fn registry_lifecycle() {
    let err = registry::create_screen(SHEET_SCREEN, ContentView::new(1), ScreenConfig::default())
        .unwrap_err();
    assert!(matches!(err, SheetError::RegistryNotInitialized));
    assert!(matches!(
        registry::register_default_components(),
        Err(SheetError::RegistryNotInitialized)
    ));

    registry::init_component_registry();
    registry::register_default_components().unwrap();
    registry::register_component(
        "FadeSheet",
        Arc::new(|content, config: ScreenConfig| {
            Screen::with_default_delegate(
                content,
                ScreenConfig {
                    stack_animation: horizon_sheet::config::StackAnimation::Fade,
                    ..config
                },
            )
        }),
    )
    .unwrap();

    let fade = registry::create_screen("FadeSheet", ContentView::new(2), ScreenConfig::default())
        .unwrap();
    assert_eq!(
        fade.config().stack_animation,
        horizon_sheet::config::StackAnimation::Fade
    );

    let err = registry::register_default_components().unwrap_err();
    assert_eq!(err.to_string(), SheetError::duplicate_component(SHEET_SCREEN).to_string());
    assert!(matches!(
        registry::create_screen("Unknown", ContentView::new(3), ScreenConfig::default()),
        Err(SheetError::UnknownComponent(name)) if name == "Unknown"
    ));
}
