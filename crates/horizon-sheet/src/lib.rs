//! Horizon Sheet - sheet-style modal screens.
//!
//! This is the main crate. It presents a host-rendered content view as a
//! bottom sheet with short and long resting heights, drag-to-resize and
//! drag-to-dismiss, tap-outside dismissal, background dimming and entry and
//! exit transitions, and reports `onAppear` / `onDismissed` back to the host.
//!
//! Everything runs on the host's UI thread and is driven by explicit
//! `tick(dt)` calls, so animation completion is always observed there.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_sheet::prelude::*;
//!
//! let config = ScreenConfig::from_json(r#"{
//!     "isShortFormEnabled": true,
//!     "shortFormHeight": 300,
//!     "longFormHeight": 700,
//!     "startFromShortForm": true
//! }"#)?;
//!
//! let surface: Arc<dyn PresentingSurface> = Arc::new(HostSurface::new(Size::new(400.0, 800.0)));
//! let mut screen = Screen::with_default_delegate(ContentView::new(1), config);
//! screen.attach_surface(&surface);
//! screen.set_active(true);
//!
//! while screen.presentation().is_animating() {
//!     screen.tick(Duration::from_millis(16));
//! }
//! screen.notify_finish_transitioning();
//! assert_eq!(screen.presentation().current_form(), Some(CurrentForm::Short));
//! assert_eq!(screen.presentation().height(), 300.0);
//! # Ok::<(), SheetError>(())
//! ```

pub use horizon_sheet_core::*;

pub mod animation;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod lifecycle;
pub mod prelude;
pub mod presentation;
pub mod registry;
pub mod screen;
pub mod stack;
