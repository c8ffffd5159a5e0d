//! Prelude module for Horizon Sheet.
//!
//! ```ignore
//! use horizon_sheet::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use horizon_sheet_core::{
    Color, ConnectionId, CornerRadii, Point, Rect, Result, SheetError, Signal, Size, Vector,
};

// ============================================================================
// Configuration and Geometry
// ============================================================================

pub use crate::config::{ScreenConfig, SheetForm, StackAnimation, StackPresentation};
pub use crate::geometry::{compute_heights, sheet_frame, SheetHeights};

// ============================================================================
// Screens
// ============================================================================

pub use crate::gesture::{GestureSample, SettleIntent};
pub use crate::presentation::{CurrentForm, PresentationEvent, PresentationPhase};
pub use crate::screen::{
    ContentView, DefaultTransitionDelegate, HostSurface, PresentingSurface, Screen,
    TransitionDelegate,
};
pub use crate::stack::ScreenStack;
