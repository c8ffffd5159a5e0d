//! Core systems for Horizon Sheet.
//!
//! This crate provides the foundational pieces shared by the sheet presentation
//! machinery in `horizon-sheet`:
//!
//! - **Signals**: Fire-and-forget event emission (`onAppear`, `onDismissed`, ...)
//! - **Geometry**: Points, sizes, rectangles, corner radii and colors
//! - **Errors**: The [`SheetError`] type and crate-wide [`Result`] alias
//! - **Logging**: `tracing` targets, span names and `PerfSpan`
//!
//! # Signal Example
//!
//! ```
//! use horizon_sheet_core::Signal;
//!
//! let appeared = Signal::<()>::new();
//!
//! let conn_id = appeared.connect(|_| {
//!     println!("sheet is on screen");
//! });
//!
//! appeared.emit(());
//! appeared.disconnect(conn_id);
//! ```
//!
//! # Geometry Example
//!
//! ```
//! use horizon_sheet_core::{Rect, Size};
//!
//! let container = Size::new(400.0, 800.0);
//! let sheet = Rect::new(0.0, container.height - 300.0, container.width, 300.0);
//! assert_eq!(sheet.bottom(), 800.0);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod types;

pub use error::{Result, SheetError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Color, CornerRadii, Point, Rect, Size, Vector};
