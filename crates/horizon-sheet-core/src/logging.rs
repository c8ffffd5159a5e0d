//! Logging facilities for Horizon Sheet.
//!
//! Horizon Sheet uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in the host:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_sheet=debug")
//!     .init();
//! ```
//!
//! State-machine transitions are logged at `debug`, per-sample drag tracking
//! at `trace`, and host protocol violations (ignored calls) at `warn`.

/// Span names used throughout Horizon Sheet for tracing.
pub mod span_names {
    /// Presentation animation tick span.
    pub const TICK: &str = "horizon_sheet::tick";
    /// Drag gesture span.
    pub const DRAG: &str = "horizon_sheet::drag";
    /// Host acknowledgment processing span.
    pub const FINISH_TRANSITIONING: &str = "horizon_sheet::finish_transitioning";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_sheet_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "horizon_sheet_core::signal";
    /// Presentation controller target.
    pub const PRESENTATION: &str = "horizon_sheet::presentation";
    /// Drag controller target.
    pub const GESTURE: &str = "horizon_sheet::gesture";
    /// Screen lifecycle target.
    pub const LIFECYCLE: &str = "horizon_sheet::lifecycle";
    /// Screen composite target.
    pub const SCREEN: &str = "horizon_sheet::screen";
    /// Screen stack target.
    pub const STACK: &str = "horizon_sheet::stack";
    /// Component registry target.
    pub const REGISTRY: &str = "horizon_sheet::registry";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for measuring the duration of an operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_sheet::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new(span_names::TICK);
        tracing::debug!(target: targets::PRESENTATION, height = 300.0, "inside perf span");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::PRESENTATION,
            targets::GESTURE,
            targets::LIFECYCLE,
            targets::SCREEN,
            targets::STACK,
            targets::REGISTRY,
        ] {
            assert!(target.starts_with("horizon_sheet::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
