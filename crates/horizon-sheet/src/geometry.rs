//! Sheet geometry.
//!
//! Pure computation of the resting heights, drag ceiling and corner radius of
//! a sheet from its configuration and the size of the presenting surface.
//! Everything here is total: bad inputs are clamped, never rejected.

use horizon_sheet_core::{CornerRadii, Rect, Size};

use crate::config::{ScreenConfig, SheetForm};

/// Resting heights and corner radius for one container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetHeights {
    /// Height of the short form. Equals `long` when short form is disabled.
    pub short: f32,
    /// Height of the long form.
    pub long: f32,
    /// Highest height a drag may reach.
    pub max: f32,
    /// Radius of the top corners while the sheet is not full-screen.
    pub corner_radius: f32,
    /// Height of the container the values were computed for.
    pub container_height: f32,
    /// Whether the short form is a distinct resting height.
    pub has_short_form: bool,
}

impl SheetHeights {
    /// Resting height for a form.
    #[inline]
    pub fn height_for(&self, form: SheetForm) -> f32 {
        match form {
            SheetForm::Short => self.short,
            SheetForm::Long => self.long,
        }
    }

    /// Whether a sheet of this height covers the whole container.
    #[inline]
    pub fn is_full_screen(&self, height: f32) -> bool {
        height >= self.container_height
    }

    /// Corner radii at a given sheet height. Only the top edge is rounded.
    pub fn corner_radii(&self, height: f32) -> CornerRadii {
        if self.is_full_screen(height) || self.corner_radius <= 0.0 {
            CornerRadii::ZERO
        } else {
            CornerRadii::top(self.corner_radius)
        }
    }
}

/// Compute the resting heights for a configuration inside a container.
///
/// - Short form disabled: one height, `longFormHeight ?? container − topOffset`.
/// - Short form enabled: `shortFormHeight` and
///   `longFormHeight ?? container − headerHeight`.
///
/// Heights are clamped to `[0, container]` and `short ≤ long` always holds.
pub fn compute_heights(container: Size, config: &ScreenConfig) -> SheetHeights {
    let config = config.normalized();
    let container_height = if container.height.is_finite() {
        container.height.max(0.0)
    } else {
        0.0
    };
    let clamp = |h: f32| h.clamp(0.0, container_height);
    let top_offset = config.top_offset.unwrap_or(0.0);

    if config.stack_presentation.covers_container() {
        return SheetHeights {
            short: container_height,
            long: container_height,
            max: container_height,
            corner_radius: 0.0,
            container_height,
            has_short_form: false,
        };
    }

    let (short, long) = if config.is_short_form_enabled {
        let long = clamp(
            config
                .long_form_height
                .unwrap_or(container_height - config.header_height),
        );
        let short = clamp(config.short_form_height).min(long);
        (short, long)
    } else {
        let single = clamp(
            config
                .long_form_height
                .unwrap_or(container_height - top_offset),
        );
        (single, single)
    };

    let max = if config.anchor_modal_to_long_form {
        long
    } else {
        clamp(container_height - top_offset).max(long)
    };

    let corner_radius = if long >= container_height {
        0.0
    } else {
        config.resolved_corner_radius()
    };

    SheetHeights {
        short,
        long,
        max,
        corner_radius,
        container_height,
        has_short_form: config.is_short_form_enabled,
    }
}

/// The sheet's frame for a given height, anchored to the container's bottom edge.
pub fn sheet_frame(container: Size, height: f32) -> Rect {
    let height = height.clamp(0.0, container.height.max(0.0));
    Rect::new(0.0, container.height - height, container.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(400.0, 800.0);

    fn short_form(short: f32, long: Option<f32>) -> ScreenConfig {
        ScreenConfig {
            is_short_form_enabled: true,
            short_form_height: short,
            long_form_height: long,
            ..ScreenConfig::default()
        }
    }

    #[test]
    fn test_single_height_defaults_to_container_minus_top_offset() {
        for container_height in [0.0, 120.0, 800.0, 1366.0] {
            for top_offset in [None, Some(0.0), Some(44.0)] {
                let config = ScreenConfig {
                    top_offset,
                    short_form_height: 250.0,
                    ..ScreenConfig::default()
                };
                let heights = compute_heights(Size::new(320.0, container_height), &config);
                let expected =
                    (container_height - top_offset.unwrap_or(0.0)).clamp(0.0, container_height);
                assert_eq!(heights.long, expected);
                assert_eq!(heights.short, heights.long);
                assert!(!heights.has_short_form);
            }
        }
    }

    #[test]
    fn test_single_height_uses_long_form_height() {
        let config = ScreenConfig {
            long_form_height: Some(500.0),
            top_offset: Some(44.0),
            ..ScreenConfig::default()
        };
        let heights = compute_heights(CONTAINER, &config);
        assert_eq!(heights.long, 500.0);
        assert_eq!(heights.short, 500.0);
    }

    #[test]
    fn test_short_and_long_forms() {
        let heights = compute_heights(CONTAINER, &short_form(300.0, Some(700.0)));
        assert_eq!(heights.short, 300.0);
        assert_eq!(heights.long, 700.0);
        assert_eq!(heights.height_for(SheetForm::Short), 300.0);
        assert_eq!(heights.height_for(SheetForm::Long), 700.0);
    }

    #[test]
    fn test_long_form_defaults_to_container_minus_header() {
        let config = ScreenConfig {
            header_height: 60.0,
            ..short_form(300.0, None)
        };
        assert_eq!(compute_heights(CONTAINER, &config).long, 740.0);
    }

    #[test]
    fn test_short_never_exceeds_long() {
        for (short, long) in [(900.0, Some(700.0)), (500.0, Some(200.0)), (-10.0, Some(-5.0))] {
            let heights = compute_heights(CONTAINER, &short_form(short, long));
            assert!(heights.short <= heights.long, "{short} / {long:?}");
            assert!(heights.long <= CONTAINER.height);
            assert!(heights.short >= 0.0);
        }
    }

    #[test]
    fn test_heights_clamped_to_container() {
        let heights = compute_heights(CONTAINER, &short_form(1200.0, Some(2000.0)));
        assert_eq!(heights.long, 800.0);
        assert_eq!(heights.short, 800.0);
    }

    #[test]
    fn test_corner_radius_only_when_not_full_screen() {
        let partial = compute_heights(CONTAINER, &short_form(300.0, Some(700.0)));
        assert_eq!(partial.corner_radius, 8.0);
        assert_eq!(partial.corner_radii(700.0), CornerRadii::top(8.0));
        assert_eq!(partial.corner_radii(800.0), CornerRadii::ZERO);

        let full = compute_heights(CONTAINER, &ScreenConfig::default());
        assert_eq!(full.corner_radius, 0.0);
        assert!(full.corner_radii(800.0).is_zero());
    }

    #[test]
    fn test_full_screen_presentation_covers_container() {
        let config = ScreenConfig {
            stack_presentation: crate::config::StackPresentation::FullScreenModal,
            ..short_form(300.0, Some(700.0))
        };
        let heights = compute_heights(CONTAINER, &config);
        assert_eq!(heights.short, 800.0);
        assert_eq!(heights.long, 800.0);
        assert_eq!(heights.corner_radius, 0.0);
    }

    #[test]
    fn test_max_height_depends_on_anchor() {
        let anchored = compute_heights(CONTAINER, &short_form(300.0, Some(700.0)));
        assert_eq!(anchored.max, 700.0);

        let free = ScreenConfig {
            anchor_modal_to_long_form: false,
            top_offset: Some(40.0),
            ..short_form(300.0, Some(700.0))
        };
        assert_eq!(compute_heights(CONTAINER, &free).max, 760.0);
    }

    #[test]
    fn test_sheet_frame_is_bottom_anchored() {
        let frame = sheet_frame(CONTAINER, 300.0);
        assert_eq!(frame, Rect::new(0.0, 500.0, 400.0, 300.0));
        assert_eq!(sheet_frame(CONTAINER, 2000.0).top(), 0.0);
    }
}
