//! Screen configuration.
//!
//! [`ScreenConfig`] is the full set of properties a host pushes to a screen.
//! It is diffed and pushed by the host on every change, either as a typed
//! value or as a JSON payload with the host's camelCase property names.
//!
//! Values are never rejected for being out of range. [`ScreenConfig::normalized`]
//! clamps them into their valid domains, and every consumer in this crate
//! works on a normalized copy.
//!
//! # Example
//!
//! ```
//! use horizon_sheet::config::{ScreenConfig, StackAnimation};
//!
//! let config = ScreenConfig::from_json(r#"{
//!     "isShortFormEnabled": true,
//!     "shortFormHeight": 300,
//!     "longFormHeight": 700,
//!     "stackAnimation": "fade"
//! }"#).unwrap();
//!
//! assert!(config.is_short_form_enabled);
//! assert_eq!(config.stack_animation, StackAnimation::Fade);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use horizon_sheet_core::{Color, Result};
use serde::Deserialize;

/// Default corner radius for the top edge of the sheet.
pub const DEFAULT_CORNER_RADIUS: f32 = 8.0;

/// How the screen is presented over its presenting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StackPresentation {
    /// Pushed onto a navigation stack, covering the container.
    Push,
    /// Standard modal sheet.
    #[default]
    Modal,
    /// Modal sheet over a visible presenting surface.
    TransparentModal,
    /// Modal sheet confined to the presenting surface.
    ContainedModal,
    /// Contained modal over a visible presenting surface.
    ContainedTransparentModal,
    /// Modal that covers the whole container.
    FullScreenModal,
    /// Form-sheet style modal.
    FormSheet,
}

impl StackPresentation {
    /// Every presentation style, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Push,
        Self::Modal,
        Self::TransparentModal,
        Self::ContainedModal,
        Self::ContainedTransparentModal,
        Self::FullScreenModal,
        Self::FormSheet,
    ];

    /// The host's name for this presentation style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Modal => "modal",
            Self::TransparentModal => "transparentModal",
            Self::ContainedModal => "containedModal",
            Self::ContainedTransparentModal => "containedTransparentModal",
            Self::FullScreenModal => "fullScreenModal",
            Self::FormSheet => "formSheet",
        }
    }

    /// Whether the presented screen always occupies the full container.
    pub fn covers_container(&self) -> bool {
        matches!(self, Self::Push | Self::FullScreenModal)
    }

    /// Whether the presenting surface stays visible behind the sheet.
    pub fn is_transparent(&self) -> bool {
        matches!(
            self,
            Self::TransparentModal | Self::ContainedTransparentModal
        )
    }

    /// Resolve the presentation from a navigator's mode and card transparency.
    ///
    /// Only the `modal` and `containedModal` modes produce modal presentations;
    /// every other mode pushes.
    pub fn for_navigator_mode(mode: &str, transparent_card: bool) -> Self {
        match (mode, transparent_card) {
            ("modal", false) => Self::Modal,
            ("modal", true) => Self::TransparentModal,
            ("containedModal", false) => Self::ContainedModal,
            ("containedModal", true) => Self::ContainedTransparentModal,
            _ => Self::Push,
        }
    }
}

impl fmt::Display for StackPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackPresentation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown stack presentation '{s}'"))
    }
}

/// Animation used when the screen enters and leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StackAnimation {
    /// Slide the sheet up from the bottom edge.
    #[default]
    Default,
    /// No animation.
    None,
    /// Cross-fade the content.
    Fade,
    /// Flip the content around its vertical axis.
    Flip,
}

impl StackAnimation {
    /// Every animation, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::None, Self::Fade, Self::Flip];

    /// The host's name for this animation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::None => "none",
            Self::Fade => "fade",
            Self::Flip => "flip",
        }
    }

    /// Resolve the animation requested by a navigator.
    ///
    /// Disabling animations always wins over the requested style.
    pub fn for_navigator(requested: Option<Self>, animation_enabled: bool) -> Self {
        if animation_enabled {
            requested.unwrap_or_default()
        } else {
            Self::None
        }
    }
}

impl fmt::Display for StackAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackAnimation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown stack animation '{s}'"))
    }
}

/// The resting form of a presented sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetForm {
    /// Partial height (`shortFormHeight`).
    Short,
    /// Near-full height (`longFormHeight`).
    Long,
}

/// Properties pushed by the host for one screen.
///
/// Field names mirror the host's properties; JSON payloads use camelCase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenConfig {
    pub stack_presentation: StackPresentation,
    pub stack_animation: StackAnimation,
    pub gesture_enabled: bool,
    pub show_drag_indicator: bool,
    pub top_offset: Option<f32>,
    pub corner_radius: Option<f32>,
    pub is_short_form_enabled: bool,
    pub long_form_height: Option<f32>,
    pub short_form_height: f32,
    pub start_from_short_form: bool,
    // The navigator spells this key with a lowercase "to".
    #[serde(alias = "anchorModaltoLongForm")]
    pub anchor_modal_to_long_form: bool,
    pub allows_drag_to_dismiss: bool,
    pub allows_tap_to_dismiss: bool,
    pub blocks_background_touches: bool,
    /// Spring damping ratio in `(0, 1]`.
    pub spring_damping: f32,
    /// Transition duration in seconds.
    pub transition_duration: f32,
    pub background_color: Color,
    /// Opacity of the dimming layer in `[0, 1]`.
    pub background_opacity: f32,
    pub header_height: f32,
    /// Set by navigators that manage their own stack. Carried through unchanged.
    pub custom_stack: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            stack_presentation: StackPresentation::Modal,
            stack_animation: StackAnimation::Default,
            gesture_enabled: true,
            show_drag_indicator: true,
            top_offset: None,
            corner_radius: None,
            is_short_form_enabled: false,
            long_form_height: None,
            short_form_height: 300.0,
            start_from_short_form: false,
            anchor_modal_to_long_form: true,
            allows_drag_to_dismiss: true,
            allows_tap_to_dismiss: true,
            blocks_background_touches: true,
            spring_damping: 0.8,
            transition_duration: 0.5,
            background_color: Color::BLACK,
            background_opacity: 0.7,
            header_height: 0.0,
            custom_stack: false,
        }
    }
}

impl ScreenConfig {
    /// Decode a configuration pushed by the host as JSON.
    ///
    /// Missing keys take their defaults; the result is normalized.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Decode a configuration from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)?;
        Ok(config.normalized())
    }

    /// Return a copy with every numeric field clamped into its valid domain.
    ///
    /// Non-finite values fall back to the field default.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let non_negative = |v: f32, fallback: f32| if v.is_finite() { v.max(0.0) } else { fallback };
        let optional = |v: Option<f32>| v.filter(|v| v.is_finite()).map(|v| v.max(0.0));

        let spring_damping = if self.spring_damping.is_finite() && self.spring_damping > 0.0 {
            self.spring_damping.min(1.0)
        } else {
            defaults.spring_damping
        };
        let background_opacity = if self.background_opacity.is_finite() {
            self.background_opacity.clamp(0.0, 1.0)
        } else {
            defaults.background_opacity
        };

        Self {
            top_offset: optional(self.top_offset),
            corner_radius: optional(self.corner_radius),
            long_form_height: optional(self.long_form_height),
            short_form_height: non_negative(self.short_form_height, defaults.short_form_height),
            spring_damping,
            transition_duration: non_negative(
                self.transition_duration,
                defaults.transition_duration,
            ),
            background_opacity,
            header_height: non_negative(self.header_height, defaults.header_height),
            ..self.clone()
        }
    }

    /// The form a fresh presentation starts in.
    pub fn initial_form(&self) -> SheetForm {
        if self.is_short_form_enabled && self.start_from_short_form {
            SheetForm::Short
        } else {
            SheetForm::Long
        }
    }

    /// Transition duration as a [`Duration`].
    ///
    /// Durations too long to represent saturate at [`Duration::MAX`].
    pub fn duration(&self) -> Duration {
        let secs = self.transition_duration;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }

    /// Corner radius for the top edge of the sheet.
    pub fn resolved_corner_radius(&self) -> f32 {
        self.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS)
    }

    /// The dimming color at full strength.
    pub fn dimming_color(&self) -> Color {
        self.background_color.with_alpha(self.background_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScreenConfig::default();
        assert!(config.gesture_enabled);
        assert!(!config.is_short_form_enabled);
        assert_eq!(config.stack_presentation, StackPresentation::Modal);
        assert_eq!(config.initial_form(), SheetForm::Long);
        assert_eq!(config.resolved_corner_radius(), DEFAULT_CORNER_RADIUS);
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = ScreenConfig::from_json(
            r##"{
                "stackPresentation": "transparentModal",
                "stackAnimation": "flip",
                "isShortFormEnabled": true,
                "shortFormHeight": 250,
                "longFormHeight": 650,
                "startFromShortForm": true,
                "anchorModaltoLongForm": false,
                "allowsTapToDismiss": false,
                "backgroundColor": "#FF0000",
                "backgroundOpacity": 0.4,
                "transitionDuration": 0.3
            }"##,
        )
        .unwrap();

        assert_eq!(config.stack_presentation, StackPresentation::TransparentModal);
        assert_eq!(config.stack_animation, StackAnimation::Flip);
        assert_eq!(config.short_form_height, 250.0);
        assert_eq!(config.long_form_height, Some(650.0));
        assert!(!config.anchor_modal_to_long_form);
        assert!(!config.allows_tap_to_dismiss);
        assert_eq!(config.background_color, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(config.initial_form(), SheetForm::Short);
        assert_eq!(config.duration(), Duration::from_secs_f32(0.3));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(ScreenConfig::from_json("{\"gestureEnabled\": ").is_err());
        assert!(ScreenConfig::from_json("{\"stackAnimation\": \"spin\"}").is_err());
    }

    #[test]
    fn test_normalized_clamps() {
        let config = ScreenConfig {
            short_form_height: -50.0,
            long_form_height: Some(-1.0),
            spring_damping: 3.0,
            background_opacity: 1.7,
            transition_duration: -2.0,
            header_height: f32::NAN,
            ..ScreenConfig::default()
        }
        .normalized();

        assert_eq!(config.short_form_height, 0.0);
        assert_eq!(config.long_form_height, Some(0.0));
        assert_eq!(config.spring_damping, 1.0);
        assert_eq!(config.background_opacity, 1.0);
        assert_eq!(config.transition_duration, 0.0);
        assert_eq!(config.header_height, 0.0);
    }

    #[test]
    fn test_custom_stack_passes_through() {
        let config = ScreenConfig::from_json(r#"{"customStack": true}"#).unwrap();
        assert!(config.custom_stack);
        assert!(!ScreenConfig::default().custom_stack);
    }

    #[test]
    fn test_huge_duration_saturates() {
        let config = ScreenConfig::from_json(r#"{"transitionDuration": 1e20}"#).unwrap();
        assert_eq!(config.duration(), Duration::MAX);

        let raw = ScreenConfig {
            transition_duration: f32::NAN,
            ..ScreenConfig::default()
        };
        assert_eq!(raw.duration(), Duration::ZERO);
    }

    #[test]
    fn test_zero_damping_falls_back() {
        let config = ScreenConfig {
            spring_damping: 0.0,
            ..ScreenConfig::default()
        }
        .normalized();
        assert_eq!(config.spring_damping, 0.8);
    }

    #[test]
    fn test_initial_form_requires_short_form() {
        let config = ScreenConfig {
            start_from_short_form: true,
            ..ScreenConfig::default()
        };
        assert_eq!(config.initial_form(), SheetForm::Long);
    }

    #[test]
    fn test_navigator_mode_mapping() {
        assert_eq!(
            StackPresentation::for_navigator_mode("modal", false),
            StackPresentation::Modal
        );
        assert_eq!(
            StackPresentation::for_navigator_mode("modal", true),
            StackPresentation::TransparentModal
        );
        assert_eq!(
            StackPresentation::for_navigator_mode("containedModal", true),
            StackPresentation::ContainedTransparentModal
        );
        assert_eq!(
            StackPresentation::for_navigator_mode("card", true),
            StackPresentation::Push
        );
    }

    #[test]
    fn test_navigator_animation() {
        assert_eq!(
            StackAnimation::for_navigator(Some(StackAnimation::Fade), false),
            StackAnimation::None
        );
        assert_eq!(
            StackAnimation::for_navigator(Some(StackAnimation::Fade), true),
            StackAnimation::Fade
        );
        assert_eq!(StackAnimation::for_navigator(None, true), StackAnimation::Default);
    }

    #[test]
    fn test_enum_names_round_trip() {
        for presentation in StackPresentation::ALL {
            assert_eq!(
                presentation.as_str().parse::<StackPresentation>(),
                Ok(presentation)
            );
        }
        assert!("sideways".parse::<StackAnimation>().is_err());
    }
}
