//! Serialisable slider configuration.
//!
//! ## Usage
//!
//! Load a [`RangeSeekConfig`] from JSON (or build one in code) and
//! [`apply`](RangeSeekConfig::apply) it to a slider. Every value passes
//! through the slider's own setters, so invalid input is corrected the same
//! way as when set directly.
use crate::{color::Color, slider::RangeSeekSlider, style::DEFAULT_HANDLE_DIAMETER};

#[cfg(feature = "serde")]
use crate::error::ConfigError;

/// Every configurable property of a [`RangeSeekSlider`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RangeSeekConfig {
    /// Lower end of the domain.
    pub min_value: f32,
    /// Upper end of the domain.
    pub max_value: f32,
    /// Initial lower selected value.
    pub selected_min_value: f32,
    /// Initial upper selected value.
    pub selected_max_value: f32,
    /// Minimum gap between the selected values.
    pub min_distance: f32,
    /// `None` leaves the distance unbounded.
    pub max_distance: Option<f32>,
    /// Snap selected values to multiples of `step`.
    pub enable_step: bool,
    /// Snapping step, ignored while `<= 0`.
    pub step: f32,
    /// Single-handle mode.
    pub disable_range: bool,
    /// Thickness of the track line.
    pub line_height: f32,
    /// Size of handles without a custom image.
    pub handle_diameter: f32,
    /// `None` keeps the slider's current tint.
    pub tint_color: Option<Color>,
    /// Colour of the highlighted segment.
    pub color_between_handles: Option<Color>,
    /// Colour of the whole control at the neutral state.
    pub initial_color: Option<Color>,
}

impl Default for RangeSeekConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            selected_min_value: 0.0,
            selected_max_value: 100.0,
            min_distance: 0.0,
            max_distance: None,
            enable_step: false,
            step: 0.0,
            disable_range: false,
            line_height: 1.0,
            handle_diameter: DEFAULT_HANDLE_DIAMETER,
            tint_color: None,
            color_between_handles: None,
            initial_color: None,
        }
    }
}

#[cfg(feature = "serde")]
impl RangeSeekConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON document from raw bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Serialises the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RangeSeekConfig {
    /// Pushes the configuration into `slider`.
    ///
    /// The domain goes first so the selection is clamped against the new
    /// bounds rather than the old ones.
    pub fn apply(&self, slider: &mut RangeSeekSlider) {
        slider.set_min_value(self.min_value);
        slider.set_max_value(self.max_value);
        slider.set_min_distance(self.min_distance);
        slider.set_max_distance(self.max_distance.unwrap_or(f32::MAX));
        slider.set_enable_step(self.enable_step);
        slider.set_step(self.step);
        slider.set_selected_min_value(self.selected_min_value);
        slider.set_selected_max_value(self.selected_max_value);
        slider.set_disable_range(self.disable_range);
        slider.set_line_height(self.line_height);

        let mut style = slider.style().clone();
        style.handle_diameter = self.handle_diameter;
        if let Some(tint) = self.tint_color {
            style.tint_color = tint;
        }
        style.color_between_handles = self.color_between_handles;
        style.initial_color = self.initial_color;
        slider.set_style(style);
    }

    /// Builds a new slider from this configuration.
    pub fn build(&self) -> RangeSeekSlider {
        RangeSeekSlider::with(|slider| self.apply(slider))
    }
}

impl From<&RangeSeekSlider> for RangeSeekConfig {
    fn from(slider: &RangeSeekSlider) -> Self {
        let style = slider.style();
        Self {
            min_value: slider.min_value(),
            max_value: slider.max_value(),
            selected_min_value: slider.selected_min_value(),
            selected_max_value: slider.selected_max_value(),
            min_distance: slider.min_distance(),
            max_distance: (slider.max_distance() < f32::MAX).then_some(slider.max_distance()),
            enable_step: slider.enable_step(),
            step: slider.step(),
            disable_range: slider.disable_range(),
            line_height: slider.line_height(),
            handle_diameter: style.handle_diameter,
            tint_color: Some(style.tint_color),
            color_between_handles: style.color_between_handles,
            initial_color: style.initial_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_clamps_through_setters() {
        let config = RangeSeekConfig {
            min_value: 10.0,
            max_value: 50.0,
            selected_min_value: 0.0,
            selected_max_value: 80.0,
            min_distance: -4.0,
            max_distance: Some(-1.0),
            ..RangeSeekConfig::default()
        };
        let slider = config.build();
        assert_eq!(slider.selected_min_value(), 10.0);
        assert_eq!(slider.selected_max_value(), 50.0);
        assert_eq!(slider.min_distance(), 0.0);
        assert_eq!(slider.max_distance(), f32::MAX);
    }

    #[test]
    fn apply_snaps_selection_when_stepping() {
        let config = RangeSeekConfig {
            enable_step: true,
            step: 5.0,
            selected_min_value: 12.0,
            selected_max_value: 88.0,
            ..RangeSeekConfig::default()
        };
        let slider = config.build();
        assert_eq!(slider.selected_min_value(), 10.0);
        assert_eq!(slider.selected_max_value(), 90.0);
    }

    #[test]
    fn snapshot_reflects_slider() {
        let mut slider = RangeSeekSlider::new();
        slider.set_selected_min_value(25.0);
        slider.set_max_distance(60.0);
        let config = RangeSeekConfig::from(&slider);
        assert_eq!(config.selected_min_value, 25.0);
        assert_eq!(config.max_distance, Some(60.0));
        assert_eq!(config.tint_color, Some(Color::SYSTEM_BLUE));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_camel_case_and_defaults() {
        let config = RangeSeekConfig::from_json_str(
            r#"{ "maxValue": 50, "selectedMaxValue": 40, "disableRange": true,
                 "initialColor": { "r": 0.5, "g": 0.5, "b": 0.5, "a": 1.0 } }"#,
        )
        .expect("valid config");
        assert_eq!(config.max_value, 50.0);
        assert_eq!(config.min_value, 0.0);
        assert!(config.disable_range);
        assert_eq!(config.initial_color, Some(Color::from_rgb(0.5, 0.5, 0.5)));

        let slider = config.build();
        assert_eq!(slider.selected_max_value(), 40.0);
        assert!(slider.left_handle_hidden());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_json_is_an_error() {
        let result = RangeSeekConfig::from_json_str("{ \"minValue\": \"low\" }");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
