//! Appearance configuration and colour resolution.
//!
//! Colours are opaque to the slider: it only decides which configured colour
//! applies to which part, based on whether the selection covers the whole
//! domain.
use derive_setters::Setters;

use crate::color::Color;

/// Default diameter of a handle that has no custom image.
pub const DEFAULT_HANDLE_DIAMETER: f32 = 16.0;

/// Colours and handle dimensions of a [`RangeSeekSlider`](crate::RangeSeekSlider).
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SliderStyle {
    /// Colour of the line, and of the highlight when no
    /// `color_between_handles` is given.
    pub tint_color: Color,
    /// Colour of the line segment between the two handles.
    #[setters(strip_option)]
    pub color_between_handles: Option<Color>,
    /// Colour of the whole control while the selection spans the full domain.
    #[setters(strip_option)]
    pub initial_color: Option<Color>,
    /// Fill of a handle without a custom image.
    pub handle_color: Color,
    /// Border of a handle without a custom image.
    pub handle_border_color: Color,
    /// Size of a handle without a custom image.
    pub handle_diameter: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            tint_color: Color::SYSTEM_BLUE,
            color_between_handles: None,
            initial_color: None,
            handle_color: Color::WHITE,
            handle_border_color: Color::from_rgb(0.8, 0.8, 0.8),
            handle_diameter: DEFAULT_HANDLE_DIAMETER,
        }
    }
}

/// Final colours for each visual part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    /// The full track line.
    pub line: Color,
    /// The segment between the handles.
    pub between_handles: Color,
    /// Left handle fill.
    pub left_handle: Color,
    /// Left handle border.
    pub left_handle_border: Color,
    /// Right handle fill.
    pub right_handle: Color,
    /// Right handle border.
    pub right_handle_border: Color,
}

impl SliderStyle {
    /// Picks the colour of every part.
    ///
    /// A handle that shows a custom image gets a transparent fill and border
    /// so only the image is visible.
    pub fn resolve(
        &self,
        is_initial: bool,
        has_left_image: bool,
        has_right_image: bool,
    ) -> ResolvedColors {
        let handle = |has_image: bool, fill: Color, border: Color| {
            if has_image {
                (Color::TRANSPARENT, Color::TRANSPARENT)
            } else {
                (fill, border)
            }
        };

        match self.initial_color {
            Some(initial) if is_initial => {
                let (left_handle, left_handle_border) = handle(has_left_image, initial, initial);
                let (right_handle, right_handle_border) =
                    handle(has_right_image, initial, initial);
                ResolvedColors {
                    line: initial,
                    between_handles: initial,
                    left_handle,
                    left_handle_border,
                    right_handle,
                    right_handle_border,
                }
            }
            _ => {
                let (left_handle, left_handle_border) =
                    handle(has_left_image, self.handle_color, self.handle_border_color);
                let (right_handle, right_handle_border) =
                    handle(has_right_image, self.handle_color, self.handle_border_color);
                ResolvedColors {
                    line: self.tint_color,
                    between_handles: self.color_between_handles.unwrap_or(self.tint_color),
                    left_handle,
                    left_handle_border,
                    right_handle,
                    right_handle_border,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Color = Color::from_rgb(0.5, 0.5, 0.5);
    const ORANGE: Color = Color::from_rgb(1.0, 0.5, 0.0);

    #[test]
    fn tint_is_used_without_overrides() {
        let colors = SliderStyle::default().resolve(true, false, false);
        assert_eq!(colors.line, Color::SYSTEM_BLUE);
        assert_eq!(colors.between_handles, Color::SYSTEM_BLUE);
        assert_eq!(colors.left_handle, Color::WHITE);
    }

    #[test]
    fn initial_color_applies_only_at_full_range() {
        let style = SliderStyle::default()
            .initial_color(GREY)
            .color_between_handles(ORANGE);

        let initial = style.resolve(true, false, true);
        assert_eq!(initial.line, GREY);
        assert_eq!(initial.between_handles, GREY);
        assert_eq!(initial.left_handle, GREY);
        assert_eq!(initial.right_handle, Color::TRANSPARENT);

        let moved = style.resolve(false, false, true);
        assert_eq!(moved.line, Color::SYSTEM_BLUE);
        assert_eq!(moved.between_handles, ORANGE);
        assert_eq!(moved.left_handle, Color::WHITE);
        assert_eq!(moved.right_handle_border, Color::TRANSPARENT);
    }
}
