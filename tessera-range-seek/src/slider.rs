//! The range seek slider core: selection state, constraint resolution and
//! touch tracking.
//!
//! ## Usage
//!
//! Feed layout changes through [`RangeSeekSlider::set_bounds`] and touches
//! through [`begin_tracking`](RangeSeekSlider::begin_tracking),
//! [`continue_tracking`](RangeSeekSlider::continue_tracking) and
//! [`end_tracking`](RangeSeekSlider::end_tracking), then read
//! [`geometry`](RangeSeekSlider::geometry) to draw.
use std::sync::{Arc, Weak};

use tracing::{debug, trace};

use crate::{
    delegate::RangeSeekDelegate,
    geometry::{Point, Rect, Size},
    image::HandleImage,
    mapping::TrackMetrics,
    prop::Callback,
    style::{ResolvedColors, SliderStyle},
};

/// Horizontal padding between the control bounds and the line.
pub const BAR_SIDE_PADDING: f32 = 16.0;
/// How far beyond its frame a handle still accepts a touch.
pub const TOUCH_EXPANSION: f32 = 30.0;
/// Preferred height of the control. It has no preferred width.
pub const INTRINSIC_HEIGHT: f32 = 65.0;

/// Which handle, if any, the current gesture is moving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HandleTracking {
    /// No gesture in progress.
    #[default]
    None,
    /// The gesture moves `selected_min_value`.
    Left,
    /// The gesture moves `selected_max_value`.
    Right,
}

/// Derived frames handed to the renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    /// The full track line.
    pub line: Rect,
    /// Corner radius shared by the line and the highlight.
    pub line_corner_radius: f32,
    /// Frame of the handle for `selected_min_value`.
    pub left_handle: Rect,
    /// Frame of the handle for `selected_max_value`.
    pub right_handle: Rect,
    /// The highlighted part of the line between both handle centres.
    pub between_handles: Rect,
}

/// A dual-handle slider selecting `[selected_min_value, selected_max_value]`
/// inside `[min_value, max_value]`.
///
/// Every setter corrects invalid input in place instead of rejecting it.
pub struct RangeSeekSlider {
    min_value: f32,
    max_value: f32,
    selected_min_value: f32,
    selected_max_value: f32,
    min_distance: f32,
    max_distance: f32,
    enable_step: bool,
    step: f32,
    disable_range: bool,
    line_height: f32,
    style: SliderStyle,
    left_handle_image: Option<HandleImage>,
    right_handle_image: Option<HandleImage>,

    bounds: Size,
    geometry: SliderGeometry,
    is_initial: bool,

    handle_tracking: HandleTracking,
    previous_step_min_value: Option<f32>,
    previous_step_max_value: Option<f32>,

    delegate: Option<Weak<dyn RangeSeekDelegate>>,
    step_feedback: Option<Callback>,
}

impl Default for RangeSeekSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSeekSlider {
    /// Creates a slider over `0..=100` with the whole range selected.
    pub fn new() -> Self {
        let mut slider = Self {
            min_value: 0.0,
            max_value: 100.0,
            selected_min_value: 0.0,
            selected_max_value: 100.0,
            min_distance: 0.0,
            max_distance: f32::MAX,
            enable_step: false,
            step: 0.0,
            disable_range: false,
            line_height: 1.0,
            style: SliderStyle::default(),
            left_handle_image: None,
            right_handle_image: None,
            bounds: Size::ZERO,
            geometry: SliderGeometry::default(),
            is_initial: true,
            handle_tracking: HandleTracking::None,
            previous_step_min_value: None,
            previous_step_max_value: None,
            delegate: None,
            step_feedback: None,
        };
        slider.refresh();
        slider
    }

    /// Creates a slider and lets `configure` set it up before first use.
    pub fn with(configure: impl FnOnce(&mut Self)) -> Self {
        let mut slider = Self::new();
        configure(&mut slider);
        slider
    }

    /// Lower end of the domain.
    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Sets the lower end of the domain and re-resolves the selection.
    pub fn set_min_value(&mut self, value: f32) {
        self.min_value = value;
        self.refresh();
    }

    /// Upper end of the domain.
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Sets the upper end of the domain and re-resolves the selection.
    pub fn set_max_value(&mut self, value: f32) {
        self.max_value = value;
        self.refresh();
    }

    /// Current lower selected value.
    pub fn selected_min_value(&self) -> f32 {
        self.selected_min_value
    }

    /// Sets the lower selected value. Values below `min_value` are raised to
    /// it.
    pub fn set_selected_min_value(&mut self, value: f32) {
        self.assign_selected_min(value);
        self.refresh();
    }

    /// Current upper selected value.
    pub fn selected_max_value(&self) -> f32 {
        self.selected_max_value
    }

    /// Sets the upper selected value. Values above `max_value` are lowered to
    /// it.
    pub fn set_selected_max_value(&mut self, value: f32) {
        self.assign_selected_max(value);
        self.refresh();
    }

    /// Minimum gap kept between the selected values while dragging.
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Minimum gap between the selected values. Negative input becomes `0`.
    pub fn set_min_distance(&mut self, distance: f32) {
        self.min_distance = if distance < 0.0 { 0.0 } else { distance };
    }

    /// Maximum gap kept between the selected values while dragging.
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Maximum gap between the selected values. Negative input removes the
    /// bound.
    pub fn set_max_distance(&mut self, distance: f32) {
        self.max_distance = if distance < 0.0 { f32::MAX } else { distance };
    }

    /// Whether selected values snap to multiples of [`step`](Self::step).
    pub fn enable_step(&self) -> bool {
        self.enable_step
    }

    /// Turns step snapping on or off. Takes effect on the next refresh.
    pub fn set_enable_step(&mut self, enable: bool) {
        self.enable_step = enable;
    }

    /// Snapping step.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Step used for snapping. Ignored while `<= 0`.
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Whether the slider is in single-handle mode.
    pub fn disable_range(&self) -> bool {
        self.disable_range
    }

    /// Switches to single-handle mode. Only `selected_max_value` is
    /// meaningful there and the left handle is hidden.
    pub fn set_disable_range(&mut self, disable: bool) {
        self.disable_range = disable;
    }

    /// Whether the renderer should hide the left handle.
    pub fn left_handle_hidden(&self) -> bool {
        self.disable_range
    }

    /// Thickness of the track line.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Sets the track line thickness and recomputes the frames.
    pub fn set_line_height(&mut self, height: f32) {
        self.line_height = height;
        self.layout_content();
    }

    /// Current appearance.
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Replaces the appearance. A new `handle_diameter` moves the handles.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.layout_content();
    }

    /// Custom image of the left handle, if any.
    pub fn left_handle_image(&self) -> Option<&HandleImage> {
        self.left_handle_image.as_ref()
    }

    /// Sets a custom left handle. The handle takes the image's size and the
    /// track start moves in by half its width.
    pub fn set_left_handle_image(&mut self, image: Option<HandleImage>) {
        self.left_handle_image = image;
        self.layout_content();
    }

    /// Custom image of the right handle, if any.
    pub fn right_handle_image(&self) -> Option<&HandleImage> {
        self.right_handle_image.as_ref()
    }

    /// Sets a custom right handle. The handle takes the image's size and the
    /// track end moves in by half its width.
    pub fn set_right_handle_image(&mut self, image: Option<HandleImage>) {
        self.right_handle_image = image;
        self.layout_content();
    }

    /// Registers the observer. The slider keeps only a weak reference.
    pub fn set_delegate<D>(&mut self, delegate: &Arc<D>)
    where
        D: RangeSeekDelegate + 'static,
    {
        let weak: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Drops the observer reference.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Sets the pulse fired when a selected value snaps onto a new step.
    pub fn set_step_feedback(&mut self, feedback: impl Into<Callback>) {
        self.step_feedback = Some(feedback.into());
    }

    /// Size of the control as last reported by the host.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Updates the control size and recomputes every frame.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.layout_content();
    }

    /// Preferred height of the control.
    pub fn intrinsic_height(&self) -> f32 {
        INTRINSIC_HEIGHT
    }

    /// Frames of the line, handles and highlight.
    pub fn geometry(&self) -> &SliderGeometry {
        &self.geometry
    }

    /// Whether the selection covers the whole domain.
    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    /// Colours of every part for the current state.
    pub fn resolved_colors(&self) -> ResolvedColors {
        self.style.resolve(
            self.is_initial,
            self.left_handle_image.is_some(),
            self.right_handle_image.is_some(),
        )
    }

    /// Handle moved by the current gesture.
    pub fn handle_tracking(&self) -> HandleTracking {
        self.handle_tracking
    }

    /// Mapping between values and x positions for the current layout.
    pub fn track_metrics(&self) -> TrackMetrics {
        let line = self.geometry.line;
        let half_width = |image: &Option<HandleImage>| {
            image.as_ref().map_or(0.0, |image| image.size().width / 2.0)
        };
        TrackMetrics::new(
            line.min_x(),
            line.max_x(),
            half_width(&self.left_handle_image),
            half_width(&self.right_handle_image),
            self.min_value,
            self.max_value,
        )
    }

    /// Starts a gesture at `location`.
    ///
    /// Returns `false` when the touch misses both handles. Otherwise picks
    /// the handle closest to the touch; when both handles sit stacked at the
    /// top of the domain the left one wins so the range can be pulled open.
    pub fn begin_tracking(&mut self, location: Point) -> bool {
        let left = self.geometry.left_handle;
        let right = self.geometry.right_handle;
        let touching_left = left.expand(TOUCH_EXPANSION).contains(location);
        let touching_right = right.expand(TOUCH_EXPANSION).contains(location);

        if !touching_left && !touching_right {
            trace!(x = location.x, y = location.y, "touch missed both handles");
            return false;
        }

        let distance_from_left = location.distance(left.center());
        let distance_from_right = location.distance(right.center());

        self.handle_tracking = if distance_from_left < distance_from_right && !self.disable_range
        {
            HandleTracking::Left
        } else if self.selected_max_value == self.max_value && left.mid_x() == right.mid_x() {
            HandleTracking::Left
        } else {
            HandleTracking::Right
        };
        debug!(handle = ?self.handle_tracking, "range seek tracking started");

        if let Some(delegate) = self.delegate() {
            delegate.did_start_touches(self);
        }
        true
    }

    /// Moves the tracked handle towards `location`.
    ///
    /// Returns `false` when no handle is being tracked.
    pub fn continue_tracking(&mut self, location: Point) -> bool {
        if self.handle_tracking == HandleTracking::None {
            return false;
        }

        let selected_value = self.track_metrics().value_for_x(location.x);

        match self.handle_tracking {
            HandleTracking::Left => {
                self.assign_selected_min(selected_value.min(self.selected_max_value));
            }
            HandleTracking::Right => {
                // With a single handle there is nothing to cross.
                if self.disable_range && selected_value >= self.min_value {
                    self.assign_selected_max(selected_value);
                } else {
                    self.assign_selected_max(selected_value.max(self.selected_min_value));
                }
            }
            HandleTracking::None => {}
        }

        self.refresh();
        true
    }

    /// Finishes the current gesture, whatever its state.
    pub fn end_tracking(&mut self) {
        self.handle_tracking = HandleTracking::None;
        debug!(
            min = self.selected_min_value,
            max = self.selected_max_value,
            "range seek tracking ended"
        );

        if let Some(delegate) = self.delegate() {
            delegate.did_end_touches(self);
        }
    }

    /// Re-resolves the selection against every constraint and recomputes
    /// the derived state.
    ///
    /// Order: step snapping, distance bounds (moving the dragged handle),
    /// domain clamp, geometry, neutral state, then the change notification
    /// for drag-driven updates.
    pub fn refresh(&mut self) {
        if self.enable_step && self.step > 0.0 {
            self.snap_to_step();
        }

        let diff = self.selected_max_value - self.selected_min_value;
        if diff < self.min_distance {
            self.enforce_distance(self.min_distance);
        } else if diff > self.max_distance {
            self.enforce_distance(self.max_distance);
        }

        if self.selected_min_value < self.min_value {
            self.selected_min_value = self.min_value;
        }
        if self.selected_max_value > self.max_value {
            self.selected_max_value = self.max_value;
        }

        self.layout_content();
        trace!(
            min = self.selected_min_value,
            max = self.selected_max_value,
            initial = self.is_initial,
            "range seek refreshed"
        );

        if self.handle_tracking != HandleTracking::None
            && let Some(delegate) = self.delegate()
        {
            delegate.did_change(self, self.selected_min_value, self.selected_max_value);
        }
    }

    fn snap_to_step(&mut self) {
        let step = self.step;

        self.assign_selected_min((self.selected_min_value / step).round() * step);
        if self
            .previous_step_min_value
            .is_some_and(|previous| previous != self.selected_min_value)
        {
            self.pulse();
        }
        self.previous_step_min_value = Some(self.selected_min_value);

        self.assign_selected_max((self.selected_max_value / step).round() * step);
        if self
            .previous_step_max_value
            .is_some_and(|previous| previous != self.selected_max_value)
        {
            self.pulse();
        }
        self.previous_step_max_value = Some(self.selected_max_value);
    }

    /// Moves the dragged handle so the selection is exactly `distance` wide.
    /// Programmatic changes have no dragged handle and are left alone.
    fn enforce_distance(&mut self, distance: f32) {
        match self.handle_tracking {
            HandleTracking::Left => {
                self.assign_selected_min(self.selected_max_value - distance);
            }
            HandleTracking::Right => {
                self.assign_selected_max(self.selected_min_value + distance);
            }
            HandleTracking::None => {}
        }
    }

    fn pulse(&self) {
        trace!("range seek step feedback");
        if let Some(feedback) = &self.step_feedback {
            feedback.call();
        }
    }

    fn assign_selected_min(&mut self, value: f32) {
        self.selected_min_value = if value < self.min_value {
            self.min_value
        } else {
            value
        };
    }

    fn assign_selected_max(&mut self, value: f32) {
        self.selected_max_value = if value > self.max_value {
            self.max_value
        } else {
            value
        };
    }

    fn delegate(&self) -> Option<Arc<dyn RangeSeekDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn handle_size(&self, image: &Option<HandleImage>) -> Size {
        image
            .as_ref()
            .map_or(Size::square(self.style.handle_diameter), HandleImage::size)
    }

    fn layout_content(&mut self) {
        let y_middle = self.bounds.height / 2.0;
        let line = Rect::new(
            BAR_SIDE_PADDING,
            y_middle - self.line_height / 2.0,
            (self.bounds.width - BAR_SIDE_PADDING * 2.0).max(0.0),
            self.line_height,
        );
        self.geometry.line = line;
        self.geometry.line_corner_radius = self.line_height / 2.0;

        let metrics = self.track_metrics();
        let left_center = Point::new(metrics.x_for_value(self.selected_min_value), line.mid_y());
        let right_center = Point::new(metrics.x_for_value(self.selected_max_value), line.mid_y());

        self.geometry.left_handle =
            Rect::from_center(left_center, self.handle_size(&self.left_handle_image));
        self.geometry.right_handle =
            Rect::from_center(right_center, self.handle_size(&self.right_handle_image));
        self.geometry.between_handles = Rect::new(
            left_center.x,
            line.min_y(),
            (right_center.x - left_center.x).max(0.0),
            self.line_height,
        );

        self.is_initial = self.selected_min_value == self.min_value
            && self.selected_max_value == self.max_value;
    }
}
