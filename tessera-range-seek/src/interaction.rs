//! Host pointer events folded onto the slider's touch lifecycle.
//!
//! Hosts that deliver raw pointer events instead of begin/continue/end calls
//! keep a [`RangeSeekController`] next to the slider and pass each frame's
//! events through [`RangeSeekController::handle_events`].
use tracing::trace;

use crate::{geometry::Point, slider::RangeSeekSlider};

/// A pointer event in the slider's own coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer went down.
    Pressed(Point),
    /// The pointer moved while down.
    Moved(Point),
    /// The pointer went up.
    Released,
    /// The host took the pointer away, e.g. for a scroll gesture.
    Cancelled,
}

/// Gesture bookkeeping for one slider.
///
/// A press that misses both handles starts no gesture, so the matching
/// moves and release are not forwarded. Presses while a gesture is live are
/// ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RangeSeekController {
    is_tracking: bool,
}

impl RangeSeekController {
    /// Creates a controller with no active gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture started by this controller is still live.
    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    /// Forwards `events` to `slider` in order.
    ///
    /// Returns `true` when at least one event was consumed by the slider.
    pub fn handle_events<I>(&mut self, slider: &mut RangeSeekSlider, events: I) -> bool
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        let mut handled = false;
        for event in events {
            handled |= self.handle_event(slider, event);
        }
        handled
    }

    fn handle_event(&mut self, slider: &mut RangeSeekSlider, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed(location) => {
                if self.is_tracking {
                    trace!("ignoring press during an active gesture");
                    return false;
                }
                self.is_tracking = slider.begin_tracking(location);
                self.is_tracking
            }
            PointerEvent::Moved(location) => {
                self.is_tracking && slider.continue_tracking(location)
            }
            PointerEvent::Released | PointerEvent::Cancelled => {
                if !self.is_tracking {
                    return false;
                }
                self.is_tracking = false;
                slider.end_tracking();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{geometry::Size, slider::HandleTracking};

    use super::*;

    fn slider() -> RangeSeekSlider {
        let mut slider = RangeSeekSlider::new();
        slider.set_bounds(Size::new(320.0, 65.0));
        slider
    }

    #[test]
    fn press_move_release_drags_a_handle() {
        let mut slider = slider();
        let mut controller = RangeSeekController::new();
        let handled = controller.handle_events(
            &mut slider,
            [
                PointerEvent::Pressed(Point::new(304.0, 32.0)),
                PointerEvent::Moved(Point::new(160.0, 32.0)),
            ],
        );
        assert!(handled);
        assert!(controller.is_tracking());
        assert_eq!(slider.handle_tracking(), HandleTracking::Right);
        assert!((slider.selected_max_value() - 50.0).abs() < 1e-3);

        assert!(controller.handle_events(&mut slider, [PointerEvent::Released]));
        assert!(!controller.is_tracking());
        assert_eq!(slider.handle_tracking(), HandleTracking::None);
    }

    #[test]
    fn missed_press_swallows_nothing() {
        let mut slider = slider();
        let mut controller = RangeSeekController::new();
        let handled = controller.handle_events(
            &mut slider,
            [
                PointerEvent::Pressed(Point::new(160.0, 32.0)),
                PointerEvent::Moved(Point::new(200.0, 32.0)),
                PointerEvent::Released,
            ],
        );
        assert!(!handled);
        assert_eq!(slider.selected_max_value(), 100.0);
    }

    #[test]
    fn second_press_is_ignored_and_cancel_ends() {
        let mut slider = slider();
        let mut controller = RangeSeekController::new();
        controller.handle_events(&mut slider, [PointerEvent::Pressed(Point::new(16.0, 32.0))]);
        assert_eq!(slider.handle_tracking(), HandleTracking::Left);

        let handled =
            controller.handle_events(&mut slider, [PointerEvent::Pressed(Point::new(304.0, 32.0))]);
        assert!(!handled);
        assert_eq!(slider.handle_tracking(), HandleTracking::Left);

        assert!(controller.handle_events(&mut slider, [PointerEvent::Cancelled]));
        assert_eq!(slider.handle_tracking(), HandleTracking::None);
    }
}
