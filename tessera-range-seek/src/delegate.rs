//! Observer interface for gesture and selection notifications.

use crate::slider::RangeSeekSlider;

/// Receives notifications from a [`RangeSeekSlider`].
///
/// The slider holds its delegate through a `Weak` reference and never keeps
/// it alive. Every method is called after the triggering mutation has
/// completed, with a shared borrow of the slider, so a delegate can read but
/// not mutate the control it observes.
pub trait RangeSeekDelegate: Send + Sync {
    /// A touch landed on one of the handles and tracking started.
    fn did_start_touches(&self, _slider: &RangeSeekSlider) {}

    /// The current touch gesture ended.
    fn did_end_touches(&self, _slider: &RangeSeekSlider) {}

    /// A drag moved the selection. Programmatic changes do not report here.
    fn did_change(&self, slider: &RangeSeekSlider, min_value: f32, max_value: f32);
}
