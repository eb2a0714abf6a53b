//! Conversion between domain values and horizontal positions on the track.
//!
//! The forward and inverse mappings share one [`TrackMetrics`], so a value
//! mapped to `x` and back comes out unchanged up to floating point error.

/// Fraction of the way `value` lies between `min_value` and `max_value`.
///
/// A degenerate domain (`min_value >= max_value`) collapses to the left edge
/// and always yields `0.0`.
pub fn percentage_along_line(value: f32, min_value: f32, max_value: f32) -> f32 {
    if min_value >= max_value {
        return 0.0;
    }
    (value - min_value) / (max_value - min_value)
}

/// The usable horizontal span of the track together with the value domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    /// Leftmost x a handle centre can take.
    pub start_x: f32,
    /// Rightmost x a handle centre can take.
    pub end_x: f32,
    /// Value at `start_x`.
    pub min_value: f32,
    /// Value at `end_x`.
    pub max_value: f32,
}

impl TrackMetrics {
    /// Builds metrics for a line spanning `line_min_x..line_max_x`.
    ///
    /// `left_inset` and `right_inset` pull the ends in so that a wide handle
    /// centred at either end stays within the line.
    pub fn new(
        line_min_x: f32,
        line_max_x: f32,
        left_inset: f32,
        right_inset: f32,
        min_value: f32,
        max_value: f32,
    ) -> Self {
        Self {
            start_x: line_min_x + left_inset,
            end_x: line_max_x - right_inset,
            min_value,
            max_value,
        }
    }

    /// Usable width between both ends.
    pub fn span(&self) -> f32 {
        self.end_x - self.start_x
    }

    /// Maps a domain value to the x coordinate of a handle centre.
    pub fn x_for_value(&self, value: f32) -> f32 {
        let percentage = percentage_along_line(value, self.min_value, self.max_value);
        self.start_x + percentage * self.span()
    }

    /// Maps an x coordinate back to a domain value.
    ///
    /// The result is not clamped; callers apply the domain constraints. A
    /// track with no usable span maps everything to `min_value`.
    pub fn value_for_x(&self, x: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return self.min_value;
        }
        let percentage = (x - self.start_x) / span;
        percentage * (self.max_value - self.min_value) + self.min_value
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn metrics() -> TrackMetrics {
        TrackMetrics::new(16.0, 304.0, 0.0, 0.0, 0.0, 100.0)
    }

    #[test]
    fn degenerate_domain_maps_to_left_edge() {
        assert_eq!(percentage_along_line(5.0, 5.0, 5.0), 0.0);
        let metrics = TrackMetrics::new(16.0, 304.0, 0.0, 0.0, 5.0, 5.0);
        assert_eq!(metrics.x_for_value(5.0), 16.0);
        assert_eq!(metrics.x_for_value(500.0), 16.0);
    }

    #[rstest]
    #[case(0.0, 16.0)]
    #[case(50.0, 160.0)]
    #[case(100.0, 304.0)]
    fn forward_mapping(#[case] value: f32, #[case] x: f32) {
        assert!((metrics().x_for_value(value) - x).abs() < 1e-4);
    }

    #[rstest]
    #[case(0.0)]
    #[case(12.5)]
    #[case(33.3)]
    #[case(99.9)]
    #[case(100.0)]
    fn round_trip_is_exact(#[case] value: f32) {
        let metrics = TrackMetrics::new(16.0, 304.0, 12.0, 20.0, -40.0, 160.0);
        let back = metrics.value_for_x(metrics.x_for_value(value));
        assert!((back - value).abs() < 1e-3, "{value} came back as {back}");
    }

    #[test]
    fn insets_shrink_the_span() {
        let metrics = TrackMetrics::new(16.0, 304.0, 10.0, 14.0, 0.0, 100.0);
        assert_eq!(metrics.x_for_value(0.0), 26.0);
        assert_eq!(metrics.x_for_value(100.0), 290.0);
        assert_eq!(metrics.value_for_x(26.0), 0.0);
    }

    #[test]
    fn inverse_is_unclamped() {
        assert!(metrics().value_for_x(0.0) < 0.0);
        assert!(metrics().value_for_x(320.0) > 100.0);
    }

    #[test]
    fn collapsed_track_maps_to_min() {
        let metrics = TrackMetrics::new(16.0, 16.0, 0.0, 0.0, 3.0, 9.0);
        assert_eq!(metrics.value_for_x(100.0), 3.0);
    }
}
