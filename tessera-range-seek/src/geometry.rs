//! Geometry records exchanged with the host toolkit.
//!
//! All values are in the control's own coordinate space:
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! The slider never touches a rendering API. It produces [`Rect`]s for the
//! track, both handles and the highlighted segment, and a rendering
//! collaborator turns them into pixels.

/// A 2D point. Distances between points use [`Point::distance`].
pub use glam::Vec2 as Point;

/// A 2D size (width, height).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A size with both dimensions set to zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// An axis-aligned rectangle described by its origin and size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle of `size` centred on `center`.
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Top edge.
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Horizontal centre.
    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Vertical centre.
    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// The centre point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Grows the rectangle by `margin` on every side.
    ///
    /// A negative margin shrinks it; the size never drops below zero.
    pub fn expand(&self, margin: f32) -> Self {
        let width = (self.size.width + margin * 2.0).max(0.0);
        let height = (self.size.height + margin * 2.0).max(0.0);
        Self::from_center(self.center(), Size::new(width, height))
    }

    /// Whether `point` lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_places_origin() {
        let rect = Rect::from_center(Point::new(50.0, 20.0), Size::square(10.0));
        assert_eq!(rect, Rect::new(45.0, 15.0, 10.0, 10.0));
        assert_eq!(rect.center(), Point::new(50.0, 20.0));
    }

    #[test]
    fn expand_keeps_center() {
        let rect = Rect::new(10.0, 10.0, 4.0, 6.0).expand(30.0);
        assert_eq!(rect, Rect::new(-20.0, -20.0, 64.0, 66.0));
    }

    #[test]
    fn expand_of_empty_rect_is_a_square_target() {
        let rect = Rect::from_center(Point::new(16.0, 32.0), Size::ZERO).expand(30.0);
        assert!(rect.contains(Point::new(16.0, 32.0)));
        assert!(rect.contains(Point::new(-14.0, 2.0)));
        assert!(!rect.contains(Point::new(46.0, 32.0)));
    }

    #[test]
    fn negative_expand_saturates_at_zero() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0).expand(-10.0);
        assert_eq!(rect.size, Size::ZERO);
        assert_eq!(rect.center(), Point::new(2.0, 2.0));
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
