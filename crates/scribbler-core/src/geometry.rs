//! Geometric primitives for canvas layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Scribbler uses the raster coordinate system of the output image:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left pixel corner, X grows to the right and Y grows
//! downward. "Top" therefore always means the smaller Y value.

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use scribbler_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

}

/// The dimensions of an image or an area
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

}

/// A rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates bounds at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self::new_from_top_left(Point::default(), size)
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn mid_x(self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn mid_y(self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the bottom-right corner as a Point
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Shrinks the bounds by `dx` on the left and right and by `dy` on the
    /// top and bottom. Negative values grow the bounds.
    pub fn inset(self, dx: f32, dy: f32) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x - dx,
            max_y: self.max_y - dy,
        }
    }

    /// Splits the bounds horizontally at `height` below the top edge,
    /// returning the `(top, bottom)` slices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scribbler_core::geometry::{Bounds, Size};
    /// let (top, bottom) = Bounds::from_size(Size::new(100.0, 400.0)).split_top(100.0);
    /// assert_eq!(top.height(), 100.0);
    /// assert_eq!(bottom.min_y(), 100.0);
    /// assert_eq!(bottom.height(), 300.0);
    /// ```
    pub fn split_top(self, height: f32) -> (Self, Self) {
        let split_y = self.min_y + height;
        (
            Self {
                max_y: split_y,
                ..self
            },
            Self {
                min_y: split_y,
                ..self
            },
        )
    }

    /// Splits the bounds horizontally at `height` above the bottom edge,
    /// returning the `(top, bottom)` slices.
    pub fn split_bottom(self, height: f32) -> (Self, Self) {
        self.split_top(self.height() - height)
    }

}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Splitting keeps the combined height and the shared edge.
    fn check_split_top_partitions(bounds: Bounds, fraction: f32) -> Result<(), TestCaseError> {
        let (top, bottom) = bounds.split_top(bounds.height() * fraction);

        prop_assert!(approx_eq!(
            f32,
            top.height() + bottom.height(),
            bounds.height(),
            epsilon = 0.01
        ));
        prop_assert_eq!(top.max_y(), bottom.min_y());
        prop_assert_eq!(top.width(), bounds.width());
        prop_assert_eq!(bottom.width(), bounds.width());
        Ok(())
    }

    /// Insetting never moves the center.
    fn check_inset_keeps_center(bounds: Bounds, dx: f32, dy: f32) -> Result<(), TestCaseError> {
        let inset = bounds.inset(dx, dy);

        prop_assert!(approx_eq!(f32, inset.mid_x(), bounds.mid_x(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, inset.mid_y(), bounds.mid_y(), epsilon = 0.01));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn split_top_partitions(bounds in bounds_strategy(), fraction in 0.0f32..1.0) {
            check_split_top_partitions(bounds, fraction)?;
        }

        #[test]
        fn inset_keeps_center(bounds in bounds_strategy(), dx in -50.0f32..50.0, dy in -50.0f32..50.0) {
            check_inset_keeps_center(bounds, dx, dy)?;
        }
    }
}
