//! Gradient geometry for rectangles.
//!
//! Resolves where a linear or radial gradient starts and ends inside a
//! rectangle for a given [`Direction`], and where its color stops sit.

use log::trace;
use tiny_skia::{GradientStop, LinearGradient, RadialGradient, Shader, SpreadMode, Transform};

use scribbler_core::{
    color::{Color, Direction},
    geometry::{Bounds, Point},
};

use crate::{
    canvas::to_skia_color,
    error::{Result, ScribblerError},
};

/// Start, end and radius of a gradient inside a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientGeometry {
    start: Point,
    end: Point,
    radius: f32,
}

impl GradientGeometry {
    /// Resolves the geometry of a gradient running across `bounds` in
    /// `direction`.
    ///
    /// Axis-aligned directions run between the midpoints of opposing edges,
    /// with a radius of half the orthogonal dimension. Diagonal directions
    /// run between opposing corners, with a radius equal to the altitude of
    /// the right triangle over the diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribbler::render::GradientGeometry;
    /// use scribbler_core::{
    ///     color::Direction,
    ///     geometry::{Bounds, Point, Size},
    /// };
    ///
    /// let bounds = Bounds::new_from_top_left(Point::default(), Size::new(300.0, 400.0));
    /// let geometry = GradientGeometry::resolve(bounds, Direction::ToBottomRight);
    /// assert!((geometry.radius() - 240.0).abs() < 1e-3);
    /// ```
    pub fn resolve(bounds: Bounds, direction: Direction) -> Self {
        let (min_x, mid_x, max_x) = (bounds.min_x(), bounds.mid_x(), bounds.max_x());
        let (min_y, mid_y, max_y) = (bounds.min_y(), bounds.mid_y(), bounds.max_y());

        let (start, end) = match direction {
            Direction::ToRight => (Point::new(min_x, mid_y), Point::new(max_x, mid_y)),
            Direction::ToLeft => (Point::new(max_x, mid_y), Point::new(min_x, mid_y)),
            Direction::ToBottom => (Point::new(mid_x, min_y), Point::new(mid_x, max_y)),
            Direction::ToTop => (Point::new(mid_x, max_y), Point::new(mid_x, min_y)),
            Direction::ToBottomRight => (Point::new(min_x, min_y), Point::new(max_x, max_y)),
            Direction::ToBottomLeft => (Point::new(max_x, min_y), Point::new(min_x, max_y)),
            Direction::ToTopRight => (Point::new(min_x, max_y), Point::new(max_x, min_y)),
            Direction::ToTopLeft => (Point::new(max_x, max_y), Point::new(min_x, min_y)),
        };

        let radius = match direction {
            Direction::ToRight | Direction::ToLeft => bounds.height() / 2.0,
            Direction::ToBottom | Direction::ToTop => bounds.width() / 2.0,
            _ => diagonal_altitude(bounds.width(), bounds.height()),
        };

        trace!(
            direction:? = direction,
            start_x = start.x(),
            start_y = start.y(),
            end_x = end.x(),
            end_y = end.y(),
            radius = radius;
            "Resolved gradient geometry"
        );

        Self { start, end, radius }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The end radius of a radial gradient.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Builds a linear gradient shader along this geometry.
    pub fn linear_shader(&self, colors: &[Color]) -> Result<Shader<'static>> {
        LinearGradient::new(
            to_skia_point(self.start),
            to_skia_point(self.end),
            gradient_stops(colors)?,
            SpreadMode::Pad,
            Transform::identity(),
        )
        .ok_or_else(|| degenerate("linear"))
    }

    /// Builds a radial gradient shader growing from the start point to a
    /// circle of [`radius`](Self::radius) around the end point.
    pub fn radial_shader(&self, colors: &[Color]) -> Result<Shader<'static>> {
        RadialGradient::new(
            to_skia_point(self.start),
            to_skia_point(self.end),
            self.radius,
            gradient_stops(colors)?,
            SpreadMode::Pad,
            Transform::identity(),
        )
        .ok_or_else(|| degenerate("radial"))
    }
}

/// Altitude over the hypotenuse of a right triangle with legs `a` and `b`.
///
/// With hypotenuse `c`, the legs project onto it as `p = a²/c` and
/// `q = b²/c`, and the altitude is their geometric mean.
fn diagonal_altitude(a: f32, b: f32) -> f32 {
    let c = a.hypot(b);
    if c == 0.0 {
        return 0.0;
    }
    let p = a * a / c;
    let q = b * b / c;
    (p * q).sqrt()
}

/// Distributes `count` color stops evenly over `[0, 1]`.
///
/// The first stop is exactly `0.0` and the last exactly `1.0`.
///
/// # Errors
///
/// Returns [`ScribblerError::Precondition`] for fewer than two stops.
///
/// # Examples
///
/// ```
/// use scribbler::render::distribute_stops;
///
/// assert_eq!(distribute_stops(5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(distribute_stops(1).is_err());
/// ```
pub fn distribute_stops(count: usize) -> Result<Vec<f32>> {
    if count < 2 {
        return Err(ScribblerError::Precondition(format!(
            "a gradient needs at least 2 colors, got {count}"
        )));
    }

    let step = 1.0 / (count - 1) as f32;
    let mut stops: Vec<f32> = (0..count).map(|i| i as f32 * step).collect();
    stops[0] = 0.0;
    stops[count - 1] = 1.0;
    Ok(stops)
}

fn gradient_stops(colors: &[Color]) -> Result<Vec<GradientStop>> {
    let positions = distribute_stops(colors.len())?;
    Ok(positions
        .into_iter()
        .zip(colors)
        .map(|(position, color)| GradientStop::new(position, to_skia_color(*color)))
        .collect())
}

fn to_skia_point(point: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(point.x(), point.y())
}

fn degenerate(kind: &str) -> ScribblerError {
    ScribblerError::Precondition(format!("cannot build a {kind} gradient over an empty area"))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use scribbler_core::geometry::Size;

    use super::*;

    fn bounds(x: f32, y: f32, width: f32, height: f32) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn test_distribute_stops() {
        assert_eq!(
            distribute_stops(5).unwrap(),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
        assert_eq!(distribute_stops(2).unwrap(), vec![0.0, 1.0]);
        assert!(matches!(
            distribute_stops(0),
            Err(ScribblerError::Precondition(_))
        ));
        assert!(matches!(
            distribute_stops(1),
            Err(ScribblerError::Precondition(_))
        ));
    }

    #[test]
    fn test_distribute_stops_pins_last_stop() {
        // Thirds are not exactly representable.
        let stops = distribute_stops(7).unwrap();
        assert_eq!(stops.len(), 7);
        assert_eq!(stops[0], 0.0);
        assert_eq!(stops[6], 1.0);
        assert_approx_eq!(f32, stops[2], 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_diagonal_altitude() {
        assert_approx_eq!(f32, diagonal_altitude(300.0, 400.0), 240.0, epsilon = 1e-3);
        assert_approx_eq!(f32, diagonal_altitude(400.0, 300.0), 240.0, epsilon = 1e-3);
        assert_eq!(diagonal_altitude(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_axis_aligned_geometry() {
        let rect = bounds(10.0, 20.0, 100.0, 50.0);

        let to_right = GradientGeometry::resolve(rect, Direction::ToRight);
        assert_eq!(to_right.start(), Point::new(10.0, 45.0));
        assert_eq!(to_right.end(), Point::new(110.0, 45.0));
        assert_eq!(to_right.radius(), 25.0);

        let to_top = GradientGeometry::resolve(rect, Direction::ToTop);
        assert_eq!(to_top.start(), Point::new(60.0, 70.0));
        assert_eq!(to_top.end(), Point::new(60.0, 20.0));
        assert_eq!(to_top.radius(), 50.0);
    }

    #[test]
    fn test_diagonal_geometry() {
        let rect = bounds(0.0, 0.0, 300.0, 400.0);

        let to_top_right = GradientGeometry::resolve(rect, Direction::ToTopRight);
        assert_eq!(to_top_right.start(), Point::new(0.0, 400.0));
        assert_eq!(to_top_right.end(), Point::new(300.0, 0.0));
        assert_approx_eq!(f32, to_top_right.radius(), 240.0, epsilon = 1e-3);

        let to_bottom_left = GradientGeometry::resolve(rect, Direction::ToBottomLeft);
        assert_eq!(to_bottom_left.start(), Point::new(300.0, 0.0));
        assert_eq!(to_bottom_left.end(), Point::new(0.0, 400.0));
    }

    #[test]
    fn test_opposite_directions_swap_endpoints() {
        let rect = bounds(5.0, 5.0, 70.0, 30.0);
        let pairs = [
            (Direction::ToRight, Direction::ToLeft),
            (Direction::ToBottom, Direction::ToTop),
            (Direction::ToBottomRight, Direction::ToTopLeft),
            (Direction::ToBottomLeft, Direction::ToTopRight),
        ];
        for (forward, backward) in pairs {
            let a = GradientGeometry::resolve(rect, forward);
            let b = GradientGeometry::resolve(rect, backward);
            assert_eq!(a.start(), b.end(), "{forward:?}");
            assert_eq!(a.end(), b.start(), "{forward:?}");
            assert_eq!(a.radius(), b.radius(), "{forward:?}");
        }
    }

    #[test]
    fn test_shaders_need_two_colors() {
        let geometry = GradientGeometry::resolve(bounds(0.0, 0.0, 10.0, 10.0), Direction::ToRight);
        assert!(geometry.linear_shader(&[Color::RED]).is_err());
        assert!(geometry.linear_shader(&[Color::RED, Color::WHITE]).is_ok());
        assert!(geometry.radial_shader(&[Color::RED, Color::WHITE]).is_ok());
    }
}
