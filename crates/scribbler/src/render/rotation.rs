//! Drawing inside a rotated rectangle.

use scribbler_core::{
    angle::Angle,
    geometry::{Bounds, Point},
};

use crate::{canvas::Canvas, error::Result};

/// Rotates a rectangle around its center before drawing into it.
///
/// Positive angles turn clockwise on screen, negative angles
/// counter-clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    angle: Angle,
}

impl Rotation {
    pub fn new(angle: Angle) -> Self {
        Self { angle }
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Runs `step` in a coordinate space rotated around the center of
    /// `rect`.
    ///
    /// The step receives the rectangle to draw into: `rect` itself when the
    /// angle is zero, otherwise a rectangle of the same size centered on the
    /// rotated origin. Canvas state changed by the rotation is restored
    /// before returning.
    pub fn draw<T>(
        &self,
        canvas: &mut Canvas,
        rect: Bounds,
        step: impl FnOnce(&mut Canvas, Bounds) -> Result<T>,
    ) -> Result<T> {
        if self.angle.is_zero() {
            return step(canvas, rect);
        }

        canvas.scoped(|canvas| {
            let center = rect.center();
            canvas.translate(center.x(), center.y());
            // The canvas turns counter-clockwise for positive angles.
            canvas.rotate(-self.angle.radians());

            let shifted = Bounds::new_from_center(Point::default(), rect.to_size());
            step(canvas, shifted)
        })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use scribbler_core::{color::Color, geometry::Size};
    use tiny_skia::Transform;

    use super::*;

    fn map(transform: Transform, point: Point) -> Point {
        Point::new(
            transform.sx * point.x() + transform.kx * point.y() + transform.tx,
            transform.ky * point.x() + transform.sy * point.y() + transform.ty,
        )
    }

    fn rect() -> Bounds {
        Bounds::new_from_top_left(Point::default(), Size::new(100.0, 100.0))
    }

    #[test]
    fn test_zero_angle_passes_rect_through() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let passed = Rotation::default()
            .draw(&mut canvas, rect(), |canvas, rect| {
                assert_eq!(canvas.transform(), Transform::identity());
                Ok(rect)
            })
            .unwrap();
        assert_eq!(passed, rect());
    }

    #[test]
    fn test_step_receives_centered_rect() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let passed = Rotation::new(Angle::from_degrees(30.0))
            .draw(&mut canvas, rect(), |_, rect| Ok(rect))
            .unwrap();

        assert_eq!(passed.min_point(), Point::new(-50.0, -50.0));
        assert_eq!(passed.to_size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_positive_angle_turns_clockwise() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let transform = Rotation::new(Angle::from_degrees(90.0))
            .draw(&mut canvas, rect(), |canvas, _| Ok(canvas.transform()))
            .unwrap();

        // A point right of the center ends up below it after a clockwise
        // quarter turn on a y-down surface.
        let device = map(transform, Point::new(10.0, 0.0));
        assert_approx_eq!(f32, device.x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, device.y(), 60.0, epsilon = 1e-4);

        // The origin of the step's space is the center of the rectangle.
        let center = map(transform, Point::default());
        assert_approx_eq!(f32, center.x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, center.y(), 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_negative_angle_turns_counter_clockwise() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let transform = Rotation::new(Angle::from_radians(-std::f64::consts::FRAC_PI_2))
            .draw(&mut canvas, rect(), |canvas, _| Ok(canvas.transform()))
            .unwrap();

        let device = map(transform, Point::new(10.0, 0.0));
        assert_approx_eq!(f32, device.x(), 50.0, epsilon = 1e-4);
        assert_approx_eq!(f32, device.y(), 40.0, epsilon = 1e-4);
    }

    #[test]
    fn test_state_is_restored() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let result: Result<()> = Rotation::new(Angle::from_degrees(45.0)).draw(
            &mut canvas,
            rect(),
            |canvas, rect| {
                canvas.fill_path(&crate::canvas::rect_path(rect, 0.0)?, Color::RED)?;
                Err(crate::error::ScribblerError::Precondition("stop".to_string()))
            },
        );

        assert!(result.is_err());
        assert_eq!(canvas.transform(), Transform::identity());
    }
}
