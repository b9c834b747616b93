//! Rotation angles.
//!
//! An [`Angle`] stores its value in radians. It also remembers whether it was
//! authored in degrees so that re-serializing it keeps the unit the user
//! wrote. Positive angles rotate clockwise on screen.

use std::f64::consts::PI;

/// A signed rotation angle.
///
/// Two angles are equal when their radian values are equal; the preferred
/// unit does not take part in comparisons.
///
/// # Examples
///
/// ```
/// use scribbler_core::angle::Angle;
///
/// let half_turn = Angle::from_degrees(180.0);
/// assert!(half_turn.prefers_degrees());
/// assert_eq!(half_turn, Angle::from_radians(std::f64::consts::PI));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Angle {
    radians: f64,
    prefers_degrees: bool,
}

impl Angle {
    /// The zero angle. Rotating by it is a no-op.
    pub const ZERO: Angle = Angle {
        radians: 0.0,
        prefers_degrees: false,
    };

    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            prefers_degrees: false,
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
            prefers_degrees: true,
        }
    }

    /// Returns the angle in radians.
    pub fn radians(self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees.
    pub fn degrees(self) -> f64 {
        self.radians * 180.0 / PI
    }

    /// Returns `true` if the angle was authored in degrees.
    pub fn prefers_degrees(self) -> bool {
        self.prefers_degrees
    }

    pub fn is_zero(self) -> bool {
        self.radians == 0.0
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.radians == other.radians
    }
}
