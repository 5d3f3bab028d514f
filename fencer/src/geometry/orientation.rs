use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;
use crate::geometry::primitives::Vector;

/// Fixed horizontal direction from which yaw angles are measured.
///
/// Only the horizontal (x, z) components are stored; the vector does not need to be normalized.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HeadingReference {
    pub x: f64,
    pub z: f64,
}

impl HeadingReference {
    /// The positive x-axis
    pub const X_AXIS: HeadingReference = HeadingReference { x: 1.0, z: 0.0 };

    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Unit vector in the horizontal plane, `None` if the reference has no usable direction
    pub fn unit(&self) -> Option<Vector> {
        match self.x.is_finite() && self.z.is_finite() {
            true => Vector(self.x, 0.0, self.z).normalize(),
            false => None,
        }
    }

    /// The reference turned by `yaw` radians, from +x toward +z
    pub fn rotated(&self, yaw: f64) -> Vector {
        let Vector(rx, _, rz) = self.unit().unwrap_or(Vector::X);
        let (sin, cos) = yaw.sin_cos();
        Vector(rx * cos - rz * sin, 0.0, rx * sin + rz * cos)
    }
}

impl Default for HeadingReference {
    fn default() -> Self {
        Self::X_AXIS
    }
}

/// Rotation of a single element, decomposed into a heading and a slope.
///
/// `yaw` turns the element around the vertical axis, away from the [`HeadingReference`] toward +z.
/// `tilt` then pitches the element's length axis up (positive) or down (negative) around its
/// horizontal side axis. Both in radians.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Orientation {
    pub yaw: f64,
    pub tilt: f64,
}

impl Orientation {
    pub fn new(yaw: f64, tilt: f64) -> Self {
        Self { yaw, tilt }
    }

    pub fn yaw_degrees(&self) -> f64 {
        self.yaw.to_degrees()
    }

    pub fn tilt_degrees(&self) -> f64 {
        self.tilt.to_degrees()
    }

    /// Horizontal direction the element faces
    pub fn heading(&self, reference: &HeadingReference) -> Vector {
        reference.rotated(self.yaw)
    }

    /// Axis around which the tilt is applied: the heading turned 90° around the up axis.
    ///
    /// A positive tilt around this axis (right-hand rule) lifts the front of the element.
    pub fn tilt_axis(&self, reference: &HeadingReference) -> Vector {
        self.heading(reference).cross(&Vector::UP)
    }

    /// Composes the full 3D rotation of the element
    pub fn rotation(&self, reference: &HeadingReference) -> Rotation {
        Rotation::from_orientation(self, reference)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "yaw: {:.3}°, tilt: {:.3}°",
            self.yaw.to_degrees(),
            self.tilt.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_from_x_faces_z() {
        let h = Orientation::new(FRAC_PI_2, 0.0).heading(&HeadingReference::X_AXIS);
        assert!(approx_eq!(f64, h.0, 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, h.2, 1.0, epsilon = 1e-12));
    }

    #[test]
    fn tilt_axis_is_horizontal_and_perpendicular() {
        let o = Orientation::new(0.7, 0.3);
        let r = HeadingReference::new(2.0, -1.0);
        let axis = o.tilt_axis(&r);
        assert!(approx_eq!(f64, axis.1, 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, axis.dot(&o.heading(&r)), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, axis.length(), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn degenerate_reference_has_no_unit() {
        assert_eq!(HeadingReference::new(0.0, 0.0).unit(), None);
        assert_eq!(HeadingReference::new(f64::NAN, 1.0).unit(), None);
    }
}
