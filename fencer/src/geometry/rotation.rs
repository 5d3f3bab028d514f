use std::ops::{Add, Mul};

use crate::geometry::primitives::Vector;
use crate::geometry::{HeadingReference, Orientation};

/// Proper rotation in 3D, in matrix form.
///
/// The columns are the images of the local x (length), y (up) and z (side) axes of an element.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rotation {
    matrix: [[f64; 3]; 3],
}

impl Rotation {
    pub const fn empty() -> Self {
        Self {
            matrix: EMPTY_MATRIX,
        }
    }

    /// Right-handed rotation of `angle` radians around `axis` (Rodrigues' formula).
    /// A zero axis yields the identity.
    pub fn from_axis_angle(axis: Vector, angle: f64) -> Self {
        let Some(Vector(kx, ky, kz)) = axis.normalize() else {
            return Self::empty();
        };
        let (sin, cos) = angle.sin_cos();
        let c1 = 1.0 - cos;

        Self {
            matrix: [
                [cos + kx * kx * c1, kx * ky * c1 - kz * sin, kx * kz * c1 + ky * sin],
                [ky * kx * c1 + kz * sin, cos + ky * ky * c1, ky * kz * c1 - kx * sin],
                [kz * kx * c1 - ky * sin, kz * ky * c1 + kx * sin, cos + kz * kz * c1],
            ],
        }
    }

    /// Local x is mapped onto the tilted heading, local y onto the tilted up axis
    /// and local z onto the tilt axis.
    pub fn from_orientation(o: &Orientation, reference: &HeadingReference) -> Self {
        let h = o.heading(reference);
        let (sin, cos) = o.tilt.sin_cos();
        let forward = h * cos + Vector::UP * sin;
        let up = Vector::UP * cos - h * sin;
        let side = o.tilt_axis(reference);
        Self::from_columns(forward, up, side)
    }

    pub fn from_columns(x: Vector, y: Vector, z: Vector) -> Self {
        Self {
            matrix: [[x.0, y.0, z.0], [x.1, y.1, z.1], [x.2, y.2, z.2]],
        }
    }

    /// Applies `other` after `self`
    pub fn then(mut self, other: &Self) -> Self {
        self.matrix = dot_prod(&other.matrix, &self.matrix);
        self
    }

    /// The inverse of a rotation is its transpose
    pub fn inverse(mut self) -> Self {
        let m = self.matrix;
        self.matrix = [
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ];
        self
    }

    pub fn apply(&self, v: Vector) -> Vector {
        let m = &self.matrix;
        Vector(
            m[0][0] * v.0 + m[0][1] * v.1 + m[0][2] * v.2,
            m[1][0] * v.0 + m[1][1] * v.1 + m[1][2] * v.2,
            m[2][0] * v.0 + m[2][1] * v.1 + m[2][2] * v.2,
        )
    }

    pub fn forward(&self) -> Vector {
        self.column(0)
    }

    pub fn up(&self) -> Vector {
        self.column(1)
    }

    pub fn side(&self) -> Vector {
        self.column(2)
    }

    fn column(&self, i: usize) -> Vector {
        Vector(self.matrix[0][i], self.matrix[1][i], self.matrix[2][i])
    }

    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    pub fn is_empty(&self) -> bool {
        self.matrix == EMPTY_MATRIX
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::empty()
    }
}

const EMPTY_MATRIX: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

#[inline(always)]
fn dot_prod<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    let cell = |i: usize, j: usize| l[i][0] * r[0][j] + l[i][1] * r[1][j] + l[i][2] * r[2][j];
    [
        [cell(0, 0), cell(0, 1), cell(0, 2)],
        [cell(1, 0), cell(1, 1), cell(1, 2)],
        [cell(2, 0), cell(2, 1), cell(2, 2)],
    ]
}
